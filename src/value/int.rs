use super::EnvValue;
use crate::ValueError;

/// Base-10, 32-bit signed. A leading `+` or `-` is accepted.
impl EnvValue for i32 {
    const KIND: &'static str = "int";

    fn parse_env(raw: &str) -> Result<Self, ValueError> {
        raw.parse::<Self>().map_err(|source| ValueError::InvalidInt {
            raw: raw.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_signed_decimal() {
        assert_eq!(i32::parse_env("100").unwrap(), 100);
        assert_eq!(i32::parse_env("-100").unwrap(), -100);
        assert_eq!(i32::parse_env("+7").unwrap(), 7);
        assert_eq!(i32::parse_env("0").unwrap(), 0);
    }

    #[test]
    fn test_range_limits() {
        assert_eq!(i32::parse_env("2147483647").unwrap(), i32::MAX);
        assert_eq!(i32::parse_env("-2147483648").unwrap(), i32::MIN);
        assert!(i32::parse_env("2147483648").is_err());
        assert!(i32::parse_env("-2147483649").is_err());
    }

    #[test]
    fn test_rejects_malformed() {
        for raw in ["abc", "", " 1", "1 ", "0x10", "1.5", "1_000"] {
            let err = i32::parse_env(raw).unwrap_err();
            assert!(
                matches!(err, ValueError::InvalidInt { .. }),
                "'{raw}' should be rejected"
            );
        }
    }
}
