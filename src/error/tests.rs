//! Tests for error types.

#[cfg(test)]
mod tests {
    use super::super::*;

    fn int_error(raw: &str) -> ValueError {
        let source = raw.parse::<i32>().unwrap_err();
        ValueError::InvalidInt {
            raw: raw.to_string(),
            source,
        }
    }

    #[test]
    fn test_error_display() {
        let err = Error::config("duplicate declaration of FOO");
        assert_eq!(
            err.to_string(),
            "configuration error: duplicate declaration of FOO"
        );
    }

    #[test]
    fn test_invalid_int_display() {
        let err = int_error("abc");
        assert_eq!(
            err.to_string(),
            "invalid integer \"abc\": invalid digit found in string"
        );
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ValueError::invalid("maybe", "expected yes or no");
        assert_eq!(err.to_string(), "invalid value \"maybe\": expected yes or no");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new("PORT", int_error("abc"));
        assert_eq!(
            err.to_string(),
            "parse error PORT: invalid integer \"abc\": invalid digit found in string"
        );
    }

    #[test]
    fn test_parse_error_source_chain() {
        use std::error::Error as _;

        let err = ParseError::new("PORT", int_error("99999999999"));
        let source = err.source().expect("parse error has a source");
        assert!(source.to_string().contains("99999999999"));
        assert!(source.source().is_some());
    }

    #[test]
    fn test_parse_error_conversion_is_transparent() {
        let parse_err = ParseError::new("PORT", int_error("x"));
        let expected = parse_err.to_string();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Parse(_)));
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(ParseError::EXIT_CODE, 2);
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> std::result::Result<(), ParseError> {
            Err(ParseError::new("X", ValueError::invalid("", "empty")))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        let err = outer().unwrap_err();
        assert_eq!(err.to_string(), "parse error X: invalid value \"\": empty");
    }
}
