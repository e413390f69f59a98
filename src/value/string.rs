use super::EnvValue;
use crate::ValueError;

impl EnvValue for String {
    const KIND: &'static str = "string";

    fn parse_env(raw: &str) -> Result<Self, ValueError> {
        Ok(raw.to_string())
    }
}
