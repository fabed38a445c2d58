use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortFormError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortFormError {
    /// The value stored under `key` is not a known short form.
    #[error("Unknown value for {key}: '{value}'")]
    InvalidAlias { key: String, value: String },
}

impl ShortFormError {
    pub fn invalid_alias(key: impl Into<String>, value: impl Into<String>) -> Self {
        ShortFormError::InvalidAlias {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_alias_message() {
        let err = ShortFormError::invalid_alias("format", "pdf");
        assert_eq!(err.to_string(), "Unknown value for format: 'pdf'");
    }
}
