use thiserror::Error;

pub type Result<T> = std::result::Result<T, FilterError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A date field without a wildcard held a value that is not a date.
    #[error("Field {field}: '{value}' is not a valid date")]
    Validation { field: String, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl FilterError {
    pub fn validation(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = FilterError::validation("DueDate", "13/40/2023");
        assert_eq!(err.field(), Some("DueDate"));
        assert_eq!(
            err.to_string(),
            "Field DueDate: '13/40/2023' is not a valid date"
        );
    }

    #[test]
    fn test_config_has_no_field() {
        let err = FilterError::Config("empty wildcard".to_string());
        assert!(err.field().is_none());
    }
}
