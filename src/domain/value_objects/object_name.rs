use crate::domain::errors::ValidationError;

/// A validated object name as returned by a bucket listing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectName(String);

impl ObjectName {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyObjectName);
        }

        if value.len() > 1024 {
            return Err(ValidationError::ObjectNameTooLong {
                actual: value.len(),
                max: 1024,
            });
        }

        if let Some(c) = value.chars().find(|c| matches!(c, '\r' | '\n')) {
            return Err(ValidationError::InvalidObjectNameCharacter(c));
        }

        if value == "." || value == ".." {
            return Err(ValidationError::ObjectNameIsRelativeReference(value));
        }

        Ok(Self(value))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ObjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
