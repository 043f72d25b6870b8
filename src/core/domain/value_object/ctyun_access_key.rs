use crate::core::domain::error::ValidationError;

/// The public half of a CTyun credential pair. Sent with every request as `accessKey`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtyunAccessKey(String);

impl CtyunAccessKey {
    /// Creates a validated access key.
    ///
    /// # Errors
    /// Returns `ValidationError` if the key is empty or contains whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        validate_access_key(&key)?;
        Ok(Self(key))
    }

    /// Creates a new access key without validation.
    pub(crate) fn new_unchecked(key: String) -> Self {
        Self(key)
    }

    /// Returns the access key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates an access key.
pub(crate) fn validate_access_key(key: &str) -> Result<(), ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::Field {
            field: "access_key".to_string(),
            message: "Access key cannot be empty".to_string(),
        });
    }
    if key.chars().any(char::is_whitespace) {
        return Err(ValidationError::Format(
            "Access key cannot contain whitespace".to_string(),
        ));
    }
    Ok(())
}
