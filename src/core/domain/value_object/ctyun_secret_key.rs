use crate::core::domain::error::ValidationError;
use std::fmt;

/// The private half of a CTyun credential pair.
///
/// Never transmitted; only folded into the request signature. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct CtyunSecretKey(String);

impl CtyunSecretKey {
    /// Creates a validated secret key.
    ///
    /// # Errors
    /// Returns `ValidationError` if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        validate_secret_key(&key)?;
        Ok(Self(key))
    }

    /// Creates a new secret key without validation.
    pub(crate) fn new_unchecked(key: String) -> Self {
        Self(key)
    }

    /// Returns the secret key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CtyunSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CtyunSecretKey(***)")
    }
}

/// Validates a secret key.
pub(crate) fn validate_secret_key(key: &str) -> Result<(), ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::Field {
            field: "secret_key".to_string(),
            message: "Secret key cannot be empty".to_string(),
        });
    }
    Ok(())
}
