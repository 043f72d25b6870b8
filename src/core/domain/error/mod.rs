use thiserror::Error;

/// The main error type for CTyun driver operations.
///
/// Every failure the driver can surface maps to exactly one variant so callers
/// can branch on the kind (re-authenticate on [`CtyunError::InvalidCredentials`],
/// fix the call site on [`CtyunError::InvalidParameter`], and so on) instead of
/// inspecting messages.
#[derive(Error, Debug)]
pub enum CtyunError {
    /// The request could not be sent or the HTTP client could not be built
    ///
    /// # Fields
    /// * `0` - A description of what went wrong at the network layer
    #[error("Connection error: {0}")]
    Connection(String),

    /// The provider answered `401 Unauthorized`
    ///
    /// # Fields
    /// * `0` - The response body, or `"<status>: <reason>"` when the body was empty
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Any non-200, non-401 HTTP status
    ///
    /// # Fields
    /// * `status` - The HTTP status code
    /// * `body` - The raw response body
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// A required argument was missing or empty. Raised before any request is sent.
    #[error("Invalid parameter '{field}': {message}")]
    InvalidParameter { field: String, message: String },

    /// The provider reported a status string absent from the lookup tables
    ///
    /// # Fields
    /// * `table` - Which lookup table was consulted (`"node"` or `"volume"`)
    /// * `value` - The unrecognized status string
    #[error("Unmapped {table} state: '{value}'")]
    UnmappedState { table: &'static str, value: String },

    /// A response lacked the payload the caller needed
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Client configuration failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The generic driver operation is not offered by this provider
    #[error("Operation not supported by the CTyun driver: {0}")]
    Unsupported(&'static str),
}

impl CtyunError {
    /// Shorthand for the "identifier is empty" precondition failure.
    pub(crate) fn empty_param(field: &str) -> Self {
        CtyunError::InvalidParameter {
            field: field.to_string(),
            message: format!("{} is empty", field),
        }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a CtyunError
pub type CtyunResult<T> = Result<T, CtyunError>;

/// Fails with [`CtyunError::InvalidParameter`] when `value` is empty.
pub(crate) fn require_non_empty(field: &str, value: &str) -> CtyunResult<()> {
    if value.trim().is_empty() {
        return Err(CtyunError::empty_param(field));
    }
    Ok(())
}
