use crate::core::domain::error::ValidationError;
use crate::core::domain::value_object::CtyunHost;
use url::Url;

/// The validated base URL every API path is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtyunUrl(Url);

impl CtyunUrl {
    /// Wraps an already parsed URL without validation.
    pub(crate) fn new_unchecked(url: Url) -> Self {
        Self(url)
    }

    /// Builds the base URL from its parts.
    pub(crate) fn from_parts(
        host: &CtyunHost,
        port: Option<u16>,
        secure: bool,
    ) -> Result<Self, ValidationError> {
        let scheme = if secure { "https" } else { "http" };
        let host = if host.as_str().contains(':') {
            format!("[{}]", host.as_str())
        } else {
            host.as_str().to_string()
        };
        let raw = match port {
            Some(port) => format!("{}://{}:{}/", scheme, host, port),
            None => format!("{}://{}/", scheme, host),
        };
        parse_url(&raw).map(Self)
    }

    /// Returns the underlying URL.
    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Joins an API path (e.g. `/api/getVMList`) onto the base URL.
    ///
    /// Any path prefix already present in the base URL is kept.
    pub fn join_api_path(&self, path: &str) -> Result<Url, ValidationError> {
        let mut base = self.0.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path.trim_start_matches('/'))
            .map_err(|e| ValidationError::Format(format!("Invalid API path '{}': {}", path, e)))
    }
}

/// Parses and validates a base URL.
pub(crate) fn parse_url(raw: &str) -> Result<Url, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }
    let url =
        Url::parse(raw).map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme '{}'. Must be one of: http, https",
            other
        ))),
    }
}
