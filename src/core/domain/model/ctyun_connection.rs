use crate::core::domain::{model::credentials::Credentials, value_object::CtyunUrl};

/// Everything needed to reach and authenticate against a CTyun endpoint.
#[derive(Debug, Clone)]
pub struct CtyunConnection {
    credentials: Credentials,
    url: CtyunUrl,
    accept_invalid_certs: bool,
}

impl CtyunConnection {
    pub fn new(credentials: Credentials, url: CtyunUrl, accept_invalid_certs: bool) -> Self {
        Self {
            credentials,
            url,
            accept_invalid_certs,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn url(&self) -> &CtyunUrl {
        &self.url
    }

    /// The provider is reached by IP literal, so certificate validation is usually off.
    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }
}
