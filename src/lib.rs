mod api;
mod config;
mod core;
pub mod driver;

pub use crate::config::{ClientConfig, RateLimitConfig};
pub use crate::core::domain::error::{CtyunError, CtyunResult, ValidationError};
pub use crate::core::domain::mapper::{to_node, to_nodes, to_volume, to_volumes};
pub use crate::core::domain::model::{
    api_response::{ApiResponse, RETURN_CODE_OK},
    credentials::Credentials,
    ctyun_connection::CtyunConnection,
    disk::DiskRecord,
    node::{Node, NodeExtra, NodeImage, NodeLocation, NodeSize, Page},
    order::{NewOrderSpec, TrialOrderSpec},
    state::{NODE_STATE, VOLUME_STATE, node_state, volume_state},
    vm::VmRecord,
    volume::{StorageVolume, VolumeExtra},
};
pub use crate::core::domain::value_object::{CtyunAccessKey, CtyunHost, CtyunSecretKey, CtyunUrl};
pub use crate::core::infrastructure::{
    api_client::{ApiClient, Transport},
    signer::{SignedForm, sign},
};
pub use crate::driver::{CtyunNodeDriver, DriverConfig, DriverFactory, NodeDriver, Provider};

use crate::core::domain::value_object::{
    parse_url, validate_access_key, validate_host, validate_secret_key,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// The provider's public API host. It is an IP literal, so certificates cannot be validated.
pub const DEFAULT_HOST: &str = "42.123.120.96";

/// Zone used by the provider's own tooling when none is given.
pub const DEFAULT_ZONE_ID: &str = "1";

/// A client for the CTyun IaaS API
///
/// This client provides one async method per provider endpoint:
/// - VM lifecycle (list, detail, start, stop, restart, reinstall, passwords)
/// - Data disks (list, rename, bind, unbind, status)
/// - Snapshots (list, create, status, remove, rollback)
/// - Catalogs and commerce (zones, VM types, OS images, pricing, orders)
///
/// Every method signs its parameters, posts them, and returns the decoded
/// [`ApiResponse`] untouched. Business success (`returnCode == 200`) is left
/// to the caller; see [`ApiResponse::is_success`].
///
/// # Examples
///
/// ```no_run
/// use ctyun_driver::{CtyunClient, CtyunResult, Page};
///
/// #[tokio::main]
/// async fn main() -> CtyunResult<()> {
///     let client = CtyunClient::builder()
///         .credentials("my-access-key", "my-secret-key")?
///         .build()?;
///
///     let vms = client.get_vm_list(Page::new(1, 20)).await?;
///     println!("{:?}", vms.return_code());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CtyunClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) credentials: Credentials,
}

impl std::fmt::Debug for CtyunClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CtyunClient")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

/// Builder for CtyunClient configuration
#[derive(Debug, Clone)]
pub struct CtyunClientBuilder {
    host: String,
    port: Option<u16>,
    base_url: Option<String>,
    access_key: Option<String>,
    secret_key: Option<String>,
    secure: bool,
    accept_invalid_certs: bool,
    config: ClientConfig,
}

impl Default for CtyunClientBuilder {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: None,
            base_url: None,
            access_key: None,
            secret_key: None,
            secure: true,
            accept_invalid_certs: true,
            config: ClientConfig::default(),
        }
    }
}

impl CtyunClientBuilder {
    /// Overrides the API host (IP literal or hostname).
    pub fn host(mut self, host: impl Into<String>) -> CtyunResult<Self> {
        let host = host.into();
        validate_host(&host)?;
        self.host = host;
        Ok(self)
    }

    pub fn port(mut self, port: u16) -> CtyunResult<Self> {
        if port == 0 {
            return Err(ValidationError::Field {
                field: "port".to_string(),
                message: "Port cannot be 0".to_string(),
            }
            .into());
        }
        self.port = Some(port);
        Ok(self)
    }

    /// Uses a complete base URL instead of host, port and scheme.
    pub fn base_url(mut self, url: impl Into<String>) -> CtyunResult<Self> {
        let url = url.into();
        parse_url(&url)?;
        self.base_url = Some(url);
        Ok(self)
    }

    pub fn credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> CtyunResult<Self> {
        let access_key = access_key.into();
        let secret_key = secret_key.into();
        validate_access_key(&access_key)?;
        validate_secret_key(&secret_key)?;
        self.access_key = Some(access_key);
        self.secret_key = Some(secret_key);
        Ok(self)
    }

    /// Selects HTTPS (default) or plain HTTP.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Accepts certificates that fail validation. On by default because the
    /// provider endpoint is an IP literal; turn it off when pointing the
    /// client at an endpoint with a trusted certificate.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Per-call deadline. `None` disables it.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn rate_limit(mut self, rate_limit: Option<RateLimitConfig>) -> Self {
        self.config.rate_limit = rate_limit;
        self
    }

    /// Reads settings from the environment.
    ///
    /// `CTYUN_ACCESS_KEY` and `CTYUN_SECRET_KEY` are required; `CTYUN_HOST`,
    /// `CTYUN_PORT` and `CTYUN_BASE_URL` are optional.
    pub fn from_env() -> CtyunResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub(crate) fn from_lookup<F>(lookup: F) -> CtyunResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ValidationError::Field {
                field: name.to_string(),
                message: "Environment variable is not set".to_string(),
            })
        };

        let mut builder = Self::default()
            .credentials(required("CTYUN_ACCESS_KEY")?, required("CTYUN_SECRET_KEY")?)?;
        if let Some(host) = lookup("CTYUN_HOST") {
            builder = builder.host(host)?;
        }
        if let Some(port) = lookup("CTYUN_PORT") {
            let port = port.parse::<u16>().map_err(|e| {
                ValidationError::Format(format!("CTYUN_PORT is not a valid port: {}", e))
            })?;
            builder = builder.port(port)?;
        }
        if let Some(url) = lookup("CTYUN_BASE_URL") {
            builder = builder.base_url(url)?;
        }
        Ok(builder)
    }

    pub fn build(self) -> CtyunResult<CtyunClient> {
        let access_key = self.access_key.ok_or_else(|| ValidationError::Field {
            field: "access_key".to_string(),
            message: "Access key is required".to_string(),
        })?;
        let secret_key = self.secret_key.ok_or_else(|| ValidationError::Field {
            field: "secret_key".to_string(),
            message: "Secret key is required".to_string(),
        })?;
        let credentials = Credentials::new(
            CtyunAccessKey::new_unchecked(access_key),
            CtyunSecretKey::new_unchecked(secret_key),
        );

        let url = match self.base_url {
            Some(raw) => CtyunUrl::new_unchecked(parse_url(&raw)?),
            None => CtyunUrl::from_parts(
                &CtyunHost::new_unchecked(self.host),
                self.port,
                self.secure,
            )?,
        };
        debug!(url = %url.as_url(), "building CTyun client");

        let connection = CtyunConnection::new(credentials, url, self.accept_invalid_certs);
        let api_client = ApiClient::new(&connection, &self.config)?;

        Ok(CtyunClient::from_transport(
            connection.credentials().clone(),
            Arc::new(api_client),
        ))
    }
}

impl CtyunClient {
    /// Creates a new builder for CtyunClient configuration
    pub fn builder() -> CtyunClientBuilder {
        CtyunClientBuilder::default()
    }

    /// Wraps a custom [`Transport`], e.g. one with its own pooling or retry policy.
    pub fn from_transport(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// The access key requests are signed with.
    pub fn access_key(&self) -> &CtyunAccessKey {
        self.credentials.access_key()
    }

    /// Signs `form` and posts it to `path`.
    pub(crate) async fn call(&self, path: &str, form: SignedForm) -> CtyunResult<ApiResponse> {
        let params = form.into_params(&self.credentials);
        self.transport.post_form(path, params).await
    }
}
