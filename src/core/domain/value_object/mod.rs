mod ctyun_access_key;
mod ctyun_host;
mod ctyun_secret_key;
mod ctyun_url;
pub(crate) mod serde_helpers;

pub use ctyun_access_key::CtyunAccessKey;
pub use ctyun_host::CtyunHost;
pub use ctyun_secret_key::CtyunSecretKey;
pub use ctyun_url::CtyunUrl;

// Re-export validation functions for internal use
pub(crate) use ctyun_access_key::validate_access_key;
pub(crate) use ctyun_host::validate_host;
pub(crate) use ctyun_secret_key::validate_secret_key;
pub(crate) use ctyun_url::parse_url;
