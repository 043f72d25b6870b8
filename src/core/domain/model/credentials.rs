use crate::core::domain::value_object::{CtyunAccessKey, CtyunSecretKey};

/// The access/secret key pair a client signs with. Immutable once built.
#[derive(Debug, Clone)]
pub struct Credentials {
    access_key: CtyunAccessKey,
    secret_key: CtyunSecretKey,
}

impl Credentials {
    pub fn new(access_key: CtyunAccessKey, secret_key: CtyunSecretKey) -> Self {
        Self {
            access_key,
            secret_key,
        }
    }

    pub fn access_key(&self) -> &CtyunAccessKey {
        &self.access_key
    }

    pub fn secret_key(&self) -> &CtyunSecretKey {
        &self.secret_key
    }
}
