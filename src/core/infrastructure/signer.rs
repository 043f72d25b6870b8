//! Request signing.
//!
//! Every request carries `vKey`, the lowercase hex MD5 of
//! `accessKey _ arg1 _ arg2 ... _ secretKey`. The argument order is a
//! per-endpoint contract: reordering the arguments changes the digest and the
//! provider rejects the request.

use crate::core::domain::model::credentials::Credentials;
use md5::{Digest, Md5};
use std::fmt::Display;

/// Separator placed before every argument and before the secret key.
pub const SIGNATURE_DELIMITER: char = '_';

/// Form field carrying the public key.
pub const ACCESS_KEY_FIELD: &str = "accessKey";

/// Form field carrying the signature.
pub const SIGNATURE_FIELD: &str = "vKey";

/// Computes the signature over `args` in the given order.
pub fn sign<I, S>(access_key: &str, secret_key: &str, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut message = String::from(access_key);
    for arg in args {
        message.push(SIGNATURE_DELIMITER);
        message.push_str(arg.as_ref());
    }
    message.push(SIGNATURE_DELIMITER);
    message.push_str(secret_key);

    hex::encode(Md5::digest(message.as_bytes()))
}

/// An ordered set of form fields whose values are signed in insertion order.
///
/// Values are stringified once, with `Display`, when they are added, so the
/// text that is signed is exactly the text that is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignedForm {
    fields: Vec<(&'static str, String)>,
}

impl SignedForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field. Its value becomes the next signature argument.
    #[must_use]
    pub fn field(mut self, name: &'static str, value: impl Display) -> Self {
        self.fields.push((name, value.to_string()));
        self
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// The signature for these fields under `credentials`.
    pub fn signature(&self, credentials: &Credentials) -> String {
        sign(
            credentials.access_key().as_str(),
            credentials.secret_key().as_str(),
            self.fields.iter().map(|(_, value)| value),
        )
    }

    /// The full wire form: `accessKey`, `vKey`, then the fields in order.
    pub fn into_params(self, credentials: &Credentials) -> Vec<(String, String)> {
        let signature = self.signature(credentials);
        let mut params = Vec::with_capacity(self.fields.len() + 2);
        params.push((
            ACCESS_KEY_FIELD.to_string(),
            credentials.access_key().as_str().to_string(),
        ));
        params.push((SIGNATURE_FIELD.to_string(), signature));
        params.extend(
            self.fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value)),
        );
        params
    }
}
