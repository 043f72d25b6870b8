//! The decoded body every provider operation returns.

use crate::core::domain::error::{CtyunError, CtyunResult};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

/// The `returnCode` the provider uses for business-level success.
pub const RETURN_CODE_OK: i64 = 200;

/// A response body, decoded as JSON when possible.
///
/// The provider sometimes answers with non-JSON error pages, so a body that
/// fails to parse is kept verbatim as [`ApiResponse::Text`] instead of being
/// treated as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(Value),
    Text(String),
}

impl ApiResponse {
    /// Decodes a body, falling back to the raw text.
    pub fn from_body(body: String) -> Self {
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => ApiResponse::Json(value),
            Err(_) => ApiResponse::Text(body),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Text(_) => None,
        }
    }

    /// The numeric `returnCode`, if the body carries one.
    ///
    /// A string-typed code is not coerced.
    pub fn return_code(&self) -> Option<i64> {
        let code = self.as_json()?.get("returnCode")?;
        code.as_i64().or_else(|| {
            code.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        })
    }

    /// `true` exactly when `returnCode == 200`.
    pub fn is_success(&self) -> bool {
        self.return_code() == Some(RETURN_CODE_OK)
    }

    /// The `message` field some error responses carry.
    pub fn message(&self) -> Option<&str> {
        self.as_json()?.get("message")?.as_str()
    }

    pub fn return_obj(&self) -> Option<&Value> {
        self.as_json()?.get("returnObj")
    }

    /// Decodes the array under `returnObj.<key>`.
    ///
    /// A `null` array is an empty page.
    pub(crate) fn list_payload<T: DeserializeOwned>(&self, key: &str) -> CtyunResult<Vec<T>> {
        let json = self.as_json().ok_or_else(|| {
            CtyunError::MalformedResponse(format!(
                "expected a JSON body carrying returnObj.{}, got non-JSON text",
                key
            ))
        })?;
        let return_obj = json.get("returnObj").ok_or_else(|| {
            CtyunError::MalformedResponse(format!(
                "missing returnObj (returnCode: {}, message: {})",
                self.return_code()
                    .map_or_else(|| "none".to_string(), |c| c.to_string()),
                self.message().unwrap_or("none")
            ))
        })?;
        match return_obj.get(key) {
            Some(Value::Null) => Ok(Vec::new()),
            Some(list) => Vec::<T>::deserialize(list).map_err(|e| {
                CtyunError::MalformedResponse(format!("invalid returnObj.{}: {}", key, e))
            }),
            None => Err(CtyunError::MalformedResponse(format!(
                "missing returnObj.{}",
                key
            ))),
        }
    }
}
