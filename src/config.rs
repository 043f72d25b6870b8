//! Client-level configuration shared by every request.

use crate::core::domain::error::{CtyunResult, ValidationError};
use std::time::Duration;

/// Token-bucket limits applied before each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub(crate) fn validate(&self) -> CtyunResult<()> {
        if self.requests_per_second == 0 {
            return Err(ValidationError::Field {
                field: "requests_per_second".to_string(),
                message: "Rate limit must allow at least one request per second".to_string(),
            }
            .into());
        }
        if self.burst_size == 0 {
            return Err(ValidationError::Field {
                field: "burst_size".to_string(),
                message: "Burst size must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Transport behaviour of a [`CtyunClient`](crate::CtyunClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Per-call deadline covering connect, send and body read. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Client-side rate limiting. Disabled when `None`.
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            rate_limit: None,
        }
    }
}

impl ClientConfig {
    pub(crate) fn validate(&self) -> CtyunResult<()> {
        if self.timeout == Some(Duration::ZERO) {
            return Err(ValidationError::Field {
                field: "timeout".to_string(),
                message: "Timeout must be greater than zero".to_string(),
            }
            .into());
        }
        if let Some(rate_limit) = &self.rate_limit {
            rate_limit.validate()?;
        }
        Ok(())
    }
}
