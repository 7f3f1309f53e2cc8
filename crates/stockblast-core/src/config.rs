//! Connection settings for the remote stock API.
//!
//! Every request carries a timeout of [`DEFAULT_TIMEOUT_MS`] unless another
//! budget is set. A stalled server therefore surfaces as a transport error
//! instead of leaving the view loading forever.

use crate::ValidationError;

pub const DEFAULT_BASE_URL: &str = "http://131.181.190.87:3001";
pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;
pub const DEFAULT_USER_AGENT: &str = "stockblast/0.1.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    timeout_ms: u64,
    user_agent: String,
}

impl ApiConfig {
    /// Validate `base_url` and strip any trailing `/` so endpoint paths can be appended.
    pub fn new(base_url: &str) -> Result<Self, ValidationError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyBaseUrl);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl {
                value: base_url.to_owned(),
            });
        }

        Ok(Self {
            base_url: trimmed.to_owned(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(DEFAULT_USER_AGENT),
        })
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ValidationError> {
        if timeout_ms == 0 {
            return Err(ValidationError::ZeroTimeout);
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}
