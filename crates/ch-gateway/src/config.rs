//! Connection settings for [`HttpGateway`][crate::HttpGateway].

use serde::{Deserialize, Serialize};

/// Environment variable holding the service credential.
pub const ENV_API_KEY: &str = "API_KEY";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub base_url:   String,
    /// Sent as `x-api-key`.  Never serialized back out.
    #[serde(skip_serializing)]
    pub api_key:    String,
    pub timeout_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url:   DEFAULT_BASE_URL.to_owned(),
            api_key:    String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), api_key: api_key.into(), ..Self::default() }
    }

    /// Replace the credential with `API_KEY` from the environment, if set
    /// and non-blank.
    pub fn with_env_key(self) -> Self {
        self.with_key_from(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_key_from<F>(mut self, getter: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        if let Some(key) = getter(ENV_API_KEY).filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
        self
    }
}
