//! Google adapter configuration

use serde::{Deserialize, Serialize};

use crate::core::catalog::Provider;
use crate::core::types::AdapterError;

/// Google adapter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    /// API key for authentication (sent as a query parameter)
    pub api_key: Option<String>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout: u64,

    /// Log request/response bodies at debug level
    #[serde(default)]
    pub debug: bool,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var(Provider::Google.api_key_env()).ok(),
            base_url: default_base_url(),
            request_timeout: default_timeout(),
            debug: false,
        }
    }
}

impl GoogleConfig {
    /// Read configuration from the environment
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Fail if no API key is configured, naming the missing variable
    pub fn validate(&self) -> Result<(), AdapterError> {
        if self.api_key.is_none() {
            return Err(AdapterError::configuration(Provider::Google));
        }
        Ok(())
    }

    /// Endpoint for a generateContent call against a model
    pub fn generate_endpoint(&self, model_id: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model_id)
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout() -> u64 {
    120
}
