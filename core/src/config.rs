//! Client configuration.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_ACCEPT_LANGUAGE: &str = "es";

/// Settings shared by the todo and posts clients.
///
/// Deserializable so hosts can embed it in their own config files:
///
/// ```json
/// { "base_url": "https://jsonplaceholder.typicode.com", "timeout_secs": 10 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default = "default_accept_language")]
    pub accept_language: String,
    #[serde(default, rename = "timeout_secs", deserialize_with = "secs_to_duration")]
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            accept_language: default_accept_language(),
            timeout: None,
        }
    }

    pub fn with_accept_language(mut self, language: &str) -> Self {
        self.accept_language = language.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn default_accept_language() -> String {
    DEFAULT_ACCEPT_LANGUAGE.to_string()
}

fn secs_to_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
}
