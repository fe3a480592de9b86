use serde::{Deserialize, Serialize};
use url::Url;

/// Hosted backend connection configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the hosted backend project.
    /// TOML: `backend.url`. Default: `http://localhost:54321` (local stack).
    #[serde(default = "default_backend_url")]
    pub url: Url,

    /// Anonymous API key sent as `apikey` and bearer token on every read.
    /// TOML: `backend.anon_key`. Must be provided for real deployments.
    #[serde(default)]
    pub anon_key: String,

    /// Log level for tracing subscriber initialization (e.g., "error",
    /// "warn", "info", "debug", "trace").
    /// TOML: `backend.loglevel`. Default: `info`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            anon_key: String::new(),
            loglevel: default_loglevel(),
        }
    }
}

/// Default base URL, matching the local development stack.
fn default_backend_url() -> Url {
    Url::parse("http://localhost:54321").expect("static default URL is valid")
}

fn default_loglevel() -> String {
    "info".to_string()
}
