use serde::{Deserialize, Serialize};

/// Dynamic localized copy configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CopyConfig {
    /// How long a fetched copy bundle is served from cache before the
    /// backend is asked again.
    /// TOML: `copy.staleness_secs`. Default: `300` (5 minutes).
    #[serde(default = "default_staleness_secs")]
    pub staleness_secs: u64,

    /// Translation namespace remote copy is merged under.
    /// TOML: `copy.namespace`. Default: `dynamic`.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// `site_settings.key` of the row holding the copy bundle.
    /// TOML: `copy.settings_key`. Default: `localized_copy`.
    #[serde(default = "default_settings_key")]
    pub settings_key: String,

    /// Retry budget for transport failures while fetching the bundle.
    /// TOML: `copy.retry_max_times`. Default: `1`.
    #[serde(default = "default_retry_max_times")]
    pub retry_max_times: usize,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            staleness_secs: default_staleness_secs(),
            namespace: default_namespace(),
            settings_key: default_settings_key(),
            retry_max_times: default_retry_max_times(),
        }
    }
}

fn default_staleness_secs() -> u64 {
    300
}

fn default_namespace() -> String {
    "dynamic".to_string()
}

fn default_settings_key() -> String {
    "localized_copy".to_string()
}

fn default_retry_max_times() -> usize {
    1
}
