//! Remote localized copy: fetching the per-locale bundle from the backend
//! and keeping the translation store in sync with it.

mod sync;

pub use sync::CopySync;

use crate::api::BackendClient;
use crate::config::CONFIG;
use crate::content::get_site_setting;
use crate::error::QueryError;
use monynha_schema::CopyBundle;

/// Fetches the full localized copy bundle from the configured
/// `site_settings` key. `Ok(None)` when no bundle is configured (missing
/// row or null value); backend errors propagate unchanged.
pub async fn fetch_localized_copy(
    client: Option<&BackendClient>,
) -> Result<Option<CopyBundle>, QueryError> {
    fetch_localized_copy_for_key(client, &CONFIG.copy.settings_key).await
}

pub(crate) async fn fetch_localized_copy_for_key(
    client: Option<&BackendClient>,
    settings_key: &str,
) -> Result<Option<CopyBundle>, QueryError> {
    let Some(setting) = get_site_setting(client, settings_key).await? else {
        return Ok(None);
    };
    if setting.value.is_null() {
        return Ok(None);
    }
    let bundle: CopyBundle = serde_json::from_value(setting.value)?;
    Ok(Some(bundle))
}
