use crate::api::BackendClient;
use crate::config::{Config, CopyConfig};
use crate::error::{IsRetryable, QueryError};
use crate::i18n::Translations;
use backon::{ExponentialBuilder, Retryable};
use moka::future::Cache;
use monynha_schema::CopyBundle;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{error, info};

/// Fixed cache key: the bundle is fetched whole, so there is exactly one
/// cached entry.
const COPY_CACHE_KEY: &str = "localized-copy";

/// Bridges remote localized copy into the translation store.
///
/// Fetch results (including "no bundle configured") are held in a TTL cache
/// for the configured staleness window, so repeated syncs within the window
/// reuse the cached bundle without touching the backend. Each distinct fetch
/// result is merged into the store exactly once; re-applying a cached result
/// is skipped by pointer identity. Errors are never cached and propagate to
/// the caller, who owns the render/retry decision.
pub struct CopySync {
    client: BackendClient,
    cfg: CopyConfig,
    cache: Cache<&'static str, Arc<Option<CopyBundle>>>,
    retry_policy: ExponentialBuilder,
    last_applied: Mutex<Option<Arc<Option<CopyBundle>>>>,
}

impl CopySync {
    pub fn new(client: BackendClient, cfg: CopyConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(cfg.staleness_secs.max(1)))
            .build();
        let retry_policy = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(100))
            .with_max_delay(Duration::from_millis(300))
            .with_max_times(cfg.retry_max_times)
            .with_jitter();
        Self {
            client,
            cfg,
            cache,
            retry_policy,
            last_applied: Mutex::new(None),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(BackendClient::from_config(cfg), cfg.copy.clone())
    }

    /// Ensures the store reflects the freshest known copy bundle and returns
    /// that bundle. `None` inside the `Arc` means no bundle is configured.
    pub async fn sync(&self, store: &Translations) -> Result<Arc<Option<CopyBundle>>, QueryError> {
        let fetched = self.cached_fetch().await?;
        self.apply(&fetched, store);
        Ok(fetched)
    }

    async fn cached_fetch(&self) -> Result<Arc<Option<CopyBundle>>, QueryError> {
        if let Some(hit) = self.cache.get(&COPY_CACHE_KEY).await {
            return Ok(hit);
        }

        let op = || async {
            super::fetch_localized_copy_for_key(Some(&self.client), &self.cfg.settings_key).await
        };
        let bundle = op
            .retry(&self.retry_policy)
            .when(|err: &QueryError| err.is_retryable())
            .notify(|err, dur: Duration| {
                error!(
                    error = %err,
                    "copy fetch failed, retrying after {dur:?}"
                );
            })
            .await?;

        let fetched = Arc::new(bundle);
        self.cache.insert(COPY_CACHE_KEY, fetched.clone()).await;
        Ok(fetched)
    }

    /// Merges a fetch result into the store once. Subsequent calls with the
    /// same `Arc` are no-ops, so the side effect fires per distinct result
    /// rather than per sync call.
    fn apply(&self, fetched: &Arc<Option<CopyBundle>>, store: &Translations) {
        let mut last = self.last_applied.lock().expect("copy sync lock poisoned");
        if last.as_ref().is_some_and(|prev| Arc::ptr_eq(prev, fetched)) {
            return;
        }

        if let Some(bundle) = fetched.as_ref() {
            let mut merged_locales = 0usize;
            for (locale, map) in bundle.present_locales() {
                store.add_resource_bundle(locale, &self.cfg.namespace, map, true, true);
                merged_locales += 1;
            }
            info!(
                locales = merged_locales,
                namespace = %self.cfg.namespace,
                "merged remote copy bundle into translation store"
            );
        }

        *last = Some(fetched.clone());
    }
}
