use crate::config::{CONFIG, Config};
use crate::error::{BackendErrorBody, QueryError};
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use tracing::{debug, warn};
use url::Url;

/// Handle for issuing read queries against the hosted backend's REST
/// interface (`/rest/v1/{table}` with `select`/`eq`/`order` query params).
///
/// Cheap to clone; the underlying HTTP client is shared. All queries are
/// read-only — this layer never mutates a row.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base: Url,
    anon_key: String,
}

impl BackendClient {
    pub fn new(http: reqwest::Client, base: Url, anon_key: impl Into<String>) -> Self {
        Self {
            http,
            base,
            anon_key: anon_key.into(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            reqwest::Client::new(),
            cfg.backend.url.clone(),
            cfg.backend.anon_key.clone(),
        )
    }

    /// Process-wide instance built lazily from the global configuration.
    /// Accessors fall back to this when no client is injected.
    pub fn shared() -> &'static BackendClient {
        static SHARED: LazyLock<BackendClient> =
            LazyLock::new(|| BackendClient::from_config(&CONFIG));
        &SHARED
    }

    /// Starts a read query against `table`.
    pub fn table(&self, table: &'static str) -> TableQuery<'_> {
        TableQuery {
            client: self,
            table,
            select: "*",
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    fn rest_url(&self, table: &str) -> Result<Url, QueryError> {
        Ok(self.base.join(&format!("rest/v1/{table}"))?)
    }
}

/// Sort direction for the `order` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    fn suffix(self) -> &'static str {
        match self {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        }
    }
}

/// Builder for a single read query. Terminal methods are [`TableQuery::fetch`]
/// (ordered collection) and [`TableQuery::maybe_single`] (at most one row).
#[derive(Debug)]
pub struct TableQuery<'a> {
    client: &'a BackendClient,
    table: &'static str,
    select: &'static str,
    filters: Vec<(&'static str, String)>,
    order: Option<(&'static str, Order)>,
    limit: Option<u32>,
}

impl TableQuery<'_> {
    /// Restricts the selected columns (default `*`).
    #[must_use]
    pub fn select(mut self, columns: &'static str) -> Self {
        self.select = columns;
        self
    }

    /// Adds a `column = value` equality filter.
    #[must_use]
    pub fn eq(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.filters.push((column, value.into()));
        self
    }

    #[must_use]
    pub fn order(mut self, column: &'static str, direction: Order) -> Self {
        self.order = Some((column, direction));
        self
    }

    fn build_url(&self) -> Result<Url, QueryError> {
        let mut url = self.client.rest_url(self.table)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", self.select);
            for (column, value) in &self.filters {
                pairs.append_pair(column, &format!("eq.{value}"));
            }
            if let Some((column, direction)) = self.order {
                pairs.append_pair("order", &format!("{column}.{}", direction.suffix()));
            }
            if let Some(limit) = self.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
        }
        Ok(url)
    }

    /// Executes the query and decodes the ordered row set.
    ///
    /// An empty match is `Ok(vec![])`; only a backend-reported error, a
    /// transport fault, or a payload/schema mismatch fails.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, QueryError> {
        let url = self.build_url()?;
        debug!(
            table = self.table,
            filters = self.filters.len(),
            "issuing read query"
        );

        let resp = self
            .client
            .http
            .get(url)
            .header("apikey", self.client.anon_key.as_str())
            .bearer_auth(&self.client.anon_key)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let bytes = resp.bytes().await?;

            return Err(match serde_json::from_slice::<BackendErrorBody>(&bytes) {
                Ok(body) => {
                    warn!(
                        table = self.table,
                        status = %status,
                        message = %body.message,
                        "backend rejected read query"
                    );
                    QueryError::backend(body)
                }
                Err(_) => {
                    let raw = String::from_utf8_lossy(&bytes);
                    warn!(
                        table = self.table,
                        status = %status,
                        "backend returned non-structured error: {:.200}",
                        raw
                    );
                    QueryError::backend_raw(format!("{status}: {raw}"))
                }
            });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Executes the query constrained to at most one row.
    ///
    /// Requests two rows so an over-matched filter surfaces as
    /// [`QueryError::MultipleRows`] instead of being silently truncated.
    pub async fn maybe_single<T: DeserializeOwned>(mut self) -> Result<Option<T>, QueryError> {
        self.limit = Some(2);
        let table = self.table;
        let mut rows: Vec<T> = self.fetch().await?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            _ => Err(QueryError::MultipleRows { table }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> BackendClient {
        BackendClient::new(
            reqwest::Client::new(),
            Url::parse("http://backend.test").unwrap(),
            "anon-key",
        )
    }

    #[test]
    fn build_url_applies_select_filter_and_order() {
        let client = test_client();
        let url = client
            .table("blog_posts")
            .eq("published", "true")
            .order("updated_at", Order::Descending)
            .build_url()
            .unwrap();

        assert_eq!(url.path(), "/rest/v1/blog_posts");
        let query = url.query().unwrap();
        assert!(query.contains("select=*"));
        assert!(query.contains("published=eq.true"));
        assert!(query.contains("order=updated_at.desc"));
    }

    #[test]
    fn build_url_supports_explicit_columns_and_multiple_filters() {
        let client = test_client();
        let url = client
            .table("blog_posts")
            .select("slug,title")
            .eq("slug", "hello-world")
            .eq("published", "true")
            .build_url()
            .unwrap();

        let q = url.query().unwrap();
        assert!(q.contains("select=slug%2Ctitle") || q.contains("select=slug,title"));
        assert!(q.contains("slug=eq.hello-world"));
        assert!(q.contains("published=eq.true"));
    }
}
