//! Typed read accessors for the content tables.
//!
//! Each accessor issues one read query with a fixed filter and ordering.
//! Callers may inject a pre-built [`BackendClient`]; passing `None` falls
//! back to the shared instance. No accessor retries or caches — staleness
//! and retry policy belong to the caller.

use crate::api::{BackendClient, Order};
use crate::error::QueryError;
use monynha_schema::{BlogPost, HomepageFeature, SiteSetting, TeamMember};
use tracing::warn;

fn client_or_shared(client: Option<&BackendClient>) -> &BackendClient {
    match client {
        Some(client) => client,
        None => BackendClient::shared(),
    }
}

/// Drops rows whose gating field came back false. The filter already runs
/// server-side; this keeps the "never leak unpublished/inactive rows"
/// contract even against a misconfigured backend view.
fn retain_gated<T>(rows: Vec<T>, table: &'static str, gate: impl Fn(&T) -> bool) -> Vec<T> {
    let before = rows.len();
    let kept: Vec<T> = rows.into_iter().filter(|row| gate(row)).collect();
    if kept.len() != before {
        warn!(
            table,
            dropped = before - kept.len(),
            "backend returned rows failing the gating predicate"
        );
    }
    kept
}

/// Published blog posts, most recently updated first.
pub async fn list_published_posts(
    client: Option<&BackendClient>,
) -> Result<Vec<BlogPost>, QueryError> {
    let rows: Vec<BlogPost> = client_or_shared(client)
        .table("blog_posts")
        .eq("published", "true")
        .order("updated_at", Order::Descending)
        .fetch()
        .await?;
    Ok(retain_gated(rows, "blog_posts", |post| post.published))
}

/// Looks up one published post by slug. `None` when the slug is unknown or
/// the post is a draft.
pub async fn get_post_by_slug(
    client: Option<&BackendClient>,
    slug: &str,
) -> Result<Option<BlogPost>, QueryError> {
    client_or_shared(client)
        .table("blog_posts")
        .eq("slug", slug)
        .eq("published", "true")
        .maybe_single()
        .await
}

/// Active team members in joining order.
pub async fn list_active_team_members(
    client: Option<&BackendClient>,
) -> Result<Vec<TeamMember>, QueryError> {
    let rows: Vec<TeamMember> = client_or_shared(client)
        .table("team_members")
        .eq("active", "true")
        .order("created_at", Order::Ascending)
        .fetch()
        .await?;
    Ok(retain_gated(rows, "team_members", |member| member.active))
}

/// Active homepage features in presentation order.
pub async fn list_active_homepage_features(
    client: Option<&BackendClient>,
) -> Result<Vec<HomepageFeature>, QueryError> {
    let rows: Vec<HomepageFeature> = client_or_shared(client)
        .table("homepage_features")
        .eq("active", "true")
        .order("order_index", Order::Ascending)
        .fetch()
        .await?;
    Ok(retain_gated(rows, "homepage_features", |feature| {
        feature.active
    }))
}

/// Single site setting by key; `None` when the key is not configured.
pub async fn get_site_setting(
    client: Option<&BackendClient>,
    key: &str,
) -> Result<Option<SiteSetting>, QueryError> {
    client_or_shared(client)
        .table("site_settings")
        .eq("key", key)
        .maybe_single()
        .await
}
