use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Row of the `blog_posts` table. Public pages only ever see rows with
/// `published = true`; drafts stay behind the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row of the `team_members` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    /// Free-form map of social profile links (platform -> URL).
    pub social_links: Option<Value>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row of the `homepage_features` table. `order_index` drives the
/// presentation order on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HomepageFeature {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub link: Option<String>,
    pub order_index: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row of the `site_settings` key/value table. `value` is arbitrary JSON;
/// well-known keys (for example the localized copy bundle) are decoded
/// further by their consumers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteSetting {
    pub id: String,
    pub key: String,
    pub value: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
