use mimalloc::MiMalloc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Smoke tool: fetches each content collection and the localized copy
/// bundle against the configured backend and logs what it finds.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &monynha::config::CONFIG;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.backend.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        backend_url = %cfg.backend.url,
        copy_namespace = %cfg.copy.namespace,
        copy_settings_key = %cfg.copy.settings_key,
        staleness_secs = cfg.copy.staleness_secs,
        loglevel = %cfg.backend.loglevel,
    );

    let client = monynha::BackendClient::shared();

    let posts = monynha::content::list_published_posts(Some(client)).await?;
    info!(count = posts.len(), "published blog posts");
    for post in &posts {
        info!(slug = %post.slug, updated_at = %post.updated_at, "  {}", post.title);
    }

    let team = monynha::content::list_active_team_members(Some(client)).await?;
    info!(count = team.len(), "active team members");
    for member in &team {
        info!(role = %member.role, "  {}", member.name);
    }

    let features = monynha::content::list_active_homepage_features(Some(client)).await?;
    info!(count = features.len(), "active homepage features");
    for feature in &features {
        info!(order_index = feature.order_index, "  {}", feature.title);
    }

    let store = monynha::Translations::global();
    let copy_sync = monynha::CopySync::from_config(cfg);
    match copy_sync.sync(store).await {
        Ok(bundle) => match bundle.as_ref() {
            Some(bundle) => info!(
                locales = bundle.present_locales().count(),
                "remote copy bundle merged"
            ),
            None => info!("no remote copy bundle configured"),
        },
        Err(err) => warn!(error = %err, "failed to fetch remote copy bundle"),
    }

    Ok(())
}
