use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use monynha::config::CopyConfig;
use monynha::{BackendClient, CopySync, QueryError, Translations};
use serde_json::{Value, json};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tokio::net::TcpListener;
use url::Url;

#[derive(Clone)]
struct CopyBackend {
    hits: Arc<AtomicUsize>,
    response: Arc<Value>,
    status: StatusCode,
}

impl CopyBackend {
    fn serving(bundle: Value) -> Self {
        Self {
            hits: Arc::default(),
            response: Arc::new(json!([{
                "id": "setting-copy",
                "key": "localized_copy",
                "value": bundle,
                "created_at": "2026-01-01T00:00:00Z",
                "updated_at": "2026-01-02T00:00:00Z",
            }])),
            status: StatusCode::OK,
        }
    }

    fn empty() -> Self {
        Self {
            hits: Arc::default(),
            response: Arc::new(json!([])),
            status: StatusCode::OK,
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            hits: Arc::default(),
            response: Arc::new(json!({
                "message": message,
                "code": "500",
                "details": null,
                "hint": null,
            })),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn settings_handler(State(state): State<CopyBackend>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    (state.status, Json(state.response.as_ref().clone()))
}

async fn spawn_backend(state: CopyBackend) -> Url {
    let app = Router::new()
        .route("/rest/v1/site_settings", get(settings_handler))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server run");
    });

    Url::parse(&format!("http://{addr}")).expect("valid base url")
}

fn sync_for(base: Url) -> CopySync {
    let client = BackendClient::new(reqwest::Client::new(), base, "test-anon-key");
    CopySync::new(client, CopyConfig::default())
}

#[tokio::test]
async fn bundle_is_fetched_once_within_the_staleness_window() {
    let backend = CopyBackend::serving(json!({
        "en-US": {"hero": {"title": "Software with pride"}},
        "pt-BR": {"hero": {"title": "Software com orgulho"}},
    }));
    let base = spawn_backend(backend.clone()).await;

    let sync = sync_for(base);
    let store = Translations::new();

    let first = sync.sync(&store).await.expect("first sync");
    let second = sync.sync(&store).await.expect("second sync");

    assert_eq!(backend.hit_count(), 1, "second sync must reuse the cache");
    assert!(Arc::ptr_eq(&first, &second));

    assert_eq!(
        store.get("en-US", "dynamic", "hero.title").as_deref(),
        Some("Software with pride")
    );
    assert_eq!(
        store.get("pt-BR", "dynamic", "hero.title").as_deref(),
        Some("Software com orgulho")
    );
}

#[tokio::test]
async fn merge_is_idempotent_across_repeated_syncs() {
    let backend = CopyBackend::serving(json!({"en-US": {"a": "1"}}));
    let base = spawn_backend(backend).await;

    let sync = sync_for(base);
    let store = Translations::new();

    sync.sync(&store).await.expect("first sync");
    sync.sync(&store).await.expect("second sync");

    assert_eq!(
        store.bundle("en-US", "dynamic"),
        Some(json!({"a": "1"}).as_object().unwrap().clone())
    );
}

#[tokio::test]
async fn absent_bundle_is_cached_and_leaves_the_store_untouched() {
    let backend = CopyBackend::empty();
    let base = spawn_backend(backend.clone()).await;

    let sync = sync_for(base);
    let store = Translations::new();

    let first = sync.sync(&store).await.expect("first sync");
    assert!(first.is_none());
    assert!(!store.has_bundle("en-US", "dynamic"));

    let second = sync.sync(&store).await.expect("second sync");
    assert!(second.is_none());
    assert_eq!(backend.hit_count(), 1, "absence is cached like any result");
}

#[tokio::test]
async fn backend_failures_propagate_and_are_not_cached() {
    let backend = CopyBackend::failing("copy lookup blew up");
    let base = spawn_backend(backend.clone()).await;

    let sync = sync_for(base);
    let store = Translations::new();

    let err = sync.sync(&store).await.expect_err("sync should fail");
    match err {
        QueryError::Backend { body } => assert_eq!(body.message, "copy lookup blew up"),
        other => panic!("expected backend error, got {other:?}"),
    }

    let _ = sync.sync(&store).await.expect_err("still failing");
    assert_eq!(
        backend.hit_count(),
        2,
        "errors must not enter the staleness cache"
    );
}
