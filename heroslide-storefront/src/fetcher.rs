use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::sync::Mutex;

use crate::config;
use crate::types::{Slide, SlidesResponse};

/// How long a fetched slide list may be reused before a fresh fetch is issued.
pub const REVALIDATE_AFTER: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<Slide>,
    fetched_at: Instant,
}

impl CacheEntry {
    fn is_stale(&self, now: Instant, revalidate_after: Duration) -> bool {
        now.duration_since(self.fetched_at) > revalidate_after
    }
}

/// Retrieves the ordered, active-only slide list from the backend.
///
/// Never returns an error: transport failures and non-success statuses
/// degrade to the last cached list, or an empty list when none exists.
/// The cache lock is held across the request, so concurrent callers within
/// one render pass share a single network call.
pub struct SlideFetcher {
    client: Client,
    base_url: String,
    revalidate_after: Duration,
    cache: Mutex<Option<CacheEntry>>,
}

impl SlideFetcher {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            revalidate_after: REVALIDATE_AFTER,
            cache: Mutex::new(None),
        }
    }

    pub fn from_env() -> Self {
        Self::new(&config::backend_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(test)]
    fn with_revalidate_after(mut self, revalidate_after: Duration) -> Self {
        self.revalidate_after = revalidate_after;
        self
    }

    pub async fn fetch_active_slides(&self) -> Vec<Slide> {
        let mut cache = self.cache.lock().await;

        if let Some(entry) = cache.as_ref() {
            if !entry.is_stale(Instant::now(), self.revalidate_after) {
                return entry.value.clone();
            }
        }

        match self.request_slides().await {
            Ok(slides) => {
                let slides = normalize(slides);
                *cache = Some(CacheEntry {
                    value: slides.clone(),
                    fetched_at: Instant::now(),
                });
                slides
            }
            Err(e) => {
                tracing::warn!("Failed to fetch slides: {e}");
                // Degrade to the stale list when we have one
                cache.as_ref().map(|entry| entry.value.clone()).unwrap_or_default()
            }
        }
    }

    async fn request_slides(&self) -> Result<Vec<Slide>, String> {
        let resp = self
            .client
            .get(format!("{}/store/sliders", self.base_url))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !resp.status().is_success() {
            return Err(format!("Unexpected status: {}", resp.status()));
        }

        resp.json::<SlidesResponse>()
            .await
            .map(|body| body.slides)
            .map_err(|e| format!("Parse error: {}", e))
    }
}

/// Drops inactive slides and applies a stable ascending sort by position.
/// The server already filters and orders; this makes the output guarantee
/// hold regardless of what the wire delivered.
fn normalize(mut slides: Vec<Slide>) -> Vec<Slide> {
    slides.retain(|s| s.is_active);
    slides.sort_by_key(|s| s.position);
    slides
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};

    use super::*;

    fn slide(id: &str, position: i32, is_active: bool) -> Slide {
        Slide {
            id: id.to_string(),
            title: None,
            image_url: format!("https://cdn.example.com/{id}.jpg"),
            link: None,
            position,
            is_active,
        }
    }

    #[test]
    fn test_normalize_filters_inactive_and_sorts() {
        let out = normalize(vec![
            slide("c", 5, true),
            slide("x", 1, false),
            slide("a", 0, true),
        ]);
        let ids: Vec<&str> = out.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert!(out.iter().all(|s| s.is_active));
    }

    #[test]
    fn test_normalize_ties_keep_wire_order() {
        let out = normalize(vec![
            slide("first", 3, true),
            slide("second", 3, true),
            slide("third", 3, true),
        ]);
        let ids: Vec<&str> = out.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn test_cache_entry_staleness() {
        let entry = CacheEntry {
            value: vec![],
            fetched_at: Instant::now(),
        };
        let now = entry.fetched_at;
        assert!(!entry.is_stale(now + Duration::from_secs(59), REVALIDATE_AFTER));
        assert!(entry.is_stale(now + Duration::from_secs(61), REVALIDATE_AFTER));
    }

    #[tokio::test]
    async fn test_connection_failure_yields_empty_list() {
        // Nothing listens on port 9 locally
        let fetcher = SlideFetcher::new("http://127.0.0.1:9");
        assert!(fetcher.fetch_active_slides().await.is_empty());
    }

    #[derive(Clone)]
    struct StubState {
        hits: Arc<AtomicUsize>,
        fail_after_first: bool,
    }

    async fn stub_sliders(State(state): State<StubState>) -> Result<Json<serde_json::Value>, StatusCode> {
        let hit = state.hits.fetch_add(1, Ordering::SeqCst);
        if state.fail_after_first && hit > 0 {
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
        Ok(Json(serde_json::json!({
            "slides": [
                {"id": "a", "title": "First", "image_url": "https://cdn.example.com/a.jpg",
                 "link": null, "position": 0, "is_active": true},
                {"id": "b", "title": null, "image_url": "https://cdn.example.com/b.jpg",
                 "link": "https://example.com/b", "position": 1, "is_active": true}
            ]
        })))
    }

    async fn spawn_stub(state: StubState) -> SocketAddr {
        let app = Router::new()
            .route("/store/sliders", get(stub_sliders))
            .with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn test_fetch_is_memoized_within_revalidation_window() {
        let hits = Arc::new(AtomicUsize::new(0));
        let addr = spawn_stub(StubState {
            hits: hits.clone(),
            fail_after_first: false,
        })
        .await;

        let fetcher = SlideFetcher::new(&format!("http://{addr}"));
        let first = fetcher.fetch_active_slides().await;
        let second = fetcher.fetch_active_slides().await;

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stale_cache_triggers_refetch() {
        let hits = Arc::new(AtomicUsize::new(0));
        let addr = spawn_stub(StubState {
            hits: hits.clone(),
            fail_after_first: false,
        })
        .await;

        let fetcher = SlideFetcher::new(&format!("http://{addr}"))
            .with_revalidate_after(Duration::ZERO);
        fetcher.fetch_active_slides().await;
        fetcher.fetch_active_slides().await;

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_refetch_degrades_to_stale_list() {
        let hits = Arc::new(AtomicUsize::new(0));
        let addr = spawn_stub(StubState {
            hits: hits.clone(),
            fail_after_first: true,
        })
        .await;

        let fetcher = SlideFetcher::new(&format!("http://{addr}"))
            .with_revalidate_after(Duration::ZERO);
        let first = fetcher.fetch_active_slides().await;
        let second = fetcher.fetch_active_slides().await;

        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_http_error_without_cache_yields_empty_list() {
        let addr = spawn_stub(StubState {
            hits: Arc::new(AtomicUsize::new(1)),
            fail_after_first: true,
        })
        .await;

        let fetcher = SlideFetcher::new(&format!("http://{addr}"));
        assert!(fetcher.fetch_active_slides().await.is_empty());
    }
}
