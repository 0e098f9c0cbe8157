//! Application setup and router construction.

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::{generate_seo_handler, health_handler};
use crate::state::AppState;

/// Build the Axum application router.
///
/// The editor widget calls from the CMS origin, so CORS allows any
/// origin; authentication is the host's concern and sits in front of
/// this service.
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/api/seo/generate", post(generate_seo_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    use seo_pipeline::{Fragment, MemoryStore, MockBackend, SeoPipeline};

    fn test_app(backend: MockBackend, root: Fragment) -> Router {
        build_app(AppState {
            store: Arc::new(MemoryStore::new().with_root(root)),
            pipeline: SeoPipeline::new(Arc::new(backend)),
        })
    }

    fn page() -> Fragment {
        Fragment::new("page")
            .with_property("title", "Home")
            .with_child(Fragment::new("text").with_property("text", "Welcome to the bakery"))
    }

    async fn post_generate(app: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/seo/generate")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_generate_returns_seo_fields() {
        let root = page();
        let id = root.id;
        let backend = MockBackend::new().with_payload(
            r#"{"summary":"A bakery","metaKeywords":"bakery, bread","metaDescription":"Fresh bread daily"}"#,
        );

        let (status, body) =
            post_generate(test_app(backend, root), serde_json::json!({ "fragment": id })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], "A bakery");
        assert_eq!(body["metaKeywords"], "bakery, bread");
        assert_eq!(body["metaDescription"], "Fresh bread daily");
    }

    #[tokio::test]
    async fn test_generate_accepts_property_name() {
        let root = page();
        let id = root.id;
        let backend = MockBackend::new();

        let (status, _) = post_generate(
            test_app(backend, root),
            serde_json::json!({ "fragment": id, "propertyName": "metaDescription" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_fragment_is_404() {
        let (status, body) = post_generate(
            test_app(MockBackend::new(), page()),
            serde_json::json!({ "fragment": Uuid::new_v4() }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn test_backend_failure_is_502() {
        let root = page();
        let id = root.id;
        let backend = MockBackend::new().with_failure("connection refused");

        let (status, body) =
            post_generate(test_app(backend, root), serde_json::json!({ "fragment": id })).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].as_str().unwrap().contains("backend"));
    }

    #[tokio::test]
    async fn test_unparseable_payload_is_200_with_empty_fields() {
        let root = page();
        let id = root.id;
        let backend = MockBackend::new().with_payload("not json at all");

        let (status, body) =
            post_generate(test_app(backend, root), serde_json::json!({ "fragment": id })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], "");
        assert_eq!(body["metaKeywords"], "");
        assert_eq!(body["metaDescription"], "");
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app(MockBackend::new(), page());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
