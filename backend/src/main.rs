use std::path::Path;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::header::{self, HeaderName};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::{SetResponseHeader, SetResponseHeaderLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;

mod config;
mod error;
mod handlers;
mod logging;
mod models;
mod services;

#[derive(Clone)]
pub struct AppState {
    pool: PgPool,
    config: Arc<Config>,
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid allowed origin {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec![HeaderName::from_static("content-type")])
}

fn static_service(static_path: &Path) -> SetResponseHeader<ServeDir, HeaderValue> {
    SetResponseHeaderLayer::if_not_present(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"))
        .layer(ServeDir::new(static_path))
}

/// Trunk's hashed bundle lives at the dist root; any other path gets the
/// index page so the frontend router can take over.
fn frontend_service(dist: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")))
}

pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    let api_routes = Router::new()
        .route("/api/health_check", get(handlers::health_check))
        .route(
            "/api/collections/:collection/documents",
            post(handlers::create_document),
        )
        .layer(DefaultBodyLimit::max(config.max_document_bytes))
        .with_state(state);

    Router::new()
        .merge(api_routes)
        .nest_service("/static", static_service(&config.frontend_dist.join("static")))
        .fallback_service(frontend_service(&config.frontend_dist))
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::setup()?;
    dotenvy::from_path(".env").ok();

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    info!("Accepting documents for: {}", config.collections.join(", "));

    let bind_addr = config.bind_addr;
    let state = AppState {
        pool,
        config: Arc::new(config),
    };
    let app = create_router(state);

    let listener = TcpListener::bind(bind_addr).await?;
    info!("Server listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = Config::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://localhost/simplykhushi_test".to_string()),
            "MAX_DOCUMENT_BYTES" => Some("1024".to_string()),
            _ => None,
        })
        .unwrap();
        // Never connects unless a handler reaches the database.
        let pool = PgPoolOptions::new().connect_lazy(&config.database_url).unwrap();
        create_router(AppState {
            pool,
            config: Arc::new(config),
        })
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn error_message(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        body["error"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = test_app()
            .oneshot(Request::builder().uri("/api/health_check").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn test_unknown_collection_is_not_found() {
        let response = test_app()
            .oneshot(post_json("/api/collections/users/documents", "{}".to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_message(response).await, "Unknown collection: users");
    }

    #[tokio::test]
    async fn test_non_object_body_rejected() {
        let response = test_app()
            .oneshot(post_json("/api/collections/spin_entries/documents", "[1, 2]".to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_incomplete_spin_entry_rejected() {
        let body = json!({
            "prize": "Flat 10% off",
            "name": "Asha Rao",
            "email": "asha@example.com",
            "phone": "",
            "timestamp": "2024-11-02T10:30:00.000Z",
            "hasCompleted": true
        });
        let response = test_app()
            .oneshot(post_json("/api/collections/spin_entries/documents", body.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(response).await, "Missing required fields: phone");
    }

    #[tokio::test]
    async fn test_missing_content_type_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/collections/spin_entries/documents")
            .body(Body::from("{}"))
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_oversized_document_rejected() {
        let body = json!({ "note": "x".repeat(4096) });
        let response = test_app()
            .oneshot(post_json("/api/collections/spin_entries/documents", body.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
