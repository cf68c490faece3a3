use axum::http::{header, Method};
use axum::middleware;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::state::AppState;
use crate::system::auth::require_bearer;
use crate::system::middleware::request_logger;

/// Collection endpoints, all behind the bearer check
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/rooms",
            get(handlers::a001_room::list_all).post(handlers::a001_room::create),
        )
        .route(
            "/api/rooms/:id",
            axum::routing::put(handlers::a001_room::update).delete(handlers::a001_room::delete),
        )
        .route(
            "/api/bookings",
            get(handlers::a002_booking::list_all).post(handlers::a002_booking::create),
        )
        .route(
            "/api/bookings/:id",
            axum::routing::put(handlers::a002_booking::update)
                .delete(handlers::a002_booking::delete),
        )
        .route(
            "/api/facilities",
            get(handlers::a003_facility::list_all).post(handlers::a003_facility::create),
        )
        .route(
            "/api/facilities/:id",
            axum::routing::put(handlers::a003_facility::update)
                .delete(handlers::a003_facility::delete),
        )
        .route(
            "/api/users",
            get(handlers::a004_user::list_all).post(handlers::a004_user::create),
        )
        .route(
            "/api/users/:id",
            axum::routing::put(handlers::a004_user::update).delete(handlers::a004_user::delete),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer))
        .with_state(state)
}

/// Full application router: health check, API and the fixture files
pub fn build(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(api_routes(state))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{self, Body};
    use axum::http::{Request, StatusCode};
    use contracts::shared::envelope::ErrorBody;
    use tower::ServiceExt;

    fn app() -> Router {
        build(AppState::new(vec!["t".into()]), Path::new("/nonexistent"))
    }

    async fn post_room(app: Router, bearer: Option<&str>, json: &str) -> (StatusCode, ErrorBody) {
        let mut request = Request::builder()
            .method("POST")
            .uri("/api/rooms")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = bearer {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = request.body(Body::from(json.to_string())).expect("request");

        let response = app.oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let error: ErrorBody = serde_json::from_slice(&bytes).expect("json error body");
        (status, error)
    }

    #[tokio::test]
    async fn test_bad_payloads_answer_with_message() {
        for json in [
            r#"{"name":"","capacity":0}"#,
            r#"{"capacity":10}"#,
            r#"{"name":"A","capacity":-1}"#,
            r#"{"name":"A","capacity":"ten"}"#,
            "not json",
        ] {
            let (status, error) = post_room(app(), Some("t"), json).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{json}");
            assert_eq!(error.message.as_deref(), Some("Validation failed"), "{json}");
        }
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let (status, error) = post_room(app(), None, r#"{"name":"A","capacity":2}"#).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(error.message.is_some());
    }

    #[tokio::test]
    async fn test_create_through_router() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/rooms")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, "Bearer t")
            .body(Body::from(r#"{"name":"Aula","capacity":30}"#))
            .expect("request");

        let response = app().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
