use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use contracts::shared::envelope::ErrorBody;

use crate::shared::state::AppState;

/// Caller resolved from the bearer token, available to handlers as an extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUser {
    /// 1-based position of the token in the configured list
    pub user_id: i64,
}

/// Match the `Authorization: Bearer <token>` header against the accepted tokens
pub fn authorize(headers: &HeaderMap, tokens: &[String]) -> Option<ApiUser> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())?
        .strip_prefix("Bearer ")?
        .trim();

    tokens
        .iter()
        .position(|t| t == token)
        .map(|i| ApiUser {
            user_id: i as i64 + 1,
        })
}

/// Middleware that rejects requests without a known bearer token
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match authorize(req.headers(), &state.tokens) {
        Some(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        None => {
            tracing::warn!("Rejected {} {}: missing or unknown token", req.method(), req.uri().path());
            (
                StatusCode::UNAUTHORIZED,
                Json(ErrorBody::new("Token akses tidak valid")),
            )
                .into_response()
        }
    }
}
