use crate::db::DbPool;
use crate::state::SessionSecret;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::db::get_user_from_token;
use super::extractor::{bearer_token, AuthError};

/// Middleware that requires a valid auth token for all requests.
/// The resolved user is stored in request extensions for [`AuthUser`](super::AuthUser).
pub async fn require_auth(
    State(pool): State<Arc<DbPool>>,
    State(secret): State<SessionSecret>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = match bearer_token(request.headers()) {
        Ok(t) => t.to_string(),
        Err(e) => return e.into_response(),
    };

    let user = match get_user_from_token(&pool, secret.as_str(), &token).await {
        Ok(Some(u)) => u,
        Ok(None) => return AuthError::InvalidToken.into_response(),
        Err(e) => {
            tracing::error!("Session lookup failed: {}", e);
            return AuthError::LookupFailed.into_response();
        }
    };

    request.extensions_mut().insert(user);
    next.run(request).await
}
