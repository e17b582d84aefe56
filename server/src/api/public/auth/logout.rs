use crate::api::MessageResponse;
use crate::auth::{bearer_token, delete_session};
use crate::db::DbPool;
use crate::state::SessionSecret;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// Ends the session named by the bearer token, if any. Logging out without a
/// session is not an error.
#[utoipa::path(
    method(get, post),
    path = "/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse)
    ),
    security(
        (),
        ("bearer_auth" = [])
    )
)]
pub async fn logout(
    State(pool): State<Arc<DbPool>>,
    State(secret): State<SessionSecret>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Ok(token) = bearer_token(&headers) {
        match pool.get() {
            Ok(mut conn) => {
                if let Err(e) = delete_session(&mut conn, secret.as_str(), token) {
                    tracing::error!("Failed to delete session: {}", e);
                }
            }
            Err(e) => tracing::error!("Failed to get DB connection: {}", e),
        }
    }

    (
        StatusCode::OK,
        Json(MessageResponse {
            message: "You have been logged out.".to_string(),
        }),
    )
}
