use crate::api::{validation_failed, ErrorResponse, ValidationErrorResponse};
use crate::auth::{create_session, verify_password};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::User;
use crate::schema::users;
use crate::state::SessionSecret;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use larder_core::validation::validate_login;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

const INVALID_CREDENTIALS: &str = "Login unsuccessful. Please check email and password.";

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body(content = LoginRequest, example = json!({"email": "test@example.com", "password": "Test1234!"})),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid form", body = ValidationErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(pool): State<Arc<DbPool>>,
    State(secret): State<SessionSecret>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    if let Err(errors) = validate_login(&req.email, &req.password) {
        return validation_failed(errors);
    }

    let mut conn = get_conn!(pool);

    let email = req.email.trim().to_lowercase();

    let user: User = match users::table
        .filter(users::email.eq(&email))
        .select(User::as_select())
        .first(&mut conn)
    {
        Ok(u) => u,
        Err(diesel::result::Error::NotFound) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: INVALID_CREDENTIALS.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to look up user: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to log in".to_string(),
                }),
            )
                .into_response();
        }
    };

    if !verify_password(&req.password, &user.password_hash) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: INVALID_CREDENTIALS.to_string(),
            }),
        )
            .into_response();
    }

    let token = match create_session(&mut conn, secret.as_str(), user.id) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Failed to create session: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create session".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(LoginResponse {
            token,
            username: user.username,
            message: "Login successful!".to_string(),
        }),
    )
        .into_response()
}
