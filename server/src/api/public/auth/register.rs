use crate::api::{validation_failed, ErrorResponse, ValidationErrorResponse};
use crate::auth::{create_session, hash_password};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{NewUser, User};
use crate::schema::users;
use crate::state::SessionSecret;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use larder_core::validation::validate_registration;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub user_id: i32,
    pub token: String,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body(content = RegisterRequest, example = json!({
        "username": "testuser",
        "email": "test@example.com",
        "password": "Test1234!",
        "confirm_password": "Test1234!"
    })),
    responses(
        (status = 201, description = "User created successfully", body = RegisterResponse),
        (status = 400, description = "Invalid form", body = ValidationErrorResponse),
        (status = 409, description = "Username or email already exists", body = ErrorResponse)
    )
)]
pub async fn register(
    State(pool): State<Arc<DbPool>>,
    State(secret): State<SessionSecret>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    if let Err(errors) = validate_registration(
        &req.username,
        &req.email,
        &req.password,
        &req.confirm_password,
    ) {
        return validation_failed(errors);
    }

    let username = req.username.trim();
    let email = req.email.trim().to_lowercase();

    let password_hash = match hash_password(&req.password) {
        Ok(h) => h,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to hash password".to_string(),
                }),
            )
                .into_response()
        }
    };

    let mut conn = get_conn!(pool);

    let new_user = NewUser {
        username,
        email: &email,
        password_hash: &password_hash,
    };

    let user: User = match diesel::insert_into(users::table)
        .values(&new_user)
        .returning(User::as_returning())
        .get_result(&mut conn)
    {
        Ok(u) => u,
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)) => {
            let error = if info.message().contains("users.email") {
                "Email already registered."
            } else {
                "Username already taken."
            };
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: error.to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!("Failed to create user: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create user".to_string(),
                }),
            )
                .into_response();
        }
    };

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

    tracing::info!(user_id = user.id, "user registered");

    (
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id: user.id,
            token,
            message: "Your account has been created!".to_string(),
        }),
    )
        .into_response()
}
