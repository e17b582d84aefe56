use crate::db::{DbError, DbPool};
use crate::models::{NewSession, User};
use crate::schema::{sessions, users};
use chrono::{Duration, Utc};
use diesel::prelude::*;

use super::crypto::{generate_token, hash_token};

/// How long a login stays valid.
pub const SESSION_LIFETIME_DAYS: i64 = 30;

pub fn create_session(
    conn: &mut SqliteConnection,
    secret_key: &str,
    user_id: i32,
) -> Result<String, diesel::result::Error> {
    let token = generate_token();
    let token_hash = hash_token(secret_key, &token);
    let expires_at = (Utc::now() + Duration::days(SESSION_LIFETIME_DAYS)).naive_utc();

    let new_session = NewSession {
        user_id,
        token_hash: &token_hash,
        expires_at,
    };

    diesel::insert_into(sessions::table)
        .values(&new_session)
        .execute(conn)?;

    Ok(token)
}

/// Returns the number of sessions removed (0 or 1).
pub fn delete_session(
    conn: &mut SqliteConnection,
    secret_key: &str,
    token: &str,
) -> Result<usize, diesel::result::Error> {
    let token_hash = hash_token(secret_key, token);
    diesel::delete(sessions::table.filter(sessions::token_hash.eq(&token_hash))).execute(conn)
}

/// Removes every session past its expiry. Returns the number removed.
pub fn purge_expired_sessions(conn: &mut SqliteConnection) -> Result<usize, diesel::result::Error> {
    diesel::delete(sessions::table.filter(sessions::expires_at.le(Utc::now().naive_utc())))
        .execute(conn)
}

/// Resolve a bearer token to its user. `Ok(None)` means the token is unknown
/// or expired; expired sessions are purged on a miss.
pub async fn get_user_from_token(
    pool: &DbPool,
    secret_key: &str,
    token: &str,
) -> Result<Option<User>, DbError> {
    let mut conn = pool.get()?;
    let token_hash = hash_token(secret_key, token);

    let user = sessions::table
        .inner_join(users::table)
        .filter(sessions::token_hash.eq(&token_hash))
        .filter(sessions::expires_at.gt(Utc::now().naive_utc()))
        .select(User::as_select())
        .first(&mut conn)
        .optional()?;

    if user.is_none() {
        match purge_expired_sessions(&mut conn) {
            Ok(0) => {}
            Ok(n) => tracing::debug!(purged = n, "removed expired sessions"),
            Err(e) => tracing::warn!("Failed to purge expired sessions: {}", e),
        }
    }

    Ok(user)
}
