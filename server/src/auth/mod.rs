mod crypto;
mod db;
mod extractor;
mod middleware;

pub use crypto::{hash_password, hash_token, verify_password};
pub use db::{
    create_session, delete_session, get_user_from_token, purge_expired_sessions,
    SESSION_LIFETIME_DAYS,
};
pub use extractor::{bearer_token, AuthError, AuthUser};
pub use middleware::require_auth;
