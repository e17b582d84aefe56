use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use thiserror::Error;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

/// In-memory SQLite database, private to its pool.
pub const IN_MEMORY: &str = ":memory:";

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to create database pool: {0}")]
    Pool(#[from] r2d2::PoolError),

    #[error("Failed to run database migrations: {0}")]
    Migration(String),

    #[error("Database query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

/// Per-connection pragmas. SQLite leaves foreign keys off unless asked.
#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)
    }
}

pub fn create_pool(database_url: &str) -> Result<DbPool, DbError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let builder = r2d2::Pool::builder().connection_customizer(Box::new(SqlitePragmas));

    // Every ":memory:" connection is its own database, so keep exactly one alive.
    let builder = if database_url == IN_MEMORY {
        builder.max_size(1).idle_timeout(None).max_lifetime(None)
    } else {
        builder
    };

    let pool = builder.build(manager)?;

    // Run pending migrations on startup
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| DbError::Migration(e.to_string()))?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::users;

    #[test]
    fn test_in_memory_pool_runs_migrations() {
        let pool = create_pool(IN_MEMORY).unwrap();
        let mut conn = pool.get().unwrap();

        let count: i64 = users::table.count().get_result(&mut conn).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_foreign_keys_enforced() {
        let pool = create_pool(IN_MEMORY).unwrap();
        let mut conn = pool.get().unwrap();

        let result = conn.batch_execute(
            "INSERT INTO saved_recipes (user_id, recipe_id) VALUES (999, 999);",
        );
        assert!(result.is_err());
    }
}
