//! Lazy singleton PostgreSQL pool.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Get or initialize the shared connection pool.
///
/// Reads the connection string from `DATABASE_URL`; returns an error instead
/// of panicking so server functions can surface a configuration problem as a
/// normal failure.
pub async fn pool() -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| sqlx::Error::Configuration("DATABASE_URL must be set".into()))?;

        PgPoolOptions::new()
            .max_connections(8)
            .connect(&database_url)
            .await
    })
    .await
}
