use crate::error::DbError;
use configuration::Config;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::Connection;
use std::time::Duration;

/// The fixed size of the connection pool.
///
/// The pool is the only bound on request concurrency: when all connections
/// are checked out, further requests queue on acquire rather than fail fast.
pub const MAX_POOL_CONNECTIONS: u32 = 4;

/// Builds a lazy connection pool to the MySQL database.
///
/// The pool is constructed from the discrete host/port/user settings rather
/// than a URL, and no connection is opened here; the startup probe performs
/// the first real connection attempt.
pub fn connect(config: &Config) -> MySqlPool {
    let options = MySqlConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_schema);

    MySqlPoolOptions::new()
        .max_connections(MAX_POOL_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(options)
}

/// Verifies database reachability by checking out one connection and pinging
/// it. The connection returns to the pool when the guard drops.
///
/// The server must call this before binding its listening socket; a failure
/// here is fatal at startup.
pub async fn probe(pool: &MySqlPool) -> Result<(), DbError> {
    let mut conn = pool.acquire().await?;
    conn.ping().await?;
    tracing::info!("database liveness probe succeeded");
    Ok(())
}
