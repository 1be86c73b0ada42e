pub mod schema;
pub mod user;
pub mod donor;
pub mod facility;
pub mod donation;
pub mod request;
pub mod inventory;

use std::str::FromStr;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::errors::{StoreError, StoreResult};
use crate::DbPool;

pub async fn init_db_pool(db_url: &str) -> StoreResult<DbPool> {
    warn!("database url: {}", db_url);
    let options = SqliteConnectOptions::from_str(db_url)
        .map_err(|err| {
            error!("bad database url: {}", err);
            StoreError::Connection
        })?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|err| {
            error!("could not open the store: {}", err);
            StoreError::Connection
        })?;
    info!("connected to the sqlite store");
    Ok(pool)
}

// in-memory stores are per-connection, so unit tests pin the pool to one handle
#[cfg(test)]
pub(crate) async fn test_pool() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    schema::ensure_schema(&pool).await.unwrap();
    pool
}
