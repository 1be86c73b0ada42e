use derive_more::{Display, Error};
use log::error;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum StoreError {
    #[display(fmt = "store unreachable")]
    Connection,

    #[display(fmt = "username already taken")]
    DuplicateUsername,

    #[display(fmt = "no matching record")]
    NotFound,

    #[display(fmt = "schema migration failed")]
    Migration,

    #[display(fmt = "illegal status transition")]
    IllegalTransition,

    #[display(fmt = "storage failure")]
    Storage,
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::DuplicateUsername
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_) => {
                error!("store unreachable: {}", err);
                StoreError::Connection
            }
            _ => {
                error!("storage failure: {}", err);
                StoreError::Storage
            }
        }
    }
}
