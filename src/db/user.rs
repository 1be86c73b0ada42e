use sqlx::prelude::FromRow;
use sqlx::sqlite::SqliteQueryResult;
use sqlx::SqliteConnection;

use crate::models::Role;
use crate::DbPool;

// full stored row, password hash included; stays inside the crate
#[derive(Debug, FromRow)]
pub(crate) struct StoredUser {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub name: Option<String>,
    pub area: Option<String>,
}

pub async fn create(
    username: &str,
    password_hash: &str,
    role: Role,
    name: &str,
    area: &str,
    conn: &mut SqliteConnection,
) -> Result<SqliteQueryResult, sqlx::Error> {
    sqlx::query("INSERT INTO users (username, password, role, name, area) VALUES (?, ?, ?, ?, ?)")
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .bind(name)
        .bind(area)
        .execute(conn)
        .await
}

pub(crate) async fn get_by_username(
    username: &str,
    pool: &DbPool,
) -> Result<Option<StoredUser>, sqlx::Error> {
    sqlx::query_as::<_, StoredUser>(
        "SELECT id, username, password, role, name, area FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn exists(username: &str, pool: &DbPool) -> Result<bool, sqlx::Error> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

pub async fn get_role(username: &str, pool: &DbPool) -> Result<Option<Role>, sqlx::Error> {
    sqlx::query_scalar::<_, Role>("SELECT role FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
}
