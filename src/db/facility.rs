use sqlx::sqlite::SqliteQueryResult;
use sqlx::SqliteConnection;

pub async fn create_profile(
    user_id: i64,
    name: &str,
    location: &str,
    conn: &mut SqliteConnection,
) -> Result<SqliteQueryResult, sqlx::Error> {
    sqlx::query("INSERT INTO facilities (user_id, name, location) VALUES (?, ?, ?)")
        .bind(user_id)
        .bind(name)
        .bind(location)
        .execute(conn)
        .await
}

pub async fn get_id_by_username(
    username: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT f.id FROM facilities f JOIN users u ON f.user_id = u.id WHERE u.username = ?",
    )
    .bind(username)
    .fetch_optional(conn)
    .await
}
