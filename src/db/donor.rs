use chrono::NaiveDate;
use sqlx::sqlite::SqliteQueryResult;
use sqlx::SqliteConnection;

// donor rows are only ever written together with their owning users row,
// inside the registration transaction
pub async fn create_profile(
    user_id: i64,
    blood_group: &str,
    last_donation_date: Option<NaiveDate>,
    conn: &mut SqliteConnection,
) -> Result<SqliteQueryResult, sqlx::Error> {
    sqlx::query("INSERT INTO donors (user_id, blood_group, last_donation_date) VALUES (?, ?, ?)")
        .bind(user_id)
        .bind(blood_group)
        .bind(last_donation_date)
        .execute(conn)
        .await
}

pub async fn get_id_by_username(
    username: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT d.id FROM donors d JOIN users u ON d.user_id = u.id WHERE u.username = ?",
    )
    .bind(username)
    .fetch_optional(conn)
    .await
}
