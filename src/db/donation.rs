use sqlx::SqliteConnection;

use crate::dto::NewDonationDto;
use crate::models::{Donation, Status};
use crate::DbPool;

pub async fn create(
    donor_id: i64,
    donation: &NewDonationDto,
    conn: &mut SqliteConnection,
) -> Result<i64, sqlx::Error> {
    let res = sqlx::query(
        "INSERT INTO donations (donor_id, date, blood_type, quantity, status) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(donor_id)
    .bind(donation.date)
    .bind(&donation.blood_type)
    .bind(donation.quantity)
    .bind(donation.status)
    .execute(conn)
    .await?;
    Ok(res.last_insert_rowid())
}

// stored casing is canonical for new rows but legacy rows are mixed, so
// reads normalize in SQL
pub async fn get_status(
    donation_id: i64,
    conn: &mut SqliteConnection,
) -> Result<Option<Status>, sqlx::Error> {
    sqlx::query_scalar::<_, Status>("SELECT UPPER(status) FROM donations WHERE id = ?")
        .bind(donation_id)
        .fetch_optional(conn)
        .await
}

pub async fn set_status(
    donation_id: i64,
    status: Status,
    conn: &mut SqliteConnection,
) -> Result<u64, sqlx::Error> {
    let res = sqlx::query("UPDATE donations SET status = ? WHERE id = ?")
        .bind(status)
        .bind(donation_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn get_history_by_username(
    username: &str,
    pool: &DbPool,
) -> Result<Vec<Donation>, sqlx::Error> {
    sqlx::query_as::<_, Donation>(
        "SELECT don.id, don.donor_id, don.date, don.blood_type, don.quantity,
                UPPER(don.status) AS status
         FROM donations don
         JOIN donors d ON don.donor_id = d.id
         JOIN users u ON d.user_id = u.id
         WHERE u.username = ?
         ORDER BY don.date DESC",
    )
    .bind(username)
    .fetch_all(pool)
    .await
}
