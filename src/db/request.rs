use sqlx::SqliteConnection;

use crate::dto::NewBloodRequestDto;
use crate::models::PendingRequest;
use crate::DbPool;

pub async fn create(
    facility_id: i64,
    request: &NewBloodRequestDto,
    conn: &mut SqliteConnection,
) -> Result<i64, sqlx::Error> {
    let res = sqlx::query(
        "INSERT INTO requests (facility_id, blood_type, quantity, status,
                               patient_condition, time, contact, created_by, date)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(facility_id)
    .bind(&request.blood_type)
    .bind(request.quantity)
    .bind(request.status)
    .bind(&request.patient_condition)
    .bind(&request.time)
    .bind(&request.contact)
    .bind(&request.created_by)
    .bind(request.date)
    .execute(conn)
    .await?;
    Ok(res.last_insert_rowid())
}

pub async fn get_pending(pool: &DbPool) -> Result<Vec<PendingRequest>, sqlx::Error> {
    sqlx::query_as::<_, PendingRequest>(
        "SELECT r.id, r.blood_type, r.quantity, UPPER(r.status) AS status,
                f.name AS facility_name, f.location,
                r.patient_condition, r.time, r.contact, r.created_by, r.date
         FROM requests r
         JOIN facilities f ON r.facility_id = f.id
         WHERE UPPER(r.status) = 'PENDING'
         ORDER BY r.date DESC",
    )
    .fetch_all(pool)
    .await
}
