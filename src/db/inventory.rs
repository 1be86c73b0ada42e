use sqlx::SqliteConnection;

use crate::dto::NewInventoryItemDto;
use crate::models::InventoryItem;
use crate::DbPool;

pub async fn create(
    facility_id: i64,
    item: &NewInventoryItemDto,
    conn: &mut SqliteConnection,
) -> Result<i64, sqlx::Error> {
    let res = sqlx::query(
        "INSERT INTO inventory (facility_id, blood_type, component_type, quantity, expiry_date)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(facility_id)
    .bind(&item.blood_type)
    .bind(&item.component_type)
    .bind(item.quantity)
    .bind(item.expiry_date)
    .execute(conn)
    .await?;
    Ok(res.last_insert_rowid())
}

pub async fn get_for_facility(
    username: &str,
    pool: &DbPool,
) -> Result<Vec<InventoryItem>, sqlx::Error> {
    sqlx::query_as::<_, InventoryItem>(
        "SELECT i.id, i.facility_id, i.blood_type, i.component_type, i.quantity, i.expiry_date
         FROM inventory i
         JOIN facilities f ON i.facility_id = f.id
         JOIN users u ON f.user_id = u.id
         WHERE u.username = ?
         ORDER BY i.expiry_date",
    )
    .bind(username)
    .fetch_all(pool)
    .await
}
