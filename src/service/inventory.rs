use log::{info, warn};

use crate::db;
use crate::dto::NewInventoryItemDto;
use crate::errors::{StoreError, StoreResult};
use crate::models::InventoryItem;
use crate::DbPool;

pub async fn add_item(
    dto: NewInventoryItemDto,
    facility_username: &str,
    pool: &DbPool,
) -> StoreResult<i64> {
    let mut tx = pool.begin().await?;
    let facility_id = match db::facility::get_id_by_username(facility_username, &mut *tx).await? {
        Some(id) => id,
        None => {
            warn!("facility not found for username: {}", facility_username);
            return Err(StoreError::NotFound);
        }
    };
    let item_id = db::inventory::create(facility_id, &dto, &mut *tx).await?;
    tx.commit().await?;
    info!("inventory item {} stocked by {}", item_id, facility_username);
    Ok(item_id)
}

pub async fn get_for_facility(
    facility_username: &str,
    pool: &DbPool,
) -> StoreResult<Vec<InventoryItem>> {
    let items = db::inventory::get_for_facility(facility_username, pool).await?;
    Ok(items)
}
