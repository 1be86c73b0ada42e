use log::{info, warn};

use crate::db;
use crate::dto::NewBloodRequestDto;
use crate::errors::{StoreError, StoreResult};
use crate::models::PendingRequest;
use crate::DbPool;

/// Resolves the facility from its username and inserts the request in the
/// same transaction; an unknown username fails closed with no insert.
pub async fn create(
    dto: NewBloodRequestDto,
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
    let request_id = db::request::create(facility_id, &dto, &mut *tx).await?;
    tx.commit().await?;
    info!("blood request {} created by {}", request_id, facility_username);
    Ok(request_id)
}

pub async fn get_pending(pool: &DbPool) -> StoreResult<Vec<PendingRequest>> {
    let requests = db::request::get_pending(pool).await?;
    Ok(requests)
}
