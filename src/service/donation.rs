use log::{info, warn};

use crate::db;
use crate::dto::NewDonationDto;
use crate::errors::{StoreError, StoreResult};
use crate::models::{Donation, Status};
use crate::DbPool;

pub async fn create(dto: NewDonationDto, donor_username: &str, pool: &DbPool) -> StoreResult<i64> {
    let mut tx = pool.begin().await?;
    let donor_id = match db::donor::get_id_by_username(donor_username, &mut *tx).await? {
        Some(id) => id,
        None => {
            warn!("donor not found for username: {}", donor_username);
            return Err(StoreError::NotFound);
        }
    };
    let donation_id = db::donation::create(donor_id, &dto, &mut *tx).await?;
    tx.commit().await?;
    info!("donation {} recorded for {}", donation_id, donor_username);
    Ok(donation_id)
}

/// Reads the stored status and applies the new one only when the state
/// machine allows the move; read, check and write share one transaction.
pub async fn update_status(donation_id: i64, status: Status, pool: &DbPool) -> StoreResult<()> {
    let mut tx = pool.begin().await?;
    let current = match db::donation::get_status(donation_id, &mut *tx).await? {
        Some(current) => current,
        None => return Err(StoreError::NotFound),
    };
    if !current.can_transition_to(status) {
        warn!(
            "rejected status change {:?} -> {:?} for donation {}",
            current, status, donation_id
        );
        return Err(StoreError::IllegalTransition);
    }
    let rows = db::donation::set_status(donation_id, status, &mut *tx).await?;
    if rows == 0 {
        return Err(StoreError::NotFound);
    }
    tx.commit().await?;
    info!("donation {} moved to {:?}", donation_id, status);
    Ok(())
}

pub async fn get_history(donor_username: &str, pool: &DbPool) -> StoreResult<Vec<Donation>> {
    let donations = db::donation::get_history_by_username(donor_username, pool).await?;
    Ok(donations)
}
