use log::info;

use crate::db;
use crate::dto::{NewDonorDto, NewFacilityDto};
use crate::errors::{StoreError, StoreResult};
use crate::models::{Role, User};
use crate::service::crypto;
use crate::DbPool;

/// Inserts the account and its donor profile in one transaction; either both
/// rows land or neither does. A taken username surfaces as
/// `StoreError::DuplicateUsername` from the UNIQUE constraint.
pub async fn register_donor(dto: NewDonorDto, pool: &DbPool) -> StoreResult<i64> {
    let NewDonorDto {
        username,
        password,
        full_name,
        blood_type,
        area,
        ..
    } = dto;
    let password_hash = crypto::hash_password(&password)?;

    let mut tx = pool.begin().await?;
    let inserted = db::user::create(
        &username,
        &password_hash,
        Role::Donor,
        &full_name,
        &area,
        &mut *tx,
    )
    .await?;
    if inserted.rows_affected() == 0 {
        tx.rollback().await?;
        return Err(StoreError::Storage);
    }
    let user_id = inserted.last_insert_rowid();
    db::donor::create_profile(user_id, &blood_type, None, &mut *tx).await?;
    tx.commit().await?;
    info!("registered donor account: {}", username);
    Ok(user_id)
}

/// Same two-step atomic pattern as donor registration, against the
/// facilities profile table.
pub async fn register_facility(dto: NewFacilityDto, pool: &DbPool) -> StoreResult<i64> {
    let NewFacilityDto {
        username,
        password,
        facility_name,
        location,
        area,
    } = dto;
    let password_hash = crypto::hash_password(&password)?;

    let mut tx = pool.begin().await?;
    let inserted = db::user::create(
        &username,
        &password_hash,
        Role::Facility,
        &facility_name,
        &area,
        &mut *tx,
    )
    .await?;
    if inserted.rows_affected() == 0 {
        tx.rollback().await?;
        return Err(StoreError::Storage);
    }
    let user_id = inserted.last_insert_rowid();
    db::facility::create_profile(user_id, &facility_name, &location, &mut *tx).await?;
    tx.commit().await?;
    info!("registered facility account: {}", facility_name);
    Ok(user_id)
}

// advisory pre-check only; registration itself is guarded by the constraint
pub async fn username_exists(username: &str, pool: &DbPool) -> StoreResult<bool> {
    let exists = db::user::exists(username, pool).await?;
    Ok(exists)
}

pub async fn authenticate(
    username: &str,
    password: &str,
    pool: &DbPool,
) -> StoreResult<Option<User>> {
    let stored = db::user::get_by_username(username, pool).await?;
    match stored {
        Some(row) => {
            if crypto::verify_password(password, &row.password) {
                info!("authentication successful for user: {}", username);
                Ok(Some(User {
                    id: row.id,
                    username: row.username,
                    name: row.name,
                    area: row.area,
                    role: row.role,
                }))
            } else {
                info!("authentication failed for user: {}", username);
                Ok(None)
            }
        }
        None => Ok(None),
    }
}

pub async fn get_user_role(username: &str, pool: &DbPool) -> StoreResult<Option<Role>> {
    let role = db::user::get_role(username, pool).await?;
    Ok(role)
}
