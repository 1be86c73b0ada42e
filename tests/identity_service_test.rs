//! Registration and authentication scenarios against an in-memory store.

use blood_bank_service::db::schema;
use blood_bank_service::dto::{NewDonorDto, NewFacilityDto};
use blood_bank_service::errors::StoreError;
use blood_bank_service::models::Role;
use blood_bank_service::service::identity;
use blood_bank_service::DbPool;
use sqlx::sqlite::SqlitePoolOptions;

// a single-connection pool keeps every statement on the same in-memory store
async fn test_pool() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory store");
    schema::ensure_schema(&pool).await.expect("schema");
    pool
}

fn alice() -> NewDonorDto {
    NewDonorDto {
        username: "alice".to_string(),
        password: "pw123".to_string(),
        full_name: "Alice A".to_string(),
        email: "a@x.com".to_string(),
        phone: "1234567890".to_string(),
        address: "Addr".to_string(),
        blood_type: "O+".to_string(),
        date_of_birth: "2000-01-01".to_string(),
        area: "Area1".to_string(),
    }
}

fn city_hospital() -> NewFacilityDto {
    NewFacilityDto {
        username: "fac1".to_string(),
        password: "pw".to_string(),
        facility_name: "City Hospital".to_string(),
        location: "Loc1".to_string(),
        area: "Area2".to_string(),
    }
}

#[tokio::test]
async fn donor_registration_round_trip() {
    let pool = test_pool().await;

    let user_id = identity::register_donor(alice(), &pool).await.unwrap();
    assert!(user_id > 0);
    assert!(identity::username_exists("alice", &pool).await.unwrap());

    let user = identity::authenticate("alice", "pw123", &pool)
        .await
        .unwrap()
        .expect("profile");
    assert_eq!(user.role, Role::Donor);
    assert_eq!(user.name.as_deref(), Some("Alice A"));
    assert_eq!(user.area.as_deref(), Some("Area1"));

    assert!(identity::authenticate("alice", "wrong", &pool)
        .await
        .unwrap()
        .is_none());
    assert!(identity::authenticate("nobody", "pw123", &pool)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn donor_profile_lands_with_the_account() {
    let pool = test_pool().await;
    let user_id = identity::register_donor(alice(), &pool).await.unwrap();

    let (profile_user_id, blood_group): (i64, String) =
        sqlx::query_as("SELECT user_id, blood_group FROM donors WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(profile_user_id, user_id);
    assert_eq!(blood_group, "O+");

    let last_donation: Option<String> =
        sqlx::query_scalar("SELECT last_donation_date FROM donors WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(last_donation, None);
}

#[tokio::test]
async fn duplicate_username_is_reported_and_stored_once() {
    let pool = test_pool().await;
    identity::register_donor(alice(), &pool).await.unwrap();

    let err = identity::register_donor(alice(), &pool).await.unwrap_err();
    assert_eq!(err, StoreError::DuplicateUsername);

    // a facility claiming the same username collides on the shared users table
    let mut facility = city_hospital();
    facility.username = "alice".to_string();
    let err = identity::register_facility(facility, &pool).await.unwrap_err();
    assert_eq!(err, StoreError::DuplicateUsername);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = 'alice'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn failed_profile_insert_leaves_no_account_behind() {
    let pool = test_pool().await;
    // force the second statement of the transaction to fail
    sqlx::query("DROP TABLE donors").execute(&pool).await.unwrap();

    let result = identity::register_donor(alice(), &pool).await;
    assert!(result.is_err());

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(users, 0);
}

#[tokio::test]
async fn passwords_are_stored_salted_not_plaintext() {
    let pool = test_pool().await;
    identity::register_donor(alice(), &pool).await.unwrap();

    let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE username = 'alice'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_ne!(stored, "pw123");
    assert!(stored.starts_with("$argon2"));
}

#[tokio::test]
async fn facility_registration_and_role_lookup() {
    let pool = test_pool().await;
    identity::register_facility(city_hospital(), &pool).await.unwrap();

    assert_eq!(
        identity::get_user_role("fac1", &pool).await.unwrap(),
        Some(Role::Facility)
    );
    assert_eq!(identity::get_user_role("ghost", &pool).await.unwrap(), None);

    let user = identity::authenticate("fac1", "pw", &pool)
        .await
        .unwrap()
        .expect("profile");
    assert_eq!(user.role, Role::Facility);
    assert_eq!(user.name.as_deref(), Some("City Hospital"));
    assert_eq!(user.area.as_deref(), Some("Area2"));

    let (profile_user_id, location): (i64, Option<String>) =
        sqlx::query_as("SELECT user_id, location FROM facilities WHERE user_id = ?")
            .bind(user.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(profile_user_id, user.id);
    assert_eq!(location.as_deref(), Some("Loc1"));
}

#[tokio::test]
async fn username_probe_is_false_for_unknown_names() {
    let pool = test_pool().await;
    assert!(!identity::username_exists("alice", &pool).await.unwrap());
    identity::register_donor(alice(), &pool).await.unwrap();
    assert!(identity::username_exists("alice", &pool).await.unwrap());
}
