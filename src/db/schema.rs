use log::{debug, error, info};

use crate::errors::{StoreError, StoreResult};
use crate::DbPool;

const CREATE_TABLES: [&str; 7] = [
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        role TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS donors (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        blood_group TEXT NOT NULL,
        last_donation_date TEXT,
        FOREIGN KEY (user_id) REFERENCES users(id)
    )",
    "CREATE TABLE IF NOT EXISTS facilities (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        name TEXT NOT NULL,
        location TEXT,
        FOREIGN KEY (user_id) REFERENCES users(id)
    )",
    "CREATE TABLE IF NOT EXISTS donations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        donor_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        blood_type TEXT NOT NULL,
        quantity REAL NOT NULL,
        FOREIGN KEY (donor_id) REFERENCES donors(id)
    )",
    "CREATE TABLE IF NOT EXISTS requests (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        facility_id INTEGER NOT NULL,
        blood_type TEXT NOT NULL,
        quantity REAL NOT NULL,
        status TEXT NOT NULL,
        FOREIGN KEY (facility_id) REFERENCES facilities(id)
    )",
    "CREATE TABLE IF NOT EXISTS donation_requests (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        donation_id INTEGER NOT NULL,
        request_id INTEGER NOT NULL,
        quantity REAL NOT NULL,
        date TEXT NOT NULL,
        FOREIGN KEY (donation_id) REFERENCES donations(id),
        FOREIGN KEY (request_id) REFERENCES requests(id)
    )",
    "CREATE TABLE IF NOT EXISTS inventory (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        facility_id INTEGER NOT NULL,
        blood_type TEXT NOT NULL,
        component_type TEXT NOT NULL,
        quantity REAL NOT NULL,
        expiry_date TEXT,
        FOREIGN KEY (facility_id) REFERENCES facilities(id)
    )",
];

// forward-only and ordered: later steps assume the earlier tables exist
const ADD_COLUMNS: [&str; 8] = [
    "ALTER TABLE users ADD COLUMN name TEXT",
    "ALTER TABLE users ADD COLUMN area TEXT",
    "ALTER TABLE donations ADD COLUMN status TEXT NOT NULL DEFAULT 'APPROVED'",
    "ALTER TABLE requests ADD COLUMN patient_condition TEXT",
    "ALTER TABLE requests ADD COLUMN time TEXT",
    "ALTER TABLE requests ADD COLUMN contact TEXT",
    "ALTER TABLE requests ADD COLUMN created_by TEXT",
    "ALTER TABLE requests ADD COLUMN date TEXT",
];

const CREATE_INDEXES: [&str; 11] = [
    "CREATE INDEX IF NOT EXISTS idx_donors_user_id ON donors(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_facilities_user_id ON facilities(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_donations_donor_id ON donations(donor_id)",
    "CREATE INDEX IF NOT EXISTS idx_requests_facility_id ON requests(facility_id)",
    "CREATE INDEX IF NOT EXISTS idx_donation_requests_donation_id ON donation_requests(donation_id)",
    "CREATE INDEX IF NOT EXISTS idx_donation_requests_request_id ON donation_requests(request_id)",
    "CREATE INDEX IF NOT EXISTS idx_inventory_facility_id ON inventory(facility_id)",
    "CREATE INDEX IF NOT EXISTS idx_donations_blood_type ON donations(blood_type)",
    "CREATE INDEX IF NOT EXISTS idx_requests_blood_type ON requests(blood_type)",
    "CREATE INDEX IF NOT EXISTS idx_requests_status ON requests(status)",
    "CREATE INDEX IF NOT EXISTS idx_inventory_blood_type ON inventory(blood_type)",
];

pub async fn ensure_schema(pool: &DbPool) -> StoreResult<()> {
    for sql in CREATE_TABLES {
        sqlx::query(sql).execute(pool).await.map_err(|err| {
            error!("table creation failed: {}", err);
            StoreError::Migration
        })?;
    }
    for sql in ADD_COLUMNS {
        add_column(pool, sql).await?;
    }
    for sql in CREATE_INDEXES {
        sqlx::query(sql).execute(pool).await.map_err(|err| {
            error!("index creation failed: {}", err);
            StoreError::Migration
        })?;
    }
    info!("schema is up to date");
    Ok(())
}

// re-running an ALTER against an already-migrated store reports the column as
// a duplicate; that condition alone is absorbed
async fn add_column(pool: &DbPool, sql: &str) -> StoreResult<()> {
    match sqlx::query(sql).execute(pool).await {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(db_err))
            if db_err.message().contains("duplicate column name") =>
        {
            debug!("column already present: {}", sql);
            Ok(())
        }
        Err(err) => {
            error!("migration step failed: {}", err);
            Err(StoreError::Migration)
        }
    }
}
