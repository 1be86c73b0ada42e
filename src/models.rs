use chrono::NaiveDate;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, serde::Serialize, serde::Deserialize)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Donor,
    Facility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, serde::Serialize, serde::Deserialize)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pending,
    Processing,
    Approved,
    Rejected,
    Completed,
    NotCompleted,
}

impl Status {
    /// A pending record can be taken into processing or settled by review;
    /// only a record under processing can reach a completion outcome.
    pub fn can_transition_to(self, next: Status) -> bool {
        use Status::*;
        matches!(
            (self, next),
            (Pending, Processing)
                | (Pending, Approved)
                | (Pending, Rejected)
                | (Processing, Completed)
                | (Processing, NotCompleted)
        )
    }
}

#[derive(Debug, FromRow, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
    pub area: Option<String>,
    pub role: Role,
}

#[derive(Debug, FromRow, serde::Serialize, serde::Deserialize)]
pub struct Donation {
    pub id: i64,
    pub donor_id: i64,
    pub date: NaiveDate,
    pub blood_type: String,
    pub quantity: f64,
    pub status: Status,
}

// requests joined with the owning facility, the shape the review screens consume
#[derive(Debug, FromRow, serde::Serialize, serde::Deserialize)]
pub struct PendingRequest {
    pub id: i64,
    pub blood_type: String,
    pub quantity: f64,
    pub status: Status,
    pub facility_name: String,
    pub location: Option<String>,
    pub patient_condition: Option<String>,
    pub time: Option<String>,
    pub contact: Option<String>,
    pub created_by: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, FromRow, serde::Serialize, serde::Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub facility_id: i64,
    pub blood_type: String,
    pub component_type: String,
    pub quantity: f64,
    pub expiry_date: Option<NaiveDate>,
}
