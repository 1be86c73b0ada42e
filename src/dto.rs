use serde::Deserialize;
use chrono::NaiveDate;

use crate::models::Status;

#[derive(Debug, Deserialize, Clone)]
pub struct NewDonorDto {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub blood_type: String,
    pub date_of_birth: String,
    pub area: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewFacilityDto {
    pub username: String,
    pub password: String,
    pub facility_name: String,
    pub location: String,
    pub area: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewBloodRequestDto {
    pub blood_type: String,
    pub quantity: f64,
    pub status: Status,
    pub patient_condition: Option<String>,
    pub time: Option<String>,
    pub contact: Option<String>,
    pub created_by: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewDonationDto {
    pub date: NaiveDate,
    pub blood_type: String,
    pub quantity: f64,
    pub status: Status,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewInventoryItemDto {
    pub blood_type: String,
    pub component_type: String,
    pub quantity: f64,
    pub expiry_date: Option<NaiveDate>,
}
