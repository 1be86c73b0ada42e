pub mod db;
pub mod service;
pub mod models;
pub mod dto;
pub mod errors;

use sqlx::{Pool, Sqlite};

pub type DbPool = Pool<Sqlite>;
