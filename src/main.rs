use blood_bank_service::{db, service};
use dotenv::dotenv;
use log::info;
use std::env;

#[tokio::main]
async fn main() {
    dotenv().ok();
    service::log::init_logger();
    let db_url = env::var("DATABASE_URL")
    .unwrap_or_else(|e| {
        panic!("Failed to get env with name 'DATABASE_URL': {:?}", e);
    });
    let pool = db::init_db_pool(&db_url)
        .await
        .expect("could not open the blood bank store");
    db::schema::ensure_schema(&pool)
        .await
        .expect("could not bring the schema up to date");
    info!("store ready at {}", db_url);
}
