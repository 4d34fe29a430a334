// src/infrastructure/database.rs
use std::str::FromStr;

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    // SET NULL / CASCADE on the category and translation references only
    // fire with foreign-key enforcement switched on, so the pragma goes on
    // the connect options and applies to every pooled connection.
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .pragma("foreign_keys", "ON");

    SqlitePoolOptions::new()
        .max_connections(16)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
