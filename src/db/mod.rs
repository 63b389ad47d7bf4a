use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};

use crate::errors::StoreError;

const CREATE_DEPARTMENTS: &str = "CREATE TABLE IF NOT EXISTS departments (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    location TEXT NOT NULL
)";

const CREATE_EMPLOYEES: &str = "CREATE TABLE IF NOT EXISTS employees (
    id SERIAL PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    department_id INTEGER NOT NULL REFERENCES departments (id)
)";

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, StoreError> {
    info!("Connecting to database (max_connections={})", max_connections);
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Creates the two tables if they are missing. Existing tables are left as is.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    pool.execute(CREATE_DEPARTMENTS).await?;
    pool.execute(CREATE_EMPLOYEES).await?;
    Ok(())
}
