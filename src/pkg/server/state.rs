use std::str::FromStr;
use std::sync::Arc;

use axum::http::StatusCode;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite, SqlitePool, Transaction};
use standard_error::{Interpolate, StandardError, Status};

use crate::{conf::settings, prelude::Result};

pub fn db_pool() -> Result<Pool<Sqlite>> {
    let opts = SqliteConnectOptions::from_str(&settings.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy_with(opts);
    Ok(pool)
}

pub trait GetTxn {
    async fn begin_txn(&self) -> Result<Transaction<'static, Sqlite>>;
}

impl GetTxn for SqlitePool {
    async fn begin_txn(&self) -> Result<Transaction<'static, Sqlite>> {
        self.begin().await.map_err(|e| {
            StandardError::new("ERR-DB-000")
                .interpolate_err(e.to_string())
                .code(StatusCode::SERVICE_UNAVAILABLE)
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub db_pool: Arc<SqlitePool>,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        Ok(AppState {
            db_pool: Arc::new(db_pool()?),
        })
    }
}
