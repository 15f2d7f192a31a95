use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobEntry {
    pub id: i64,
    pub job_title: String,
    pub company_url: String,
    pub job_url: String,
    pub job_posting_date: chrono::NaiveDateTime,
}
