use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value;
use standard_error::{Interpolate, StandardError, Status};
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::jobs::{mutators::JobMutator, selectors::JobSelector, spec::JobEntry},
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

#[derive(Deserialize, Validate)]
pub struct JobInput {
    #[validate(length(min = 1))]
    pub job_title: String,
    #[validate(length(min = 1))]
    pub company_url: String,
    #[validate(length(min = 1))]
    pub job_url: String,
}

// bodies arrive as raw Value so missing or mistyped keys come back as a 400
// instead of the extractor's default rejection
fn parse_input(payload: Value) -> Result<JobInput> {
    let input: JobInput = serde_json::from_value(payload).map_err(|e| {
        StandardError::new("ERR-JOB-002")
            .interpolate_err(e.to_string())
            .code(StatusCode::BAD_REQUEST)
    })?;
    input.validate().map_err(|e| {
        StandardError::new("ERR-JOB-002")
            .interpolate_err(e.to_string())
            .code(StatusCode::BAD_REQUEST)
    })?;
    Ok(input)
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<JobEntry>)> {
    let input = parse_input(payload)?;
    let mut tx = state.db_pool.begin_txn().await?;
    let job = JobMutator::new(&mut tx).create(&input).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(job)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobEntry>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let jobs = JobSelector::new(&mut tx).get_all().await?;
    Ok(Json(jobs))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<JobEntry>> {
    let mut tx = state.db_pool.begin_txn().await?;
    match JobSelector::new(&mut tx).get_by_id(id).await? {
        Some(job) => Ok(Json(job)),
        None => Err(StandardError::new("ERR-JOB-001").code(StatusCode::NOT_FOUND)),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<Json<JobEntry>> {
    let input = parse_input(payload)?;
    let mut tx = state.db_pool.begin_txn().await?;
    let job = match JobMutator::new(&mut tx).update(id, &input).await? {
        Some(job) => job,
        None => return Err(StandardError::new("ERR-JOB-001").code(StatusCode::NOT_FOUND)),
    };
    tx.commit().await?;
    Ok(Json(job))
}

// responds with the row as it stood before deletion
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<JobEntry>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let job = match JobMutator::new(&mut tx).delete(id).await? {
        Some(job) => job,
        None => return Err(StandardError::new("ERR-JOB-001").code(StatusCode::NOT_FOUND)),
    };
    tx.commit().await?;
    Ok(Json(job))
}
