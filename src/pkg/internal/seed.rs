use std::path::{Path, PathBuf};

use sqlx::SqlitePool;
use standard_error::{Interpolate, StandardError};
use tokio::fs;

use crate::pkg::internal::adaptors::jobs::mutators::JobMutator;
use crate::pkg::server::handlers::jobs::JobInput;
use crate::pkg::server::state::GetTxn;
use crate::prelude::Result;

/// Walks `dir` for `.json` files and inserts one job per array entry.
/// The whole run shares one transaction: a malformed file aborts everything.
pub async fn load(pool: &SqlitePool, dir: &Path) -> Result<u64> {
    let files = collect_seed_files(dir).await?;
    tracing::debug!("found {} seed files under {}", files.len(), dir.display());

    let mut tx = pool.begin_txn().await?;
    let mut inserted = 0u64;
    for path in &files {
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| StandardError::new("ERR-SEED-001").interpolate_err(e.to_string()))?;
        let jobs: Vec<JobInput> = serde_json::from_str(&raw).map_err(|e| {
            StandardError::new("ERR-SEED-002")
                .interpolate_err(format!("{}: {}", path.display(), e))
        })?;
        for job in &jobs {
            JobMutator::new(&mut tx).create(job).await?;
            inserted += 1;
        }
        tracing::debug!("seeded {} jobs from {}", jobs.len(), path.display());
    }
    tx.commit().await?;
    Ok(inserted)
}

async fn collect_seed_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        let mut entries = fs::read_dir(&current)
            .await
            .map_err(|e| StandardError::new("ERR-SEED-001").interpolate_err(e.to_string()))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StandardError::new("ERR-SEED-001").interpolate_err(e.to_string()))?
        {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| StandardError::new("ERR-SEED-001").interpolate_err(e.to_string()))?;
            if file_type.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
    }
    // deterministic insert order regardless of directory traversal
    files.sort();
    Ok(files)
}
