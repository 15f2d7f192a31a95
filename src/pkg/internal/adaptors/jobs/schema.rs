use sqlx::SqliteConnection;

use crate::prelude::Result;

/// Brings the jobs table up if it isn't there yet. Safe to re-run.
pub async fn create(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            job_title TEXT NOT NULL,
            company_url TEXT NOT NULL,
            job_url TEXT NOT NULL,
            job_posting_date TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// Drops the jobs table and every row in it. Safe to re-run.
pub async fn drop(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query("DROP TABLE IF EXISTS jobs")
        .execute(&mut *conn)
        .await?;
    Ok(())
}
