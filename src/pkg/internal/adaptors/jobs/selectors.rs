use sqlx::SqliteConnection;

use crate::{pkg::internal::adaptors::jobs::spec::JobEntry, prelude::Result};

pub struct JobSelector<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        JobSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            "SELECT id, job_title, company_url, job_url, job_posting_date
             FROM jobs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(
            "SELECT id, job_title, company_url, job_url, job_posting_date
             FROM jobs ORDER BY id",
        )
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }
}
