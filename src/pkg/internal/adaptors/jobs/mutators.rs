use sqlx::SqliteConnection;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::server::handlers::jobs::JobInput;
use crate::prelude::Result;

pub struct JobMutator<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&mut self, job: &JobInput) -> Result<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (job_title, company_url, job_url)
            VALUES ($1, $2, $3)
            RETURNING id, job_title, company_url, job_url, job_posting_date
            "#,
        )
        .bind(&job.job_title)
        .bind(&job.company_url)
        .bind(&job.job_url)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    // overwrites all three mutable fields; job_posting_date stays as inserted
    pub async fn update(&mut self, id: i64, job: &JobInput) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            UPDATE jobs
            SET job_title = $2, company_url = $3, job_url = $4
            WHERE id = $1
            RETURNING id, job_title, company_url, job_url, job_posting_date
            "#,
        )
        .bind(id)
        .bind(&job.job_title)
        .bind(&job.company_url)
        .bind(&job.job_url)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i64) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            DELETE FROM jobs WHERE id = $1
            RETURNING id, job_title, company_url, job_url, job_posting_date
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
