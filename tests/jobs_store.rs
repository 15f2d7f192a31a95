use std::collections::HashSet;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use jobboard::pkg::internal::adaptors::jobs::{
    mutators::JobMutator, schema, selectors::JobSelector,
};
use jobboard::pkg::internal::seed;
use jobboard::pkg::server::handlers::jobs::JobInput;
use jobboard::pkg::server::state::GetTxn;

async fn test_pool() -> SqlitePool {
    // a single connection so every handle sees the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let mut tx = pool.begin_txn().await.unwrap();
    schema::create(&mut tx).await.unwrap();
    tx.commit().await.unwrap();
    pool
}

fn input(title: &str, company_url: &str, job_url: &str) -> JobInput {
    JobInput {
        job_title: title.into(),
        company_url: company_url.into(),
        job_url: job_url.into(),
    }
}

#[tokio::test]
async fn create_and_get_roundtrip() {
    let pool = test_pool().await;
    let mut tx = pool.begin_txn().await.unwrap();

    let created = JobMutator::new(&mut tx)
        .create(&input("Engineer", "https://a.co", "https://a.co/j1"))
        .await
        .unwrap();
    assert!(created.id >= 1);
    let age = chrono::Utc::now().naive_utc() - created.job_posting_date;
    assert!(age.num_minutes().abs() < 1);

    let loaded = JobSelector::new(&mut tx)
        .get_by_id(created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.id, created.id);
    assert_eq!(loaded.job_title, "Engineer");
    assert_eq!(loaded.company_url, "https://a.co");
    assert_eq!(loaded.job_url, "https://a.co/j1");
    assert_eq!(loaded.job_posting_date, created.job_posting_date);
}

#[tokio::test]
async fn get_all_returns_every_row_once() {
    let pool = test_pool().await;
    let mut tx = pool.begin_txn().await.unwrap();

    for n in 0..5 {
        JobMutator::new(&mut tx)
            .create(&input(
                &format!("Job {}", n),
                "https://c.co",
                &format!("https://c.co/{}", n),
            ))
            .await
            .unwrap();
    }

    let jobs = JobSelector::new(&mut tx).get_all().await.unwrap();
    assert_eq!(jobs.len(), 5);
    let ids: HashSet<i64> = jobs.iter().map(|j| j.id).collect();
    assert_eq!(ids.len(), 5);
    let mut sorted = jobs.iter().map(|j| j.id).collect::<Vec<_>>();
    sorted.sort();
    assert_eq!(sorted, jobs.iter().map(|j| j.id).collect::<Vec<_>>());
}

#[tokio::test]
async fn update_overwrites_fields_and_keeps_id_and_date() {
    let pool = test_pool().await;
    let mut tx = pool.begin_txn().await.unwrap();

    let created = JobMutator::new(&mut tx)
        .create(&input("Old title", "https://old.co", "https://old.co/j"))
        .await
        .unwrap();

    let updated = JobMutator::new(&mut tx)
        .update(
            created.id,
            &input("New title", "https://new.co", "https://new.co/j"),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.job_title, "New title");
    assert_eq!(updated.job_posting_date, created.job_posting_date);

    let loaded = JobSelector::new(&mut tx)
        .get_by_id(created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.job_title, "New title");
    assert_eq!(loaded.company_url, "https://new.co");
}

#[tokio::test]
async fn delete_returns_snapshot_then_row_is_gone() {
    let pool = test_pool().await;
    let mut tx = pool.begin_txn().await.unwrap();

    let created = JobMutator::new(&mut tx)
        .create(&input("Doomed", "https://d.co", "https://d.co/j"))
        .await
        .unwrap();

    let snapshot = JobMutator::new(&mut tx)
        .delete(created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(snapshot.id, created.id);
    assert_eq!(snapshot.job_title, "Doomed");

    let gone = JobSelector::new(&mut tx)
        .get_by_id(created.id)
        .await
        .unwrap();
    assert!(gone.is_none());
}

#[tokio::test]
async fn missing_ids_yield_none_not_a_fault() {
    let pool = test_pool().await;
    let mut tx = pool.begin_txn().await.unwrap();

    assert!(JobSelector::new(&mut tx)
        .get_by_id(9999)
        .await
        .unwrap()
        .is_none());
    assert!(JobMutator::new(&mut tx)
        .update(9999, &input("t", "c", "j"))
        .await
        .unwrap()
        .is_none());
    assert!(JobMutator::new(&mut tx)
        .delete(9999)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn schema_create_and_drop_are_idempotent() {
    let pool = test_pool().await;
    let mut tx = pool.begin_txn().await.unwrap();

    schema::create(&mut tx).await.unwrap();
    schema::drop(&mut tx).await.unwrap();
    schema::drop(&mut tx).await.unwrap();
    schema::create(&mut tx).await.unwrap();
    tx.commit().await.unwrap();

    let mut tx = pool.begin_txn().await.unwrap();
    let jobs = JobSelector::new(&mut tx).get_all().await.unwrap();
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn seed_loads_json_files_recursively() {
    let pool = test_pool().await;
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("jobs.json"),
        r#"[{"job_title":"X","company_url":"u1","job_url":"u2"}]"#,
    )
    .unwrap();
    let nested = dir.path().join("more");
    std::fs::create_dir(&nested).unwrap();
    std::fs::write(
        nested.join("extra.json"),
        r#"[{"job_title":"Y","company_url":"u3","job_url":"u4"},
            {"job_title":"Z","company_url":"u5","job_url":"u6"}]"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a seed file").unwrap();

    let inserted = seed::load(&pool, dir.path()).await.unwrap();
    assert_eq!(inserted, 3);

    let mut tx = pool.begin_txn().await.unwrap();
    let jobs = JobSelector::new(&mut tx).get_all().await.unwrap();
    assert_eq!(jobs.len(), 3);
    let first = jobs.iter().find(|j| j.job_title == "X").unwrap();
    assert_eq!(first.company_url, "u1");
    assert_eq!(first.job_url, "u2");
}

#[tokio::test]
async fn seed_aborts_whole_run_on_malformed_file() {
    let pool = test_pool().await;
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("a_good.json"),
        r#"[{"job_title":"Good","company_url":"u","job_url":"v"}]"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("z_bad.json"), "{ not json").unwrap();

    assert!(seed::load(&pool, dir.path()).await.is_err());

    let mut tx = pool.begin_txn().await.unwrap();
    let jobs = JobSelector::new(&mut tx).get_all().await.unwrap();
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn seed_rejects_entries_missing_required_keys() {
    let pool = test_pool().await;
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("partial.json"),
        r#"[{"job_title":"No urls here"}]"#,
    )
    .unwrap();

    assert!(seed::load(&pool, dir.path()).await.is_err());
}
