use std::path::Path;

use crate::{
    pkg::internal::{adaptors::jobs::schema, seed},
    pkg::server::state::{db_pool, GetTxn},
    prelude::Result,
};

pub async fn create() -> Result<()> {
    let pool = db_pool()?;
    let mut tx = pool.begin_txn().await?;
    schema::create(&mut tx).await?;
    tx.commit().await?;
    println!("Database created!");
    Ok(())
}

pub async fn drop() -> Result<()> {
    let pool = db_pool()?;
    let mut tx = pool.begin_txn().await?;
    schema::drop(&mut tx).await?;
    tx.commit().await?;
    println!("Database dropped!");
    Ok(())
}

pub async fn seed(dir: &Path) -> Result<()> {
    let pool = db_pool()?;
    let inserted = seed::load(&pool, dir).await?;
    println!("Database seeded! ({} jobs)", inserted);
    Ok(())
}
