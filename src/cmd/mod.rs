use std::path::PathBuf;

use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod db;

#[derive(Parser)]
#[command(about = "job posting CRUD service")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    Listen,
    DbCreate,
    DbDrop,
    DbSeed {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::DbCreate) => {
            db::create().await?;
        }
        Some(SubCommandType::DbDrop) => {
            db::drop().await?;
        }
        Some(SubCommandType::DbSeed { dir }) => {
            db::seed(&dir).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
