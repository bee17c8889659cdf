use crate::{config::Config, gateways};
use anyhow::Result;
use clap::{Parser, Subcommand};
use geofix_application::prelude as flows;
use geofix_core::entities::{AddressId, Drive};
use geofix_db_sqlite as sqlite;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "geofix", version)]
#[command(about = "Backfill missing start and end addresses of recorded drives")]
pub struct Args {
    /// Configuration file (default: geofix.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// URL to the database, overrides DATABASE_URL
    #[arg(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Store missing addresses and link them to all broken drives
    #[default]
    Reconcile,
    /// Only store missing addresses of broken drives
    EnsureAddresses,
    /// Only link stored addresses to broken drives
    Relink,
    /// List all broken drives without modifying them
    Broken,
}

pub fn run(args: Args) -> Result<()> {
    let Args {
        config,
        db_url,
        command,
    } = args;
    let mut cfg = Config::try_load_from_file_or_default(config.as_deref())?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections =
        sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match command.unwrap_or_default() {
        Command::Reconcile => {
            let geocoder = gateways::geocoding_gateway(&cfg.geocoding)?;
            let summary = flows::reconcile(&connections, &geocoder)?;
            log::info!("Ensured addresses: {}", summary.ensured);
            log::info!("Relinked drives: {}", summary.relinked);
        }
        Command::EnsureAddresses => {
            let geocoder = gateways::geocoding_gateway(&cfg.geocoding)?;
            let summary = flows::ensure_drive_addresses(&connections, &geocoder)?;
            log::info!("Ensured addresses: {summary}");
        }
        Command::Relink => {
            let summary = flows::relink_drives(&connections)?;
            log::info!("Relinked drives: {summary}");
        }
        Command::Broken => {
            let drives = flows::broken_drives(&connections)?;
            log::info!("Found {} broken drive(s)", drives.len());
            for drive in &drives {
                println!("{}", format_drive(drive));
            }
        }
    }
    Ok(())
}

fn format_drive(drive: &Drive) -> String {
    let Drive {
        id,
        start_point_id,
        end_point_id,
        start_address_id,
        end_address_id,
    } = drive;
    format!(
        "drive {id}: start point {start_point_id} -> {}, end point {end_point_id} -> {}",
        format_address_id(*start_address_id),
        format_address_id(*end_address_id),
    )
}

fn format_address_id(id: Option<AddressId>) -> String {
    id.map(|id| format!("address {id}"))
        .unwrap_or_else(|| "missing".to_string())
}
