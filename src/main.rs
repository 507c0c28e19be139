use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::DateTime;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lease2zone::{render, Error, LeaseStore, Result};

#[derive(Parser)]
#[command(name = "lease2zone")]
#[command(
    author,
    version,
    about = "Convert a udhcpd lease file into forward and reverse zone fragments",
    long_about = None
)]
struct Cli {
    /// Binary lease file written by the DHCP server
    leases: PathBuf,

    /// Output file for forward A records
    forward: PathBuf,

    /// Output file for reverse PTR records
    reverse: PathBuf,

    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = LeaseStore::load(&cli.leases)?;

    let write_time = store.write_time();
    match DateTime::from_timestamp(write_time, 0) {
        Some(updated_at) => info!(
            "Lease file last updated at {} ({}). Found {} leases",
            write_time,
            updated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            store.record_count()
        ),
        None => info!(
            "Lease file last updated at {}. Found {} leases",
            write_time,
            store.record_count()
        ),
    }

    info!("Writing forward names to {}", cli.forward.display());
    let mut forward = open_sink(&cli.forward)?;

    info!("Writing reverse names to {}", cli.reverse.display());
    let mut reverse = open_sink(&cli.reverse)?;

    render(&store, &mut forward, &mut reverse)?;

    forward.flush()?;
    reverse.flush()?;

    Ok(())
}

fn open_sink(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| Error::SinkOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}
