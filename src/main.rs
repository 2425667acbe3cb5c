use anyhow::Result;
use chrono::Utc;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use nexus_journal::analytics::{JournalReport, StatsWindow};
use nexus_journal::config::Config;
use nexus_journal::journal::{validate_entry, JournalStore, JsonFileStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    // Optional window argument: all (default) | week | month
    let args: Vec<String> = std::env::args().collect();
    let window = args
        .get(1)
        .and_then(|s| StatsWindow::from_arg(s))
        .unwrap_or(StatsWindow::All);

    let mut store = JsonFileStore::new(&cfg.journal_file);
    let entries = store.fetch_entries().await?;

    for entry in &entries {
        if let Err(err) = validate_entry(entry) {
            warn!("Entry '{}' fails validation: {}", entry.title, err);
        }
    }

    let report = JournalReport::new(&entries, window, Utc::now());
    report.print_summary();

    Ok(())
}
