mod catalog;
mod core;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::core::config;

#[derive(Parser)]
#[command(name = "pausenknopf", about = "Begleiter für Momente, die gerade viel sind")]
struct Args {
    /// Catalog JSON file to load instead of the embedded one
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Render static frames (no pulse, no breathing animation)
    #[arg(long)]
    reduced_motion: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to pausenknopf.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("pausenknopf.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    // Startup failures get reported on stderr before the terminal goes
    // into the alternate screen, so the message stays visible.
    let file_config = match config::load_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("Konfiguration konnte nicht geladen werden: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.catalog.as_deref(), args.reduced_motion);

    let catalog = match &resolved.catalog_path {
        Some(path) => Catalog::load_from_path(path),
        None => Catalog::load_default(),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Katalog konnte nicht geladen werden: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Pausenknopf starting up ({} Karten, data dir: {})",
        catalog.cards().len(),
        resolved.data_dir.display()
    );

    tui::run(resolved, catalog)
}
