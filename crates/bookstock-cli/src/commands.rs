//! Command handlers

use std::fmt::Display;
use std::path::{Path, PathBuf};

use bookstock_app::app::InventoryService;
use bookstock_app::config::Config;
use bookstock_app::repository::open_inventory;
use bookstock_domain::repository::CatalogRepository;
use bookstock_infra::persistence::FileCatalogRepository;
use bookstock_types::{OutputFormat, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::output::{output_not_found, output_result, output_stock};

pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    init_logging(&config.log_level, cli.verbose);

    // Override from CLI args
    if let Some(ref store) = cli.store {
        config.store_path = Some(store.clone());
    }
    if let Some(ref seed) = cli.seed {
        config.seed_path = Some(seed.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Init => cmd_init(&config),

        Commands::Lookup { id } => {
            let service = open_seeded(&config)?;
            report(output_format, &id, service.lookup(&id))
        }

        Commands::Add { id, quantity } => {
            let service = open_seeded(&config)?;
            report(output_format, &id, service.add_stock(&id, quantity))
        }

        Commands::Borrow { id } => {
            let service = open_seeded(&config)?;
            report(output_format, &id, service.borrow(&id))
        }

        Commands::Return { id } => {
            let service = open_seeded(&config)?;
            report(output_format, &id, service.return_copy(&id))
        }

        Commands::Stock => {
            let service = open_seeded(&config)?;
            output_stock(output_format, &service.list_stock()?)
        }

        Commands::Config {
            show,
            set_store,
            set_seed,
            set_output,
            set_log_level,
            reset,
        } => cmd_config(show, set_store, set_seed, set_output, set_log_level, reset),
    }
}

fn init_logging(log_level: &str, verbose: bool) {
    let default_filter = if verbose { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

/// Open the configured store, seeding it on first use
fn open_seeded(config: &Config) -> Result<InventoryService<FileCatalogRepository>> {
    let service = open_inventory(config)?;
    service.ensure_initialized(&config.seed_path())?;
    Ok(service)
}

/// Print an operation result; an unknown id is a message, not a failure
fn report<T: Serialize + Display>(
    output_format: OutputFormat,
    id: &str,
    result: Result<T>,
) -> Result<()> {
    match result {
        Ok(value) => output_result(output_format, &value),
        Err(e) if e.is_not_found() => output_not_found(output_format, id),
        Err(e) => Err(e),
    }
}

fn cmd_init(config: &Config) -> Result<()> {
    let service = open_inventory(config)?;
    let store_path = service.repository().store_path().to_path_buf();

    if service.repository().exists() {
        println!("Store already exists at {}; seed ignored", store_path.display());
        return Ok(());
    }

    let seed_path = config.seed_path();
    let records = service.initialize_from_seed_file(&seed_path)?;
    println!(
        "Initialized {} with {} books from {}",
        store_path.display(),
        records.len(),
        display_path(&seed_path)
    );
    Ok(())
}

fn display_path(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

fn cmd_config(
    show: bool,
    set_store: Option<PathBuf>,
    set_seed: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_log_level: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(store) = set_store {
        config.store_path = Some(store);
        modified = true;
    }

    if let Some(seed) = set_seed {
        config.seed_path = Some(seed);
        modified = true;
    }

    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
    }

    if let Some(level) = set_log_level {
        config.log_level = level;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
