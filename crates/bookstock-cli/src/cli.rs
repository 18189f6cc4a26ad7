//! CLI definition using clap

use std::path::PathBuf;

use bookstock_types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookstock")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Library inventory: lookup, stock, borrow and return books")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Store file override
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Seed catalog override
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the store from the seed catalog (skipped if it already exists)
    Init,

    /// Show title, author and year for a book
    Lookup {
        /// Catalog id (ISBN)
        id: String,
    },

    /// Add copies of a book to stock
    Add {
        /// Catalog id (ISBN)
        id: String,

        /// Number of copies to add
        #[arg(long, short = 'q', default_value_t = 1)]
        quantity: u32,
    },

    /// Borrow one copy of a book
    Borrow {
        /// Catalog id (ISBN)
        id: String,
    },

    /// Return one copy of a book
    Return {
        /// Catalog id (ISBN)
        id: String,
    },

    /// List stock for every book
    Stock,

    /// Show or modify configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set store file path
        #[arg(long)]
        set_store: Option<PathBuf>,

        /// Set seed catalog path
        #[arg(long)]
        set_seed: Option<PathBuf>,

        /// Set default output format (json, table)
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default log filter (error, warn, info, debug, trace)
        #[arg(long)]
        set_log_level: Option<String>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
