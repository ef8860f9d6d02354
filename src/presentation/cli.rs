//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --json, --verbose) are inherited by all subcommands
//! - Flags left unset fall back to the config file, then built-in defaults

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OrderConfig;
use crate::domain::value_objects::{NamingPolicy, SortOrder};

/// arealloc - split a master footprint among component layers without double counting
#[derive(Parser, Debug)]
#[command(name = "arealloc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./arealloc.toml, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which component sources are visited, and how they are named and ordered
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Root directory of component layers
    #[arg(short, long, value_name = "DIR")]
    pub components: PathBuf,

    /// How layer names are derived from file paths
    #[arg(long, value_enum)]
    pub naming: Option<NamingPolicy>,

    /// Base processing order
    #[arg(long, value_enum)]
    pub order: Option<OrderConfig>,

    /// Layer names to allocate first, in the given order (repeatable)
    #[arg(long = "priority", value_name = "NAME")]
    pub priority: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Allocate the master footprint among component layers
    Allocate {
        /// Master footprint file
        #[arg(short, long, value_name = "FILE")]
        master: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Order of the printed table
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,

        /// Write the table as CSV to this file
        #[arg(short, long, value_name = "CSV")]
        output: Option<PathBuf>,

        /// Projected equal-area CRS used for geographic inputs
        #[arg(long, value_name = "CODE")]
        equal_area_crs: Option<String>,

        /// CRS for files that declare none
        #[arg(long, value_name = "CODE")]
        assume_crs: Option<String>,
    },

    /// List component sources in processing order without reading geometry
    Plan {
        /// Master footprint file, excluded from the list
        #[arg(short, long, value_name = "FILE")]
        master: Option<PathBuf>,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// List supported and configured coordinate reference systems
    Crs,
}
