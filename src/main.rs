//! arealloc CLI - allocate a master footprint among component layers
//!
//! Usage: arealloc <COMMAND>
//!
//! Commands:
//!   allocate  Split the master among component layers and report hectares
//!   plan      List component sources in processing order
//!   crs       List supported coordinate reference systems

use std::process::ExitCode;

use clap::Parser;

use arealloc::presentation::{Cli, Commands};

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    arealloc::logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Commands::Allocate {
            master,
            selection,
            sort,
            output,
            equal_area_crs,
            assume_crs,
        } => commands::cmd_allocate(
            config,
            &master,
            &selection,
            sort,
            output,
            equal_area_crs,
            assume_crs,
            cli.json,
        ),
        Commands::Plan { master, selection } => {
            commands::cmd_plan(config, master.as_deref(), &selection, cli.json)
        }
        Commands::Crs => commands::cmd_crs(config, cli.json),
    }
}
