//! Command implementations for the geologic toolbox CLI
//!
//! Each subcommand lives in its own module:
//! - `import`: schema-sniffing import of well location and marker files
//! - `clar`: orientation of a single triangle in Clar notation

pub mod clar;
pub mod import;
pub mod shared;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch to the handler of the given subcommand
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Import(import_args) => import::run_import(import_args).map(|_| ()),
        Commands::Clar(clar_args) => clar::run_clar(clar_args).map(|_| ()),
    }
}
