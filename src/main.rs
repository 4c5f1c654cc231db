use anyhow::Context;
use clap::Parser;
use geologic_toolbox::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let result = commands::run(command).context("geologic-toolbox failed");

    if let Err(error) = result {
        // Print the full cause chain to stderr and exit with error code
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Geologic Toolbox - Well Import and Triangle Orientation");
    println!("=======================================================");
    println!();
    println!("Import whitespace-separated well location and marker exports and");
    println!("compute dip, azimuth and Clar notation of triangles.");
    println!();
    println!("USAGE:");
    println!("    geologic-toolbox <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    import      Import well location and marker files");
    println!("    clar        Compute the orientation of a triangle");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Import locations first, then markers, into one repository:");
    println!("    geologic-toolbox import wells.txt markers.txt --detailed");
    println!();
    println!("    # Import every export below a directory and print JSON:");
    println!("    geologic-toolbox import data/ --output-format json");
    println!();
    println!("    # Clar notation of the demonstration triangle:");
    println!("    geologic-toolbox clar");
    println!();
    println!("    # Clar notation of a custom triangle in gon:");
    println!("    geologic-toolbox clar --p1 0,0,0 --p2 100,0,100 --p3 0,100,100 --unit gon");
    println!();
    println!("For detailed help on any command, use:");
    println!("    geologic-toolbox <COMMAND> --help");
}
