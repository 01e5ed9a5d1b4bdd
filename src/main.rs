use clap::Parser;
use registrar::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Registrar - Academic Registry Reporter");
    println!("======================================");
    println!();
    println!("Build an in-memory academic registry from delimited record files and");
    println!("report per-student, per-instructor, and per-department summaries.");
    println!();
    println!("USAGE:");
    println!("    registrar <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report      Build the registry and print the summary report");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Report on the record files in ./stevens:");
    println!("    registrar report stevens");
    println!();
    println!("    # Emit the summaries as JSON with custom source shapes:");
    println!("    registrar report stevens --config registrar.toml --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    registrar <COMMAND> --help");
}
