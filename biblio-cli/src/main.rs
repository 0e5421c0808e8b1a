//! Main entry point for the biblio CLI.
//!
//! This is the command-line interface for the biblio circulation system.
//! It provides commands for managing a lending library:
//! - `add-user` / `add-book`: register users and catalog books
//! - `reserve`: place a hold on a book
//! - `checkout`: issue a book to a user
//! - `return`: process a return and assess fees
//! - `extend`: push a due date forward
//! - `overdue-report` / `inventory-report`: circulation reports

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = biblio::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::AddUser(cmd) => cmd.execute(&global),
        cli::Command::AddBook(cmd) => cmd.execute(&global),
        cli::Command::ListBooks(cmd) => cmd.execute(&global),
        cli::Command::Reserve(cmd) => cmd.execute(&global),
        cli::Command::Checkout(cmd) => cmd.execute(&global),
        cli::Command::Return(cmd) => cmd.execute(&global),
        cli::Command::Extend(cmd) => cmd.execute(&global),
        cli::Command::OverdueReport(cmd) => cmd.execute(&global),
        cli::Command::InventoryReport(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
