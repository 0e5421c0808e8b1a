//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddBookCommand, AddUserCommand, CheckoutCommand, ExtendCommand, InitCommand,
    InventoryReportCommand, ListBooksCommand, OverdueReportCommand, ReserveCommand, ReturnCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing library book circulation.
#[derive(Parser)]
#[command(name = "biblio")]
#[command(version, about = "Manage library book circulation", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "BIBLIO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "BIBLIO_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "BIBLIO_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the biblio data directory and database
    Init(InitCommand),

    /// Register a library user
    AddUser(AddUserCommand),

    /// Add a book to the catalog
    AddBook(AddBookCommand),

    /// List books in the catalog
    ListBooks(ListBooksCommand),

    /// Place a hold on a book
    Reserve(ReserveCommand),

    /// Check a book out to a user
    Checkout(CheckoutCommand),

    /// Process a book return
    #[command(name = "return")]
    Return(ReturnCommand),

    /// Extend the due date of a checkout
    Extend(ExtendCommand),

    /// List overdue checkouts
    OverdueReport(OverdueReportCommand),

    /// List the catalog with availability
    InventoryReport(InventoryReportCommand),
}
