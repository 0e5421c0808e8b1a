//! Build script for biblio-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("biblio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage library book circulation")
        .long_about("Command-line tool for managing users, books, and circulation in a lending library")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("BIBLIO_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("BIBLIO_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("BIBLIO_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize the biblio data directory and database")
                .long_about("Set up the biblio database and configuration"),
            Command::new("add-user")
                .about("Register a library user")
                .long_about("Register a user with a name, contact, and membership status"),
            Command::new("add-book")
                .about("Add a book to the catalog")
                .long_about("Add a book with a title and author; new books start out available"),
            Command::new("list-books")
                .about("List books in the catalog")
                .long_about("Display catalog entries, optionally restricted to available books"),
            Command::new("reserve")
                .about("Place a hold on a book")
                .long_about("Record a reservation for a user without issuing the book"),
            Command::new("checkout")
                .about("Check a book out to a user")
                .long_about("Issue a book and compute its due date from the loan period"),
            Command::new("return")
                .about("Process a book return")
                .long_about("Close a checkout, assess late and damage fees, and restore availability"),
            Command::new("extend")
                .about("Extend the due date of a checkout")
                .long_about("Push the due date forward, provided the loan is not yet overdue"),
            Command::new("overdue-report")
                .about("List overdue checkouts")
                .long_about("Display open checkouts whose due date has passed"),
            Command::new("inventory-report")
                .about("List the catalog with availability")
                .long_about("Display every book along with its availability flag"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main biblio.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("biblio.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
