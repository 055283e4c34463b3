//! Phonebook CLI Application
//!
//! Command-line front end for the phonebook: list, add, edit, delete and
//! search contacts stored in SQLite.

mod args;
mod cli;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::{error, info};
use phonebook_core::{PhoneBookBuilder, PhoneBookError};
use renderer::TerminalRenderer;

/// Exit code when the contact database itself cannot be used.
const EXIT_STORE_UNAVAILABLE: u8 = 2;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if err
                .downcast_ref::<PhoneBookError>()
                .is_some_and(PhoneBookError::is_fatal)
            {
                error!("Contact database is unavailable");
                ExitCode::from(EXIT_STORE_UNAVAILABLE)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run() -> Result<()> {
    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let phonebook = PhoneBookBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open the contact database")?;

    info!("Phonebook started");

    let mut cli = Cli::new(phonebook, TerminalRenderer::new(!no_color), json);
    let outcome = cli.run(command);
    // Release the connection on the error path too, but report the command
    // error first
    let closed = cli.close();
    outcome?;
    closed
}
