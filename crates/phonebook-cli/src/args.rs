use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AddArgs, DeleteArgs, EditArgs, RenumberArgs, SearchArgs};

/// Command-line phone book
///
/// Keeps people and their phone numbers in a local SQLite database. Run
/// without a subcommand to list every contact.
#[derive(Parser)]
#[command(version, about, name = "phonebook")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/phonebook/phonebook.db
    #[arg(long, global = true, env = "PHONEBOOK_DB")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands, one per phone book action
#[derive(Subcommand)]
pub enum Commands {
    /// Show all contacts
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add a contact
    #[command(alias = "a")]
    Add(AddArgs),
    /// Rename a contact and/or replace its numbers
    #[command(alias = "e")]
    Edit(EditArgs),
    /// Change one number of a contact
    #[command(alias = "n")]
    Renumber(RenumberArgs),
    /// Delete a contact and its numbers
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
    /// Find contacts by part of a name or number
    #[command(aliases = ["f", "s"])]
    Search(SearchArgs),
}
