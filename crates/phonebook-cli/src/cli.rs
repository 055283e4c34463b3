//! Command handlers and their clap argument structs.
//!
//! Each argument struct converts into the matching core parameter type from
//! [`phonebook_core::params`], so clap attributes never leak into the core.
//! [`Cli`] runs one command against the phonebook and prints the outcome,
//! either as markdown through the [`TerminalRenderer`] or as JSON.

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use log::debug;
use phonebook_core::{
    params::{AddContact, DeleteContact, EditContact, SearchContacts, Target, UpdateNumber},
    PhoneBook,
};
use serde::Serialize;

use crate::{args::Commands, renderer::TerminalRenderer};

/// Add a contact
///
/// Numbers can be given as separate arguments or as one comma separated
/// list.
#[derive(Args)]
pub struct AddArgs {
    /// Full name of the person
    pub name: String,
    /// Phone numbers to store for this person
    pub numbers: Vec<String>,
    /// Attach the numbers to an existing contact with exactly this name
    /// instead of adding a second one
    #[arg(long)]
    pub merge: bool,
}

impl From<AddArgs> for AddContact {
    fn from(val: AddArgs) -> Self {
        AddContact {
            name: val.name,
            numbers: val.numbers,
            merge: val.merge,
        }
    }
}

/// Edit a contact
///
/// Picks the contact by exact name, or by `--id` when several people share
/// the name.
#[derive(Args)]
pub struct EditArgs {
    /// Exact name of the contact to edit
    #[arg(required_unless_present = "id")]
    pub name: Option<String>,
    /// ID of the contact to edit
    #[arg(long)]
    pub id: Option<u64>,
    /// New name
    #[arg(long)]
    pub rename: Option<String>,
    /// Replace all numbers with this comma separated list
    #[arg(long, value_delimiter = ',')]
    pub numbers: Option<Vec<String>>,
}

impl From<EditArgs> for EditContact {
    fn from(val: EditArgs) -> Self {
        EditContact {
            target: Target::from_parts(val.id, val.name.unwrap_or_default()),
            new_name: val.rename,
            numbers: val.numbers,
        }
    }
}

/// Change one number of a contact in place
#[derive(Args)]
#[command(group(ArgGroup::new("who").required(true).args(["name", "id"])))]
pub struct RenumberArgs {
    /// Number as currently stored
    pub old: String,
    /// Replacement number
    pub new: String,
    /// Exact name of the contact
    #[arg(long)]
    pub name: Option<String>,
    /// ID of the contact
    #[arg(long)]
    pub id: Option<u64>,
}

impl From<RenumberArgs> for UpdateNumber {
    fn from(val: RenumberArgs) -> Self {
        UpdateNumber {
            target: Target::from_parts(val.id, val.name.unwrap_or_default()),
            old: val.old,
            new: val.new,
        }
    }
}

/// Delete a contact and all of its numbers
#[derive(Args)]
pub struct DeleteArgs {
    /// Exact name of the contact to delete
    #[arg(required_unless_present = "id")]
    pub name: Option<String>,
    /// ID of the contact to delete
    #[arg(long)]
    pub id: Option<u64>,
}

impl From<DeleteArgs> for DeleteContact {
    fn from(val: DeleteArgs) -> Self {
        DeleteContact {
            target: Target::from_parts(val.id, val.name.unwrap_or_default()),
        }
    }
}

/// Search contacts
#[derive(Args)]
pub struct SearchArgs {
    /// Part of a name (any case) or of a phone number
    pub text: String,
}

impl From<SearchArgs> for SearchContacts {
    fn from(val: SearchArgs) -> Self {
        SearchContacts { text: val.text }
    }
}

/// Runs commands against a phonebook and prints their results.
pub struct Cli {
    phonebook: PhoneBook,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(phonebook: PhoneBook, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            phonebook,
            renderer,
            json,
        }
    }

    /// Runs one command. No command lists every contact.
    pub fn run(&mut self, command: Option<Commands>) -> Result<()> {
        match command {
            None | Some(Commands::List) => self.list(),
            Some(Commands::Add(args)) => self.add(&args.into()),
            Some(Commands::Edit(args)) => self.edit(&args.into()),
            Some(Commands::Renumber(args)) => self.renumber(&args.into()),
            Some(Commands::Delete(args)) => self.delete(&args.into()),
            Some(Commands::Search(args)) => self.search(&args.into()),
        }
    }

    /// Releases the database connection.
    pub fn close(self) -> Result<()> {
        self.phonebook
            .close()
            .context("Failed to close the contact database")
    }

    fn list(&self) -> Result<()> {
        let contacts = self
            .phonebook
            .list_contacts()
            .context("Failed to list contacts")?;

        if self.json {
            return self.print_json(&contacts);
        }
        self.renderer.render(&format!("# Contacts\n\n{contacts}"))
    }

    fn add(&mut self, params: &AddContact) -> Result<()> {
        debug!("add: {params:?}");
        let result = self
            .phonebook
            .add_contact(params)
            .context("Failed to add contact")?;

        if self.json {
            return self.print_json(&result.resource);
        }
        self.renderer.render(&result.to_string())?;
        self.render_listing()
    }

    fn edit(&mut self, params: &EditContact) -> Result<()> {
        debug!("edit: {params:?}");
        let result = self
            .phonebook
            .update_contact(params)
            .context("Failed to edit contact")?;

        if self.json {
            return self.print_json(&result.resource);
        }
        self.renderer.render(&result.to_string())?;
        self.render_listing()
    }

    fn renumber(&mut self, params: &UpdateNumber) -> Result<()> {
        debug!("renumber: {params:?}");
        let result = self
            .phonebook
            .update_number(params)
            .context("Failed to change number")?;

        if self.json {
            return self.print_json(&result.resource);
        }
        self.renderer.render(&result.to_string())?;
        self.render_listing()
    }

    fn delete(&mut self, params: &DeleteContact) -> Result<()> {
        debug!("delete: {params:?}");
        let result = self
            .phonebook
            .remove_contact(params)
            .context("Failed to delete contact")?;

        if self.json {
            return self.print_json(&result.resource);
        }
        self.renderer.render(&result.to_string())?;
        self.render_listing()
    }

    fn search(&self, params: &SearchContacts) -> Result<()> {
        debug!("search: {params:?}");
        let contacts = self
            .phonebook
            .search_contacts(params)
            .context("Failed to search contacts")?;

        if self.json {
            return self.print_json(&contacts);
        }
        self.renderer.render(&format!(
            "# Search results for '{}'\n\n{contacts}",
            params.text.trim()
        ))
    }

    /// Re-renders the whole book after a change.
    fn render_listing(&self) -> Result<()> {
        let contacts = self
            .phonebook
            .list_contacts()
            .context("Failed to list contacts")?;
        self.renderer.render(&format!("\n# Contacts\n\n{contacts}"))
    }

    fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{json}");
        Ok(())
    }
}
