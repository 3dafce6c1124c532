use clap::{Parser, Subcommand};
use contacts_core::ContactId;

#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(version = contacts_core::core_version())]
#[command(about = "Manage a local contact list and move it in and out of text files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all contacts sorted by name
    #[command(alias = "ls")]
    List,

    /// Show contacts whose name or phone contains TEXT (case-insensitive)
    Find { text: String },

    /// Show one contact
    Show { id: ContactId },

    /// Create a contact
    Add {
        name: String,
        /// Digits only
        phone: String,
    },

    /// Replace the name and phone of a contact
    Update {
        id: ContactId,
        name: String,
        /// Digits only
        phone: String,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete { id: ContactId },

    /// Write all contacts to a `<name>, <phone>` text file
    Export { path: String },

    /// Add contacts from a `<name>, <phone>` text file
    Import { path: String },
}
