//! Command-line front end for the contacts store.
//!
//! # Responsibility
//! - Stand in for the windowed UI: run one command, validate entry input,
//!   call the core services and print the result.
//! - Keep all storage and parsing inside `contacts_core`.

mod args;
mod config;

use args::{Cli, Command};
use clap::Parser;
use config::AppConfig;
use contacts_core::db::open_db;
use contacts_core::{
    init_logging, validate_contact_input, Contact, ContactService, Outcome,
    SqliteContactRepository, StorageError, TransferService,
};
use log::warn;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::from_env();

    if let Err(err) = init_cli_logging(&config) {
        eprintln!("warning: logging disabled: {err}");
    }

    match run(&config, cli.command) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            warn!("event=cli_command module=cli status=error");
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn init_cli_logging(config: &AppConfig) -> Result<(), String> {
    init_logging(&config.log_level, &config.log_dir)
}

fn run(config: &AppConfig, command: Command) -> Result<String, String> {
    let conn = open_db(&config.db_path).map_err(|err| format!("Could not open contacts: {err}"))?;
    let service = ContactService::new(SqliteContactRepository::new(&conn));
    let storage_err = |err: StorageError| format!("Storage error: {err}");

    match command {
        Command::List => Ok(render_table(&service.list_contacts().map_err(storage_err)?)),
        Command::Find { text } => Ok(render_table(
            &service.filter_contacts(&text).map_err(storage_err)?,
        )),
        Command::Show { id } => match service.get_contact(id).map_err(storage_err)? {
            Some(contact) => Ok(render_table(&[contact])),
            None => Err(format!("Contact {id} does not exist.")),
        },
        Command::Add { name, phone } => {
            let input = validate_contact_input(&name, &phone).map_err(|err| err.to_string())?;
            service
                .add_contact(&input.name, &input.phone)
                .map_err(storage_err)?;
            Ok(format!("Contact '{}' created successfully.", input.name))
        }
        Command::Update { id, name, phone } => {
            let input = validate_contact_input(&name, &phone).map_err(|err| err.to_string())?;
            if service
                .update_contact(id, &input.name, &input.phone)
                .map_err(storage_err)?
            {
                Ok(format!("Contact '{}' updated successfully.", input.name))
            } else {
                Err("The selected contact no longer exists.".to_string())
            }
        }
        Command::Delete { id } => {
            let Some(contact) = service.get_contact(id).map_err(storage_err)? else {
                return Err("The selected contact no longer exists.".to_string());
            };
            if service.delete_contact(id).map_err(storage_err)? {
                Ok(format!("Contact '{}' deleted successfully.", contact.name))
            } else {
                Err("Could not delete the contact.".to_string())
            }
        }
        Command::Export { path } => {
            outcome_to_result(TransferService::new(service.repository()).export_all(&path))
        }
        Command::Import { path } => {
            outcome_to_result(TransferService::new(service.repository()).import_all(&path))
        }
    }
}

fn outcome_to_result(outcome: Outcome) -> Result<String, String> {
    if outcome.success {
        Ok(outcome.message)
    } else {
        Err(outcome.message)
    }
}

fn render_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts.".to_string();
    }

    let name_width = contacts
        .iter()
        .map(|contact| contact.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    let mut out = format!("{:>6}  {:<name_width$}  PHONE", "ID", "NAME");
    for contact in contacts {
        let id = contact.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        out.push_str(&format!(
            "\n{id:>6}  {:<name_width$}  {}",
            contact.name, contact.phone
        ));
    }
    out
}
