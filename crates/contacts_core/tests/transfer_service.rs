use contacts_core::db::open_db_in_memory;
use contacts_core::{ContactRepository, ContactService, SqliteContactRepository, TransferService};
use std::path::Path;

fn write_file(path: &Path, content: &str) {
    std::fs::write(path, content).unwrap();
}

#[test]
fn export_of_empty_store_fails_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let transfer = TransferService::new(SqliteContactRepository::new(&conn));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let outcome = transfer.export_all(&path);

    assert!(!outcome.success);
    assert_eq!(outcome.message, "There are no contacts to export.");
    assert!(!path.exists());
}

#[test]
fn export_success_names_destination() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);
    repo.add("John Doe", "1234567890").unwrap();
    repo.add("Jane Smith", "0987654321").unwrap();

    let transfer = TransferService::new(&repo);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let outcome = transfer.export_all(&path);

    assert!(outcome.success, "{}", outcome.message);
    assert_eq!(
        outcome.message,
        format!("Contacts successfully exported to {}", path.display())
    );
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("John Doe, 1234567890"));
    assert!(content.contains("Jane Smith, 0987654321"));
}

#[test]
fn export_to_unwritable_path_is_reported() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);
    repo.add("John Doe", "1234567890").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");
    let outcome = TransferService::new(&repo).export_all(&path);

    assert!(!outcome.success);
    assert!(outcome.message.starts_with("Error exporting contacts: "));
}

#[test]
fn import_reports_count_and_invalid_lines() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");
    write_file(
        &path,
        "John Doe, 1234567890\n    Invalid Line\n    Jane Smith, 0987654321\n    Another Invalid Line",
    );

    let outcome = TransferService::new(&repo).import_all(&path);

    assert!(outcome.success);
    assert!(outcome.message.starts_with("Successfully imported 2 contact(s)"));
    assert!(outcome
        .message
        .contains("Warning: 2 line(s) could not be imported:"));
    assert!(outcome.message.contains("- Line 2: Invalid format"));
    assert!(outcome.message.contains("- Line 4: Invalid format"));
    assert_eq!(repo.list_all().unwrap().len(), 2);
}

#[test]
fn import_caps_diagnostic_preview_at_five() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");

    let mut content = String::from("Valid Person, 5550100\n");
    for index in 0..7 {
        content.push_str(&format!("broken line {index}\n"));
    }
    write_file(&path, &content);

    let outcome = TransferService::new(&repo).import_all(&path);

    assert!(outcome.success);
    let shown = outcome
        .message
        .lines()
        .filter(|line| line.starts_with("- Line "))
        .count();
    assert_eq!(shown, 5);
    assert!(outcome.message.ends_with("- ...and 2 more"));
}

#[test]
fn import_with_only_invalid_lines_fails() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");
    write_file(&path, "Invalid Line 1\n   Invalid Line 2\n   \n");

    let outcome = TransferService::new(&repo).import_all(&path);

    assert!(!outcome.success);
    assert_eq!(
        outcome.message,
        "No contacts were imported. 2 line(s) had invalid format."
    );
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn import_of_blank_file_reports_nothing_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");
    write_file(&path, "\n   \n");

    let outcome = TransferService::new(&repo).import_all(&path);

    assert!(!outcome.success);
    assert_eq!(outcome.message, "No contacts were found in the file.");
}

#[test]
fn import_from_missing_file_is_reported() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);
    let dir = tempfile::tempdir().unwrap();

    let outcome = TransferService::new(&repo).import_all(dir.path().join("nope.txt"));

    assert!(!outcome.success);
    assert!(outcome.message.starts_with("Error importing contacts: "));
}

#[test]
fn export_import_round_trip_through_services() {
    let source_conn = open_db_in_memory().unwrap();
    let source = ContactService::new(SqliteContactRepository::new(&source_conn));
    source.add_contact("John Doe", "1234567890").unwrap();
    source.add_contact("Jane Smith", "0987654321").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round.txt");
    let exported = TransferService::new(source.repository()).export_all(&path);
    assert!(exported.success, "{}", exported.message);

    let target_conn = open_db_in_memory().unwrap();
    let target = ContactService::new(SqliteContactRepository::new(&target_conn));
    let imported = TransferService::new(target.repository()).import_all(&path);
    assert!(imported.success, "{}", imported.message);

    let strip_ids = |contacts: Vec<contacts_core::Contact>| {
        contacts
            .into_iter()
            .map(|contact| (contact.name, contact.phone))
            .collect::<Vec<_>>()
    };
    assert_eq!(
        strip_ids(target.list_contacts().unwrap()),
        strip_ids(source.list_contacts().unwrap())
    );
}
