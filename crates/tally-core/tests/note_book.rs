use chrono::{TimeZone, Utc};
use tally_core::domain::notes::NoteBook;
use tally_core::fs::write_export;
use tally_core::TallyError;

#[test]
fn test_search_matches_title_or_content() {
    let mut book = NoteBook::new();
    let t = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    book.create_at("Groceries", "Buy MILK", t).expect("note should be created");
    book.create_at("Milk run", "tomorrow", t).expect("note should be created");
    book.create_at("Gym", "legs", t).expect("note should be created");

    let found = book.search("milk").expect("two notes mention milk");
    assert_eq!(found.len(), 2);

    assert_eq!(
        book.search(" ").unwrap_err(),
        TallyError::EmptyArgument { field: "search term" }
    );
    assert!(matches!(book.search("yoga"), Err(TallyError::NoMatches(_))));
}

#[test]
fn test_empty_book_search_has_no_matches() {
    let book = NoteBook::new();
    assert!(matches!(book.search("anything"), Err(TallyError::NoMatches(_))));
}

#[test]
fn test_delete_and_toggle_missing_ids() {
    let mut book = NoteBook::new();
    book.create("Title", "Body").expect("note should be created");
    assert!(book.delete(7).unwrap_err().is_not_found());
    assert!(book.toggle_important(7).unwrap_err().is_not_found());
    assert_eq!(book.len(), 1);

    book.delete(1).expect("note 1 exists");
    let next = book.create("Another", "Body").expect("note should be created");
    assert_eq!(next.id, 2);
}

#[test]
fn test_export_writes_file() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let mut book = NoteBook::new();
    let t = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    book.create_at("Groceries", "Buy milk", t).expect("note should be created");

    let text = book.export_text(t).expect("book is not empty");
    let path = write_export(dir.path(), "notes_export.txt", &text).expect("export should succeed");

    let on_disk = std::fs::read_to_string(path).expect("export should be readable");
    assert_eq!(on_disk, text);
    assert!(on_disk.contains("Groceries"));
}
