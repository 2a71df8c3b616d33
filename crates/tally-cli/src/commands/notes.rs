use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::Utc;
use tally_core::domain::notes::{Note, NoteBook};
use tally_core::{RecordId, Result as TallyResult};

use crate::commands::{export, run_menu};
use crate::console::Console;
use crate::ui::format::{flag, format_datetime, single_line, truncate};
use crate::ui::{table, Column};

pub const EXPORT_FILE: &str = "notes_export.txt";

const OPTIONS: &[&str] = &[
    "Create note",
    "Show all notes (by date)",
    "Search notes",
    "Edit note",
    "Toggle important",
    "Delete note",
    "Export to file",
];

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, export_dir: &Path) -> io::Result<()> {
    let mut book = NoteBook::new();

    run_menu(console, "Notes", OPTIONS, |choice, console| match choice {
        1 => {
            let title = console.prompt_text("Title: ")?;
            let content = console.prompt_text("Content: ")?;
            let outcome = book.create(&title, &content);
            console.show("Create note", &outcome)
        }
        2 => list(console, "Notes", book.by_creation()),
        3 => {
            let term = console.prompt_text("Search term: ")?;
            let title = format!("Search ('{}')", term);
            console.show(&title, &book.search(&term))
        }
        4 => {
            let Some(id) = console.prompt_number::<RecordId>("Note ID: ")? else {
                return console.abort("note ID");
            };
            let title = console.prompt_text("New title (blank keeps current): ")?;
            let content = console.prompt_text("New content (blank keeps current): ")?;
            let outcome = book.edit(id, &title, &content);
            console.show("Edit note", &outcome)
        }
        5 => {
            let Some(id) = console.prompt_number::<RecordId>("Note ID: ")? else {
                return console.abort("note ID");
            };
            let outcome = book.toggle_important(id).map(|on| {
                if on {
                    format!("Note {} marked as important", id)
                } else {
                    format!("Note {} is no longer important", id)
                }
            });
            console.show("Toggle important", &outcome)
        }
        6 => {
            let Some(id) = console.prompt_number::<RecordId>("Note ID: ")? else {
                return console.abort("note ID");
            };
            let outcome = book.delete(id).map(|n| format!("Deleted '{}'", n.title));
            console.show("Delete note", &outcome)
        }
        _ => export(
            console,
            "Export notes",
            export_dir,
            EXPORT_FILE,
            book.export_text(Utc::now()),
        ),
    })
}

fn list<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    title: &str,
    notes: Vec<&Note>,
) -> io::Result<()> {
    if notes.is_empty() {
        return console.info("No notes yet");
    }
    if !console.ui().mode.is_pretty() {
        let outcome: TallyResult<Vec<&Note>> = Ok(notes);
        return console.show(title, &outcome);
    }
    let unicode = console.ui().unicode;
    let rows: Vec<Vec<String>> = notes
        .iter()
        .map(|n| {
            vec![
                n.id.to_string(),
                format_datetime(&n.created_at),
                truncate(&n.title, 24),
                truncate(&single_line(&n.content), 40),
                flag(n.important, unicode).to_string(),
            ]
        })
        .collect();
    let columns = [
        Column::new("ID"),
        Column::new("Created"),
        Column::new("Title"),
        Column::new("Content"),
        Column::new("!"),
    ];
    let rendered = table(console.ui(), &columns, &rows);
    console.say(&rendered)
}
