use std::io::{self, BufRead, Write};
use std::path::Path;

use tally_core::domain::contacts::{Contact, ContactBook};
use tally_core::{RecordId, Result as TallyResult};

use crate::commands::{export, run_menu};
use crate::console::Console;
use crate::ui::format::{flag, truncate};
use crate::ui::{table, Column};

pub const EXPORT_FILE: &str = "contacts_export.txt";

const OPTIONS: &[&str] = &[
    "Create contact",
    "List contacts",
    "Search by name",
    "Show favorites",
    "Toggle favorite",
    "Edit contact",
    "Delete contact",
    "Export to file",
];

pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    export_dir: &Path,
    empty: bool,
) -> io::Result<()> {
    let mut book = if empty {
        ContactBook::new()
    } else {
        ContactBook::with_demo_data()
    };

    run_menu(console, "Contact manager", OPTIONS, |choice, console| match choice {
        1 => {
            let name = console.prompt_text("Name: ")?;
            let phone = console.prompt_text("Phone (9 digits): ")?;
            let email = console.prompt_text("Email: ")?;
            let outcome = book.create(&name, &phone, &email);
            console.show("Create contact", &outcome)
        }
        2 => list(console, "Contacts", book.sorted_by_name()),
        3 => {
            let query = console.prompt_text("Name to search: ")?;
            list(console, "Search results", book.search_by_name(&query))
        }
        4 => list(console, "Favorites", book.favorites()),
        5 => {
            let Some(id) = console.prompt_number::<RecordId>("Contact ID: ")? else {
                return console.abort("contact ID");
            };
            let outcome = book.toggle_favorite(id).map(|on| {
                if on {
                    format!("Contact {} marked as favorite", id)
                } else {
                    format!("Contact {} removed from favorites", id)
                }
            });
            console.show("Toggle favorite", &outcome)
        }
        6 => {
            let Some(id) = console.prompt_number::<RecordId>("Contact ID: ")? else {
                return console.abort("contact ID");
            };
            let name = console.prompt_text("New name: ")?;
            let phone = console.prompt_text("New phone: ")?;
            let email = console.prompt_text("New email: ")?;
            let outcome = book.edit(id, &name, &phone, &email);
            console.show("Edit contact", &outcome)
        }
        7 => {
            let Some(id) = console.prompt_number::<RecordId>("Contact ID: ")? else {
                return console.abort("contact ID");
            };
            let outcome = book.delete(id).map(|c| format!("Deleted {}", c.name));
            console.show("Delete contact", &outcome)
        }
        _ => export(
            console,
            "Export contacts",
            export_dir,
            EXPORT_FILE,
            Ok(book.export_text()),
        ),
    })
}

fn list<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    title: &str,
    contacts: Vec<&Contact>,
) -> io::Result<()> {
    if contacts.is_empty() {
        return console.info(&format!("{}: no contacts", title));
    }
    if !console.ui().mode.is_pretty() {
        let outcome: TallyResult<Vec<&Contact>> = Ok(contacts);
        return console.show(title, &outcome);
    }

    let unicode = console.ui().unicode;
    let rows: Vec<Vec<String>> = contacts
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                truncate(&c.name, 30),
                c.phone.clone(),
                truncate(&c.email, 30),
                flag(c.favorite, unicode).to_string(),
            ]
        })
        .collect();
    let columns = [
        Column::new("ID"),
        Column::new("Name"),
        Column::new("Phone"),
        Column::new("Email"),
        Column::new("Fav"),
    ];
    let rendered = table(console.ui(), &columns, &rows);
    console.say(&rendered)
}
