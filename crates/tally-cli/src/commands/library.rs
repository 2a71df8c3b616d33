use std::io::{self, BufRead, Write};

use tally_core::domain::library::{Book, Catalog};
use tally_core::Result as TallyResult;

use crate::commands::run_menu;
use crate::console::Console;
use crate::ui::format::truncate;
use crate::ui::{table, Column};

const OPTIONS: &[&str] = &[
    "Search by author",
    "Search by title",
    "Search by year range",
    "Available books",
    "Statistics",
    "Sort by year",
    "List all books",
];

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    let catalog = Catalog::seeded();

    run_menu(console, "Library catalog", OPTIONS, |choice, console| match choice {
        1 => {
            let author = console.prompt_text("Author: ")?;
            let title = format!("Search by author ('{}')", author);
            console.show(&title, &catalog.search_by_author(&author))
        }
        2 => {
            let keyword = console.prompt_text("Title keyword: ")?;
            let title = format!("Search by title ('{}')", keyword);
            console.show(&title, &catalog.search_by_title(&keyword))
        }
        3 => {
            let Some(start) = console.prompt_number::<i64>("From year: ")? else {
                return console.abort("year");
            };
            let Some(end) = console.prompt_number::<i64>("To year: ")? else {
                return console.abort("year");
            };
            let title = format!("Search by year range ({}-{})", start, end);
            console.show(&title, &catalog.search_by_year_range(start, end))
        }
        4 => console.show("Available books", &catalog.available()),
        5 => {
            let summary = catalog.statistics().map(|stats| stats.summary());
            console.show("Library statistics", &summary)
        }
        6 => {
            let order = console.prompt_text("Order (asc/desc) [asc]: ")?;
            let ascending = !order.trim().eq_ignore_ascii_case("desc");
            let label = if ascending { "ascending" } else { "descending" };
            list(
                console,
                &format!("Books by year ({})", label),
                catalog.sorted_by_year(ascending),
            )
        }
        _ => list(console, "Catalog", catalog.books().iter().collect()),
    })
}

fn list<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    title: &str,
    books: Vec<&Book>,
) -> io::Result<()> {
    if !console.ui().mode.is_pretty() {
        let outcome: TallyResult<Vec<&Book>> = Ok(books);
        return console.show(title, &outcome);
    }
    let rows: Vec<Vec<String>> = books
        .iter()
        .map(|b| {
            vec![
                b.year.to_string(),
                truncate(&b.title, 36),
                b.author.clone(),
                b.status.to_string(),
            ]
        })
        .collect();
    let columns = [
        Column::new("Year"),
        Column::new("Title"),
        Column::new("Author"),
        Column::new("Status"),
    ];
    let rendered = table(console.ui(), &columns, &rows);
    console.say(&rendered)
}
