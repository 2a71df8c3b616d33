//! Read-only library catalog with search and statistics.
//!
//! Query policy: substring searches reject a blank argument with
//! `EmptyArgument`, and every query that matches nothing (including any query
//! over an empty catalog) fails with `NoMatches` instead of returning an
//! empty list.

use std::fmt;

use crate::aggregate::{count_by, max_by_count};
use crate::error::{Result, TallyError};
use crate::reportable_display;

/// Loan status of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookStatus {
    Available,
    Loaned,
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str("Available"),
            Self::Loaned => f.write_str("Loaned"),
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: u32,
    pub status: BookStatus,
}

impl Book {
    pub fn new(title: &str, author: &str, year: u32, status: BookStatus) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            status,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) by {} [{}]",
            self.title, self.year, self.author, self.status
        )
    }
}

reportable_display!(Book);

/// Summary figures for a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryStats {
    pub total_books: usize,
    pub unique_authors: usize,
    pub top_author: String,
    pub top_author_books: usize,
}

impl LibraryStats {
    /// Multi-line summary suitable for verbatim display.
    pub fn summary(&self) -> String {
        format!(
            "--- Library statistics ---\nTotal books: {}\nUnique authors: {}\nMost productive author: {} ({} books)",
            self.total_books, self.unique_authors, self.top_author, self.top_author_books
        )
    }
}

/// Immutable book catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// The six-book sample catalog.
    pub fn seeded() -> Self {
        use BookStatus::{Available, Loaned};
        Self::new(vec![
            Book::new("Cien años de soledad", "Gabriel García Márquez", 1967, Available),
            Book::new("La casa de los espíritus", "Isabel Allende", 1982, Loaned),
            Book::new(
                "El amor en los tiempos del cólera",
                "Gabriel García Márquez",
                1985,
                Available,
            ),
            Book::new("Ficciones", "Jorge Luis Borges", 1944, Available),
            Book::new("Eva Luna", "Isabel Allende", 1985, Loaned),
            Book::new("Rayuela", "Julio Cortázar", 1963, Available),
        ])
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books whose author contains `query`, ignoring case.
    pub fn search_by_author(&self, query: &str) -> Result<Vec<&Book>> {
        let needle = require_query("author name", query)?;
        let found: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| book.author.to_lowercase().contains(&needle))
            .collect();
        non_empty(found, || format!("author '{}'", query))
    }

    /// Books whose title contains `query`, ignoring case.
    pub fn search_by_title(&self, query: &str) -> Result<Vec<&Book>> {
        let needle = require_query("title", query)?;
        let found: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .collect();
        non_empty(found, || format!("title '{}'", query))
    }

    /// Books published in `start..=end`.
    pub fn search_by_year_range(&self, start: i64, end: i64) -> Result<Vec<&Book>> {
        if start > end || start <= 0 {
            return Err(TallyError::InvalidRange { start, end });
        }
        let found: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| (start..=end).contains(&i64::from(book.year)))
            .collect();
        non_empty(found, || format!("books published between {} and {}", start, end))
    }

    pub fn available(&self) -> Result<Vec<&Book>> {
        let found: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| book.status == BookStatus::Available)
            .collect();
        non_empty(found, || "available books".to_string())
    }

    /// Group by author and pick the author with the most books.
    pub fn statistics(&self) -> Result<LibraryStats> {
        if self.books.is_empty() {
            return Err(TallyError::EmptyCollection("catalog"));
        }
        let per_author = count_by(self.books.iter(), |book: &Book| book.author.clone());
        let (top_author, top_author_books) = max_by_count(&per_author)
            .cloned()
            .ok_or(TallyError::EmptyCollection("catalog"))?;

        Ok(LibraryStats {
            total_books: self.books.len(),
            unique_authors: per_author.len(),
            top_author,
            top_author_books,
        })
    }

    /// Books ordered by year; equal years keep catalog order.
    pub fn sorted_by_year(&self, ascending: bool) -> Vec<&Book> {
        let mut books: Vec<&Book> = self.books.iter().collect();
        if ascending {
            books.sort_by_key(|book| book.year);
        } else {
            books.sort_by(|a, b| b.year.cmp(&a.year));
        }
        books
    }
}

fn require_query(field: &'static str, query: &str) -> Result<String> {
    if query.trim().is_empty() {
        return Err(TallyError::EmptyArgument { field });
    }
    Ok(query.to_lowercase())
}

fn non_empty<'a, F>(found: Vec<&'a Book>, describe: F) -> Result<Vec<&'a Book>>
where
    F: FnOnce() -> String,
{
    if found.is_empty() {
        Err(TallyError::NoMatches(describe()))
    } else {
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_search_is_case_insensitive() {
        let catalog = Catalog::seeded();
        let found = catalog.search_by_title("RAYUELA").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].author, "Julio Cortázar");
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let catalog = Catalog::seeded();
        assert_eq!(
            catalog.search_by_title("  ").unwrap_err(),
            TallyError::EmptyArgument { field: "title" }
        );
    }

    #[test]
    fn test_sorted_by_year_descending_is_stable() {
        let catalog = Catalog::seeded();
        let years: Vec<u32> = catalog.sorted_by_year(false).iter().map(|b| b.year).collect();
        assert_eq!(years, vec![1985, 1985, 1982, 1967, 1963, 1944]);
        let titles: Vec<&str> = catalog
            .sorted_by_year(false)
            .iter()
            .take(2)
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, vec!["El amor en los tiempos del cólera", "Eva Luna"]);
    }

    #[test]
    fn test_summary_text() {
        let stats = Catalog::seeded().statistics().unwrap();
        let summary = stats.summary();
        assert!(summary.contains("Total books: 6"));
        assert!(summary.contains("Unique authors: 4"));
        assert!(summary.contains("Gabriel García Márquez (2 books)"));
    }

    #[test]
    fn test_book_display() {
        let book = Book::new("Ficciones", "Jorge Luis Borges", 1944, BookStatus::Available);
        assert_eq!(
            book.to_string(),
            "Ficciones (1944) by Jorge Luis Borges [Available]"
        );
    }
}
