//! The Bible catalog
//!
//! Static reference data describing the structure of each book: testament,
//! group, and verse counts per chapter. The catalog is built once at startup
//! and never mutated; everything else in the crate derives from it.

mod data;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level division of the canon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    /// Display name, matching the labels used in saved data and the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Testament::Old => "Old Testament",
            Testament::New => "New Testament",
        }
    }

    /// Parse a display name back into a testament.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Old Testament" => Some(Testament::Old),
            "New Testament" => Some(Testament::New),
            _ => None,
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single book of the Bible.
///
/// `verse_counts` is the authoritative structure: index `i` holds the verse
/// count of 1-indexed chapter `i + 1`, and every count is at least 1. Chapter
/// and verse totals are recomputed from it rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleBook {
    /// Which testament the book belongs to
    pub testament: Testament,
    /// Canonical book name, unique across the catalog
    pub name: String,
    /// Thematic group label (e.g. "Torah", "Gospels")
    pub group: String,
    /// Display position within the group
    pub canonical_order: u32,
    /// Verse count per 1-indexed chapter
    pub verse_counts: Vec<u32>,
}

impl BibleBook {
    /// Create a book entry.
    pub fn new(
        testament: Testament,
        name: impl Into<String>,
        group: impl Into<String>,
        canonical_order: u32,
        verse_counts: Vec<u32>,
    ) -> Self {
        debug_assert!(verse_counts.iter().all(|&v| v >= 1));
        Self { testament, name: name.into(), group: group.into(), canonical_order, verse_counts }
    }

    /// Number of chapters in the book.
    pub fn total_chapters(&self) -> usize {
        self.verse_counts.len()
    }

    /// Total verse count across all chapters.
    pub fn total_verses(&self) -> u32 {
        self.verse_counts.iter().sum()
    }

    /// Verse count for a 0-indexed chapter, or `None` if out of range.
    pub fn verses_in_chapter(&self, chapter_index: usize) -> Option<u32> {
        self.verse_counts.get(chapter_index).copied()
    }
}

/// Read-only lookup table over the canonical book data.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<BibleBook>,
}

impl Catalog {
    /// Build the catalog from the static book table.
    pub fn new() -> Self {
        Self { books: data::books() }
    }

    /// Look up a book by its canonical name.
    pub fn book(&self, name: &str) -> Option<&BibleBook> {
        self.books.iter().find(|b| b.name == name)
    }

    /// All books, in table order.
    pub fn books(&self) -> impl Iterator<Item = &BibleBook> {
        self.books.iter()
    }

    /// Number of books in the catalog.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Distinct testaments present, sorted by display name.
    pub fn testaments(&self) -> Vec<Testament> {
        let mut testaments: Vec<Testament> = Vec::new();
        for book in &self.books {
            if !testaments.contains(&book.testament) {
                testaments.push(book.testament);
            }
        }
        testaments.sort_by_key(|t| t.label());
        testaments
    }

    /// Distinct group names within a testament, sorted alphabetically.
    pub fn groups_in_testament(&self, testament: Testament) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for book in self.books.iter().filter(|b| b.testament == testament) {
            if !groups.contains(&book.group.as_str()) {
                groups.push(&book.group);
            }
        }
        groups.sort_unstable();
        groups
    }

    /// Books belonging to a group, ordered by `canonical_order`.
    ///
    /// An unknown group simply yields an empty list.
    pub fn books_in_group(&self, group: &str) -> Vec<&BibleBook> {
        let mut books: Vec<&BibleBook> = self.books.iter().filter(|b| b.group == group).collect();
        books.sort_by_key(|b| b.canonical_order);
        books
    }

    /// Books belonging to a testament, in table order.
    pub fn books_in_testament(&self, testament: Testament) -> impl Iterator<Item = &BibleBook> {
        self.books.iter().filter(move |b| b.testament == testament)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn totals_derive_from_verse_counts() {
        let book = BibleBook::new(Testament::New, "Mark", "Gospels", 2, vec![10, 20, 30]);
        assert_eq!(book.total_chapters(), 3);
        assert_eq!(book.total_verses(), 60);
    }

    #[test]
    fn catalog_totals_are_consistent() {
        let catalog = Catalog::new();
        for book in catalog.books() {
            assert_eq!(book.total_chapters(), book.verse_counts.len());
            assert_eq!(book.total_verses(), book.verse_counts.iter().sum::<u32>());
        }
    }

    #[test]
    fn testaments_sorted_by_label() {
        let catalog = Catalog::new();
        // "New Testament" sorts before "Old Testament"
        assert_eq!(catalog.testaments(), vec![Testament::New, Testament::Old]);
    }

    #[test]
    fn groups_in_testament_sorted_and_distinct() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.groups_in_testament(Testament::Old),
            vec!["Prophets", "Torah", "Wisdom"]
        );
        assert_eq!(
            catalog.groups_in_testament(Testament::New),
            vec!["Gospels", "Pauline Epistles"]
        );
    }

    #[test]
    fn books_in_group_follow_canonical_order() {
        let catalog = Catalog::new();
        let gospels: Vec<&str> =
            catalog.books_in_group("Gospels").iter().map(|b| b.name.as_str()).collect();
        assert_eq!(gospels, vec!["Matthew", "Mark", "Luke", "John"]);
    }

    #[test]
    fn unknown_group_yields_empty() {
        let catalog = Catalog::new();
        assert!(catalog.books_in_group("Apocrypha").is_empty());
        assert!(catalog.book("Enoch").is_none());
    }

    #[test]
    fn verses_in_chapter_bounds() {
        let catalog = Catalog::new();
        let john = catalog.book("John").unwrap();
        assert_eq!(john.verses_in_chapter(0), Some(51));
        assert_eq!(john.verses_in_chapter(21), None);
    }

    #[test]
    fn testament_labels_round_trip() {
        for t in [Testament::Old, Testament::New] {
            assert_eq!(Testament::from_label(t.label()), Some(t));
        }
        assert_eq!(Testament::from_label("Third Testament"), None);
    }
}
