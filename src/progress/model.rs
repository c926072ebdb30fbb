//! Progress snapshot types
//!
//! A [`Progress`] value is one complete snapshot of memorization state. The
//! store replaces snapshots wholesale on every mutation instead of editing
//! them in place, so subscribers can compare by reference and never see a
//! half-updated value.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Memorization state for one chapter.
///
/// `in_progress` and `completed` are derived from `memorized_verses` and are
/// mutually exclusive: both are false exactly when the count is zero. Always
/// construct through [`ChapterProgress::with_memorized`] so the flags stay
/// consistent with the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterProgress {
    /// 1-indexed chapter number
    pub chapter: u32,
    /// Verses memorized so far
    pub memorized_verses: u32,
    /// Partially memorized: strictly between empty and full
    pub in_progress: bool,
    /// Fully memorized
    pub completed: bool,
}

impl ChapterProgress {
    /// Zero-state entry for a chapter.
    pub fn empty(chapter: u32) -> Self {
        Self { chapter, memorized_verses: 0, in_progress: false, completed: false }
    }

    /// Entry with `memorized` verses out of `max_verses`, flags derived.
    pub fn with_memorized(chapter: u32, memorized: u32, max_verses: u32) -> Self {
        Self {
            chapter,
            memorized_verses: memorized,
            in_progress: memorized > 0 && memorized < max_verses,
            completed: memorized == max_verses,
        }
    }
}

/// A complete progress snapshot: book name to one entry per chapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Progress per book, keyed by canonical book name
    pub books: HashMap<String, Vec<ChapterProgress>>,
}

impl Progress {
    /// Snapshot with every catalog book present and every chapter at zero.
    pub fn zero_filled(catalog: &Catalog) -> Self {
        let books = catalog
            .books()
            .map(|book| (book.name.clone(), zero_chapters(book.total_chapters())))
            .collect();
        Self { books }
    }

    /// The chapter entries for a book, if any.
    pub fn chapters(&self, book: &str) -> Option<&[ChapterProgress]> {
        self.books.get(book).map(Vec::as_slice)
    }

    /// One chapter entry by 0-indexed position.
    pub fn chapter(&self, book: &str, chapter_index: usize) -> Option<&ChapterProgress> {
        self.books.get(book).and_then(|chapters| chapters.get(chapter_index))
    }

    /// Rebuild a loaded snapshot against the catalog.
    ///
    /// Stored data may be stale: books can be missing or unknown, chapter
    /// lists short, counts above the current chapter maximum, and the flags
    /// are not trusted. The result has exactly one entry per catalog chapter,
    /// counts clamped to `[0, max]`, and both flags recomputed.
    pub fn normalized(&self, catalog: &Catalog) -> Self {
        let books = catalog
            .books()
            .map(|book| {
                let stored = self.books.get(&book.name);
                let chapters = book
                    .verse_counts
                    .iter()
                    .enumerate()
                    .map(|(i, &max)| {
                        let number = i as u32 + 1;
                        let memorized = stored
                            .and_then(|chapters| chapters.get(i))
                            .map_or(0, |c| c.memorized_verses.min(max));
                        ChapterProgress::with_memorized(number, memorized, max)
                    })
                    .collect();
                (book.name.clone(), chapters)
            })
            .collect();
        Self { books }
    }
}

/// Zero-state entries for `count` chapters, numbered from 1.
pub(super) fn zero_chapters(count: usize) -> Vec<ChapterProgress> {
    (1..=count as u32).map(ChapterProgress::empty).collect()
}
