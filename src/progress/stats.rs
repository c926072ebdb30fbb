//! Derived statistics
//!
//! Pure functions over `(&Catalog, &Progress)`. Nothing here is stored:
//! every value is recomputed on demand, so these are safe to call on every
//! render frame. Percentages are verse-weighted: a long book moves a group
//! percentage more than a short one.

use crate::catalog::{Catalog, Testament};

use super::model::Progress;

/// Statistics for a single book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookStats {
    /// Verse-weighted completion, 0–100
    pub percent_complete: u8,
    pub memorized_verses: u32,
    pub total_verses: u32,
    pub completed_chapters: usize,
    pub in_progress_chapters: usize,
}

/// Statistics for a book group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupStats {
    /// Verse-weighted completion across the group, 0–100
    pub percent_complete: u8,
    pub completed_chapters: usize,
    pub total_chapters: usize,
}

/// Statistics for a testament.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestamentStats {
    pub percent_complete: u8,
    pub memorized_verses: u32,
    pub total_verses: u32,
}

/// Whole-corpus statistics for the overall dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverallStats {
    /// Verse-weighted completion, 0–100
    pub percent_complete: u8,
    pub memorized_verses: u32,
    pub total_verses: u32,
    pub completed_chapters: usize,
    pub total_chapters: usize,
    /// Books with at least one memorized verse
    pub books_started: usize,
    pub total_books: usize,
}

impl OverallStats {
    /// Share of chapters fully memorized, 0–100.
    pub fn chapter_percent(&self) -> u8 {
        percent(self.completed_chapters as u64, self.total_chapters as u64)
    }

    /// Share of books with any memorization, 0–100.
    pub fn book_percent(&self) -> u8 {
        percent(self.books_started as u64, self.total_books as u64)
    }
}

/// Round-half-up integer percentage; a zero total yields 0, never NaN.
fn percent(part: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u8
}

/// Statistics for one book. An unknown book yields all zeros; a book absent
/// from the snapshot counts as all-zero chapters.
pub fn book_stats(catalog: &Catalog, progress: &Progress, book_name: &str) -> BookStats {
    let Some(book) = catalog.book(book_name) else { return BookStats::default() };

    let chapters = progress.chapters(book_name).unwrap_or(&[]);
    let memorized: u32 = chapters.iter().map(|c| c.memorized_verses).sum();
    let completed = chapters.iter().filter(|c| c.completed).count();
    let in_progress = chapters.iter().filter(|c| c.in_progress && !c.completed).count();
    let total = book.total_verses();

    BookStats {
        percent_complete: percent(memorized as u64, total as u64),
        memorized_verses: memorized,
        total_verses: total,
        completed_chapters: completed,
        in_progress_chapters: in_progress,
    }
}

/// Statistics for a group. The percentage uses verse sums, not chapter
/// counts; an unknown group matches zero books and yields all zeros.
pub fn group_stats(catalog: &Catalog, progress: &Progress, group: &str) -> GroupStats {
    let mut memorized: u64 = 0;
    let mut total: u64 = 0;
    let mut completed_chapters = 0;
    let mut total_chapters = 0;

    for book in catalog.books_in_group(group) {
        let stats = book_stats(catalog, progress, &book.name);
        memorized += u64::from(stats.memorized_verses);
        total += u64::from(stats.total_verses);
        completed_chapters += stats.completed_chapters;
        total_chapters += book.total_chapters();
    }

    GroupStats { percent_complete: percent(memorized, total), completed_chapters, total_chapters }
}

/// Statistics for a testament, verse-weighted like [`group_stats`].
pub fn testament_stats(catalog: &Catalog, progress: &Progress, testament: Testament) -> TestamentStats {
    let mut memorized: u32 = 0;
    let mut total: u32 = 0;

    for book in catalog.books_in_testament(testament) {
        let stats = book_stats(catalog, progress, &book.name);
        memorized += stats.memorized_verses;
        total += stats.total_verses;
    }

    TestamentStats {
        percent_complete: percent(u64::from(memorized), u64::from(total)),
        memorized_verses: memorized,
        total_verses: total,
    }
}

/// Whole-corpus statistics.
pub fn overall_stats(catalog: &Catalog, progress: &Progress) -> OverallStats {
    let mut memorized: u32 = 0;
    let mut total: u32 = 0;
    let mut completed_chapters = 0;
    let mut total_chapters = 0;
    let mut books_started = 0;

    for book in catalog.books() {
        let stats = book_stats(catalog, progress, &book.name);
        memorized += stats.memorized_verses;
        total += stats.total_verses;
        completed_chapters += stats.completed_chapters;
        total_chapters += book.total_chapters();
        if stats.memorized_verses > 0 {
            books_started += 1;
        }
    }

    OverallStats {
        percent_complete: percent(u64::from(memorized), u64::from(total)),
        memorized_verses: memorized,
        total_verses: total,
        completed_chapters,
        total_chapters,
        books_started,
        total_books: catalog.book_count(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::progress::ChapterProgress;

    fn complete_book(progress: &mut Progress, catalog: &Catalog, name: &str) {
        let book = catalog.book(name).unwrap();
        let chapters = book
            .verse_counts
            .iter()
            .enumerate()
            .map(|(i, &max)| ChapterProgress::with_memorized(i as u32 + 1, max, max))
            .collect();
        progress.books.insert(name.to_string(), chapters);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(1, 200), 1); // 0.5%
        assert_eq!(percent(1, 400), 0); // 0.25%
        assert_eq!(percent(3, 200), 2); // 1.5%
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(100, 100), 100);
    }

    #[test]
    fn all_zero_book_reports_its_totals() {
        let catalog = Catalog::new();
        let progress = Progress::zero_filled(&catalog);
        let john = catalog.book("John").unwrap();

        let stats = book_stats(&catalog, &progress, "John");
        assert_eq!(
            stats,
            BookStats {
                percent_complete: 0,
                memorized_verses: 0,
                total_verses: john.total_verses(),
                completed_chapters: 0,
                in_progress_chapters: 0,
            }
        );
    }

    #[test]
    fn unknown_book_reports_all_zeros() {
        let catalog = Catalog::new();
        let progress = Progress::zero_filled(&catalog);
        assert_eq!(book_stats(&catalog, &progress, "Enoch"), BookStats::default());
    }

    #[test]
    fn book_stats_count_chapter_states() {
        let catalog = Catalog::new();
        let mut progress = Progress::zero_filled(&catalog);
        if let Some(chapters) = progress.books.get_mut("John") {
            chapters[0] = ChapterProgress::with_memorized(1, 51, 51); // completed
            chapters[1] = ChapterProgress::with_memorized(2, 15, 25); // in progress
            chapters[2] = ChapterProgress::with_memorized(3, 20, 36); // in progress
        }

        let stats = book_stats(&catalog, &progress, "John");
        assert_eq!(stats.memorized_verses, 86);
        assert_eq!(stats.completed_chapters, 1);
        assert_eq!(stats.in_progress_chapters, 2);
    }

    #[test]
    fn group_percent_is_verse_weighted() {
        let catalog = Catalog::new();
        let mut progress = Progress::zero_filled(&catalog);
        complete_book(&mut progress, &catalog, "Mark");

        let stats = group_stats(&catalog, &progress, "Gospels");

        let mark = catalog.book("Mark").unwrap();
        let gospel_total: u32 =
            catalog.books_in_group("Gospels").iter().map(|b| b.total_verses()).sum();
        let expected = percent(u64::from(mark.total_verses()), u64::from(gospel_total));

        assert_eq!(stats.percent_complete, expected);
        assert_eq!(stats.percent_complete, 18);
        // A naive average of book percentages (0 + 100 + 0 + 0) / 4 would be 25
        assert_ne!(stats.percent_complete, 25);
        assert_eq!(stats.completed_chapters, mark.total_chapters());
    }

    #[test]
    fn unknown_group_reports_all_zeros() {
        let catalog = Catalog::new();
        let progress = Progress::zero_filled(&catalog);
        assert_eq!(group_stats(&catalog, &progress, "Apocrypha"), GroupStats::default());
    }

    #[test]
    fn testament_stats_span_their_books() {
        let catalog = Catalog::new();
        let mut progress = Progress::zero_filled(&catalog);
        complete_book(&mut progress, &catalog, "Mark");

        let new = testament_stats(&catalog, &progress, Testament::New);
        let old = testament_stats(&catalog, &progress, Testament::Old);

        assert_eq!(new.memorized_verses, catalog.book("Mark").unwrap().total_verses());
        assert_eq!(old.memorized_verses, 0);
        assert_eq!(old.percent_complete, 0);
        assert!(new.percent_complete > 0);
    }

    #[test]
    fn overall_stats_aggregate_the_whole_catalog() {
        let catalog = Catalog::new();
        let mut progress = Progress::zero_filled(&catalog);
        complete_book(&mut progress, &catalog, "Mark");
        if let Some(chapters) = progress.books.get_mut("John") {
            chapters[0] = ChapterProgress::with_memorized(1, 51, 51);
        }

        let stats = overall_stats(&catalog, &progress);
        let mark = catalog.book("Mark").unwrap();

        assert_eq!(stats.memorized_verses, mark.total_verses() + 51);
        assert_eq!(stats.completed_chapters, mark.total_chapters() + 1);
        assert_eq!(stats.books_started, 2);
        assert_eq!(stats.total_books, catalog.book_count());
        assert_eq!(
            stats.total_chapters,
            catalog.books().map(|b| b.total_chapters()).sum::<usize>()
        );
        assert!(stats.book_percent() > 0);
        assert!(stats.chapter_percent() > 0);
    }
}
