//! The progress store
//!
//! Owns the current [`Progress`] snapshot and publishes every replacement
//! through a [`watch`] channel. Mutations never edit a snapshot in place:
//! they build a new one, publish it synchronously, and then hand it to the
//! persistence backend in a spawned task. A failed save is logged and the
//! in-memory snapshot stays authoritative for the session.

use std::sync::Arc;

use tokio::sync::watch;

use super::model::{ChapterProgress, Progress, zero_chapters};
use crate::catalog::{BibleBook, Catalog, Testament};
use crate::storage::ProgressBackend;

/// Observable holder of the current memorization snapshot.
///
/// All mutating operations take `&self`; the store can be shared behind an
/// `Arc`. Unknown book, group, or testament names are silent no-ops; the
/// UI only passes catalog-derived identifiers.
pub struct ProgressStore<B> {
    catalog: Arc<Catalog>,
    backend: Arc<B>,
    tx: watch::Sender<Arc<Progress>>,
}

impl<B: ProgressBackend> ProgressStore<B> {
    /// Create a store starting from the zero-filled snapshot.
    ///
    /// The snapshot is available synchronously; call [`load_persisted`]
    /// (typically from a spawned task) to replace it with saved state.
    ///
    /// [`load_persisted`]: ProgressStore::load_persisted
    pub fn new(catalog: Arc<Catalog>, backend: Arc<B>) -> Self {
        let initial = Arc::new(Progress::zero_filled(&catalog));
        let (tx, _rx) = watch::channel(initial);
        Self { catalog, backend, tx }
    }

    /// The catalog this store tracks progress against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<Progress> {
        self.tx.borrow().clone()
    }

    /// Subscribe to snapshot replacements.
    ///
    /// The receiver sees the current value immediately and is woken on every
    /// publish. Dropping it unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Progress>> {
        self.tx.subscribe()
    }

    /// Replace the zero-filled snapshot with saved state, if any.
    ///
    /// Stored data is normalized against the catalog (flags recomputed,
    /// stale counts clamped). A load failure is not fatal: the diagnostic is
    /// logged and the current snapshot is re-published so subscribers see
    /// the load settle either way.
    pub async fn load_persisted(&self) {
        match self.backend.load().await {
            Ok(stored) => {
                let snapshot = Arc::new(stored.normalized(&self.catalog));
                self.tx.send_replace(snapshot);
            }
            Err(e) => {
                tracing::warn!("failed to load saved progress, starting fresh: {e}");
                let current = self.snapshot();
                self.tx.send_replace(current);
            }
        }
    }

    /// Mark one more verse of a chapter memorized.
    ///
    /// No-op if the chapter is already fully memorized.
    pub fn increment_verse(&self, book: &str, chapter_index: usize) {
        self.update_chapter(book, chapter_index, |entry, max| {
            (entry.memorized_verses < max).then(|| {
                ChapterProgress::with_memorized(entry.chapter, entry.memorized_verses + 1, max)
            })
        });
    }

    /// Un-memorize one verse of a chapter.
    ///
    /// No-op if the chapter is already at zero.
    pub fn decrement_verse(&self, book: &str, chapter_index: usize) {
        self.update_chapter(book, chapter_index, |entry, max| {
            (entry.memorized_verses > 0).then(|| {
                ChapterProgress::with_memorized(entry.chapter, entry.memorized_verses - 1, max)
            })
        });
    }

    /// Set a chapter's memorized-verse count directly.
    ///
    /// The store does not clamp: callers are responsible for keeping `count`
    /// within `[0, max]` for the chapter. Flags are recomputed from the new
    /// count either way.
    pub fn set_chapter_progress(&self, book: &str, chapter_index: usize, count: u32) {
        self.update_chapter(book, chapter_index, |entry, max| {
            Some(ChapterProgress::with_memorized(entry.chapter, count, max))
        });
    }

    /// Reset one chapter to the zero state.
    pub fn reset_chapter(&self, book: &str, chapter_index: usize) {
        self.update_chapter(book, chapter_index, |entry, _max| {
            Some(ChapterProgress::empty(entry.chapter))
        });
    }

    /// Reset every chapter of a book to the zero state.
    pub fn reset_book(&self, book: &str) {
        let Some(book) = self.catalog.book(book) else { return };
        self.reset_books(vec![book]);
    }

    /// Reset every book in a group. An unknown group matches zero books and
    /// publishes nothing.
    pub fn reset_group(&self, group: &str) {
        self.reset_books(self.catalog.books_in_group(group));
    }

    /// Reset every book in a testament.
    pub fn reset_testament(&self, testament: Testament) {
        let books: Vec<&BibleBook> = self.catalog.books_in_testament(testament).collect();
        self.reset_books(books);
    }

    fn reset_books(&self, books: Vec<&BibleBook>) {
        if books.is_empty() {
            return;
        }

        let mut next = (*self.snapshot()).clone();
        for book in books {
            next.books.insert(book.name.clone(), zero_chapters(book.total_chapters()));
        }
        self.publish(next);
    }

    /// Apply `update` to one chapter entry and publish the result.
    ///
    /// `update` receives the current entry and the chapter's verse count and
    /// returns the replacement, or `None` for a no-op (no new snapshot, no
    /// notification). Unknown books and out-of-range chapters are no-ops.
    fn update_chapter(
        &self,
        book: &str,
        chapter_index: usize,
        update: impl FnOnce(&ChapterProgress, u32) -> Option<ChapterProgress>,
    ) {
        let Some(entry_book) = self.catalog.book(book) else { return };
        let Some(max) = entry_book.verses_in_chapter(chapter_index) else { return };

        let current = self.snapshot();
        let entry = current
            .chapter(book, chapter_index)
            .copied()
            .unwrap_or_else(|| ChapterProgress::empty(chapter_index as u32 + 1));

        let Some(updated) = update(&entry, max) else { return };

        let mut next = (*current).clone();
        let chapters = next
            .books
            .entry(entry_book.name.clone())
            .or_insert_with(|| zero_chapters(entry_book.total_chapters()));
        let Some(slot) = chapters.get_mut(chapter_index) else { return };
        *slot = updated;

        self.publish(next);
    }

    /// Replace the snapshot, notify subscribers, then save fire-and-forget.
    ///
    /// The notification is synchronous, so the UI is never behind durable
    /// state. Rapid mutations issue one save each; each carries the full
    /// snapshot, so out-of-order completion is harmless.
    fn publish(&self, next: Progress) {
        let snapshot = Arc::new(next);
        self.tx.send_replace(Arc::clone(&snapshot));

        let backend = Arc::clone(&self.backend);
        tokio::spawn(async move {
            if let Err(e) = backend.save(snapshot).await {
                tracing::warn!("failed to save progress: {e}");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::storage::MemoryBackend;

    fn store() -> ProgressStore<MemoryBackend> {
        store_with_backend(Arc::new(MemoryBackend::new(Duration::ZERO)))
    }

    fn store_with_backend(backend: Arc<MemoryBackend>) -> ProgressStore<MemoryBackend> {
        ProgressStore::new(Arc::new(Catalog::new()), backend)
    }

    /// Let spawned save tasks run to completion.
    async fn drain_saves() {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn incrementing_every_verse_completes_the_chapter() {
        let store = store();

        // John 1 has 51 verses
        for _ in 0..51 {
            store.increment_verse("John", 0);
        }

        let snapshot = store.snapshot();
        let chapter = snapshot.chapter("John", 0).unwrap();
        assert_eq!(chapter.memorized_verses, 51);
        assert!(chapter.completed);
        assert!(!chapter.in_progress);
    }

    #[tokio::test(start_paused = true)]
    async fn increment_at_max_is_a_silent_no_op() {
        let store = store();
        store.set_chapter_progress("John", 0, 51);

        let mut rx = store.subscribe();
        rx.borrow_and_update();
        let before = store.snapshot();

        store.increment_verse("John", 0);

        assert!(!rx.has_changed().unwrap());
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[tokio::test(start_paused = true)]
    async fn decrement_at_zero_is_a_silent_no_op() {
        let store = store();
        let mut rx = store.subscribe();
        rx.borrow_and_update();
        let before = store.snapshot();

        store.decrement_verse("John", 0);

        assert!(!rx.has_changed().unwrap());
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[tokio::test(start_paused = true)]
    async fn set_chapter_progress_recomputes_flags() {
        let store = store();

        // Romans 8 (index 7) has 39 verses
        store.set_chapter_progress("Romans", 7, 39);
        let chapter = *store.snapshot().chapter("Romans", 7).unwrap();
        assert!(chapter.completed);
        assert!(!chapter.in_progress);

        store.set_chapter_progress("Romans", 7, 20);
        let chapter = *store.snapshot().chapter("Romans", 7).unwrap();
        assert!(!chapter.completed);
        assert!(chapter.in_progress);
        assert_eq!(chapter.memorized_verses, 20);
    }

    #[tokio::test(start_paused = true)]
    async fn set_chapter_progress_does_not_clamp() {
        let store = store();

        // Out-of-range input is the caller's bug; the store stores it as-is
        store.set_chapter_progress("John", 0, 60);
        let chapter = *store.snapshot().chapter("John", 0).unwrap();
        assert_eq!(chapter.memorized_verses, 60);
        assert!(!chapter.completed);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_chapter_is_idempotent() {
        let store = store();
        store.set_chapter_progress("John", 2, 10);

        store.reset_chapter("John", 2);
        let once = store.snapshot();

        store.reset_chapter("John", 2);
        let twice = store.snapshot();

        assert_eq!(*once, *twice);
        assert_eq!(*once.chapter("John", 2).unwrap(), ChapterProgress::empty(3));
    }

    #[tokio::test(start_paused = true)]
    async fn reset_group_only_touches_that_group() {
        let store = store();
        store.increment_verse("Genesis", 0);
        store.increment_verse("Exodus", 0);
        store.increment_verse("Matthew", 0);

        store.reset_group("Torah");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.chapter("Genesis", 0).unwrap().memorized_verses, 0);
        assert_eq!(snapshot.chapter("Exodus", 0).unwrap().memorized_verses, 0);
        assert_eq!(snapshot.chapter("Matthew", 0).unwrap().memorized_verses, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_testament_zeroes_every_book_in_it() {
        let store = store();
        store.increment_verse("Isaiah", 0);
        store.increment_verse("Mark", 0);

        store.reset_testament(Testament::Old);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.chapter("Isaiah", 0).unwrap().memorized_verses, 0);
        assert_eq!(snapshot.chapter("Mark", 0).unwrap().memorized_verses, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_identifiers_are_silent_no_ops() {
        let store = store();
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.increment_verse("Enoch", 0);
        store.increment_verse("John", 99);
        store.reset_book("Enoch");
        store.reset_group("Apocrypha");

        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn mutations_notify_and_persist() {
        let backend = Arc::new(MemoryBackend::new(Duration::ZERO));
        let store = store_with_backend(Arc::clone(&backend));
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.increment_verse("John", 0);

        assert!(rx.has_changed().unwrap());
        drain_saves().await;
        let saved = backend.stored().unwrap();
        assert_eq!(saved.chapter("John", 0).unwrap().memorized_verses, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn save_failure_does_not_roll_back() {
        let backend = Arc::new(MemoryBackend::new(Duration::ZERO));
        backend.fail_saves(true);
        let store = store_with_backend(Arc::clone(&backend));

        store.increment_verse("John", 0);
        drain_saves().await;

        // In-memory state is authoritative; nothing reached the backend
        assert_eq!(store.snapshot().chapter("John", 0).unwrap().memorized_verses, 1);
        assert!(backend.stored().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn load_persisted_replaces_snapshot_and_recomputes_flags() {
        let catalog = Catalog::new();
        let mut seed = Progress::zero_filled(&catalog);
        seed.books.insert(
            "John".to_string(),
            vec![ChapterProgress { chapter: 1, memorized_verses: 51, in_progress: true, completed: false }],
        );
        let backend = Arc::new(MemoryBackend::with_seed(Duration::ZERO, seed));
        let store = store_with_backend(backend);
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.load_persisted().await;

        assert!(rx.has_changed().unwrap());
        let snapshot = store.snapshot();
        let john = snapshot.chapters("John").unwrap();
        // Short chapter list zero-filled back to 21, stale flags recomputed
        assert_eq!(john.len(), 21);
        assert!(john[0].completed && !john[0].in_progress);
    }

    #[tokio::test(start_paused = true)]
    async fn load_failure_keeps_zero_filled_snapshot() {
        let backend = Arc::new(MemoryBackend::new(Duration::ZERO));
        backend.fail_loads(true);
        let store = store_with_backend(backend);
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.load_persisted().await;

        // Failure is non-fatal: subscribers still get a settle notification
        assert!(rx.has_changed().unwrap());
        assert_eq!(*store.snapshot(), Progress::zero_filled(&Catalog::new()));
    }
}
