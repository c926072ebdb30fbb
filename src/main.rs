use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use selah::catalog::{Catalog, Testament};
use selah::flow;
use selah::progress::{Progress, ProgressStore, stats};
use selah::storage::{JsonFileBackend, MemoryBackend, ProgressBackend, memory};
use selah::{App, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "selah")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Keep progress in memory only (simulated backend, nothing touches disk)
    #[arg(long)]
    volatile: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print memorization statistics
    Stats {
        /// Scope to a single book
        #[arg(long)]
        book: Option<String>,
        /// Scope to a group of books
        #[arg(long, conflicts_with = "book")]
        group: Option<String>,
        /// Scope to a testament ("Old Testament" or "New Testament")
        #[arg(long, conflicts_with_all = ["book", "group"])]
        testament: Option<String>,
    },
    /// Reset saved progress for a chapter, book, group, or testament
    Reset {
        /// Book to reset (the whole book unless --chapter is given)
        #[arg(long)]
        book: Option<String>,
        /// 1-indexed chapter within --book
        #[arg(long, requires = "book")]
        chapter: Option<u32>,
        /// Group of books to reset
        #[arg(long, conflicts_with_all = ["book", "chapter"])]
        group: Option<String>,
        /// Testament to reset
        #[arg(long, conflicts_with_all = ["book", "chapter", "group"])]
        testament: Option<String>,
    },
    /// Reduce a passage to first letters for flow practice
    Flow {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Print parsed verse cards instead of the raw reduced text
        #[arg(long)]
        parse: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "selah=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Stats { book, group, testament }) => run_stats(book, group, testament).await,
        Some(Commands::Reset { book, chapter, group, testament }) => {
            run_reset(book, chapter, group, testament).await
        }
        Some(Commands::Flow { file, parse }) => run_flow(file, parse),
        None => run_tui(cli.volatile).await,
    }
}

/// Launch the TUI on the persistent JSON backend, or the simulated
/// in-memory one with `--volatile`.
async fn run_tui(volatile: bool) -> Result<()> {
    let config = Config::load()?;
    let catalog = Arc::new(Catalog::new());

    if volatile {
        let backend = Arc::new(MemoryBackend::new(memory::DEFAULT_LATENCY));
        let store = Arc::new(ProgressStore::new(Arc::clone(&catalog), backend));
        let mut app = App::new(config, catalog, store)?;
        app.run().await
    } else {
        let backend = Arc::new(JsonFileBackend::new(Config::progress_path()?));
        let store = Arc::new(ProgressStore::new(Arc::clone(&catalog), backend));
        let mut app = App::new(config, catalog, store)?;
        app.run().await
    }
}

async fn run_stats(
    book: Option<String>,
    group: Option<String>,
    testament: Option<String>,
) -> Result<()> {
    let catalog = Catalog::new();
    let progress = load_progress(&catalog).await;

    if let Some(name) = book {
        let book_stats = stats::book_stats(&catalog, &progress, &name);
        println!(
            "{}: {}% ({}/{} verses, {} chapters complete, {} in progress)",
            name,
            book_stats.percent_complete,
            book_stats.memorized_verses,
            book_stats.total_verses,
            book_stats.completed_chapters,
            book_stats.in_progress_chapters
        );
    } else if let Some(name) = group {
        let group_stats = stats::group_stats(&catalog, &progress, &name);
        println!(
            "{}: {}% ({}/{} chapters complete)",
            name,
            group_stats.percent_complete,
            group_stats.completed_chapters,
            group_stats.total_chapters
        );
    } else if let Some(label) = testament {
        let testament = parse_testament(&label)?;
        let testament_stats = stats::testament_stats(&catalog, &progress, testament);
        println!(
            "{}: {}% ({}/{} verses)",
            testament,
            testament_stats.percent_complete,
            testament_stats.memorized_verses,
            testament_stats.total_verses
        );
    } else {
        let overall = stats::overall_stats(&catalog, &progress);
        println!(
            "Verses:   {}/{} ({}%)",
            overall.memorized_verses, overall.total_verses, overall.percent_complete
        );
        println!(
            "Chapters: {}/{} ({}%)",
            overall.completed_chapters,
            overall.total_chapters,
            overall.chapter_percent()
        );
        println!(
            "Books:    {}/{} started ({}%)",
            overall.books_started,
            overall.total_books,
            overall.book_percent()
        );
    }

    Ok(())
}

async fn run_reset(
    book: Option<String>,
    chapter: Option<u32>,
    group: Option<String>,
    testament: Option<String>,
) -> Result<()> {
    let catalog = Arc::new(Catalog::new());
    let backend = Arc::new(JsonFileBackend::new(Config::progress_path()?));
    let store = ProgressStore::new(Arc::clone(&catalog), Arc::clone(&backend));
    store.load_persisted().await;

    match (book, chapter, group, testament) {
        (Some(book), Some(chapter), _, _) => {
            if chapter == 0 {
                bail!("chapters are 1-indexed");
            }
            store.reset_chapter(&book, chapter as usize - 1);
            println!("Reset {} chapter {}", book, chapter);
        }
        (Some(book), None, _, _) => {
            store.reset_book(&book);
            println!("Reset {}", book);
        }
        (_, _, Some(group), _) => {
            store.reset_group(&group);
            println!("Reset group {}", group);
        }
        (_, _, _, Some(label)) => {
            let testament = parse_testament(&label)?;
            store.reset_testament(testament);
            println!("Reset {}", testament);
        }
        _ => bail!("nothing to reset: pass --book, --group, or --testament"),
    }

    // The store's own save is fire-and-forget; write the snapshot explicitly
    // so it is on disk before the process exits
    backend.save(store.snapshot()).await?;

    Ok(())
}

fn run_flow(file: Option<PathBuf>, parse: bool) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {:?}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .with_context(|| "Failed to read stdin")?;
            buf
        }
    };

    let reduced = flow::reduce_text(&text);

    if parse {
        for verse in flow::parse_verses(&reduced) {
            let label = verse.number.as_deref().unwrap_or("");
            let options = textwrap::Options::new(72).subsequent_indent("        ");
            println!("{:>6}  {}", label, textwrap::fill(&verse.text, options));
        }
    } else {
        println!("{reduced}");
    }

    Ok(())
}

/// Read the saved snapshot for a read-only command; failures fall back to
/// the zero-filled snapshot, same as the store.
async fn load_progress(catalog: &Catalog) -> Progress {
    let backend = match Config::progress_path() {
        Ok(path) => JsonFileBackend::new(path),
        Err(e) => {
            tracing::warn!("no data directory available: {e}");
            return Progress::zero_filled(catalog);
        }
    };

    match backend.load().await {
        Ok(stored) => stored.normalized(catalog),
        Err(e) => {
            tracing::warn!("failed to load saved progress: {e}");
            Progress::zero_filled(catalog)
        }
    }
}

fn parse_testament(label: &str) -> Result<Testament> {
    Testament::from_label(label).with_context(|| {
        format!("unknown testament {label:?} (expected \"Old Testament\" or \"New Testament\")")
    })
}
