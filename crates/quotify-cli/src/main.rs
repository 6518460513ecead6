//! Quotify - quote of the moment for the terminal
//!
//! Fetches a quote from the remote service (falling back to the embedded
//! collection when offline), keeps a favorites list, and prints share
//! links. The quote you saw last is the one `fav` and `share` act on.

mod cli;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quotify::data::favorites::{self, FavoritesStore};
use quotify::data::storage::FileStore;
use quotify::data::types::Quote;
use quotify::data::Session;
use quotify::error::Result;
use quotify::share;
use quotify::source::{DummyJsonProvider, QuoteSource, Retrieval, Source};

use cli::{Cli, Commands, FavAction};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = FileStore::open_default()?;

    // Surface a broken storage backend once, up front; favorites then
    // degrade to session-only rather than aborting.
    if !FavoritesStore::new(&store).self_test() {
        eprintln!(
            "{} favorites storage is not working; favorites will not survive this session.",
            "Warning:".yellow().bold()
        );
    }

    match cli.command {
        None => cmd_quote(&store, false, false),
        Some(Commands::Quote { local, offline }) => cmd_quote(&store, local, offline),
        Some(Commands::Fav { action: None }) => cmd_fav_toggle(&store),
        Some(Commands::Fav {
            action: Some(FavAction::List),
        }) => cmd_fav_list(&store),
        Some(Commands::Fav {
            action: Some(FavAction::Remove { text }),
        }) => cmd_fav_remove(&store, &text),
        Some(Commands::Share) => cmd_share(&store),
    }
}

/// Fetch and display a quote, remember it as the session quote
fn cmd_quote(store: &FileStore, local: bool, offline: bool) -> Result<()> {
    let mut source = QuoteSource::new(DummyJsonProvider::new()?);

    let retrieval = if local {
        Retrieval {
            quote: source.pick_local_quote(),
            source: Source::Local,
            error: None,
        }
    } else {
        source.set_offline_mode(offline);
        source.get_quote()
    };

    let favs = FavoritesStore::new(store);
    let mut quote = retrieval.quote;
    quote.is_favorite = favorites::is_favorite(&favs.load(), &quote.text);

    print_quote(&quote, retrieval.source);
    if let Some(notice) = retrieval.error {
        println!("{}", notice.yellow());
    }

    let mut session = Session::load(store);
    session.last_quote = Some(quote);
    if !session.save(store) {
        eprintln!(
            "{} could not remember this quote for `fav` and `share`.",
            "Warning:".yellow().bold()
        );
    }

    Ok(())
}

/// Toggle the session quote in the favorites list
fn cmd_fav_toggle(store: &FileStore) -> Result<()> {
    let Some(quote) = Session::load(store).last_quote else {
        println!("No current quote. Run `quotify` first.");
        return Ok(());
    };

    let favs = FavoritesStore::new(store);
    let list = favs.load();

    if favorites::is_favorite(&list, &quote.text) {
        let updated = favorites::remove(&list, &quote.text);
        if favs.save(&updated) {
            println!("Removed from favorites: {}", quote.citation());
        } else {
            warn_save_failed();
        }
    } else {
        let updated = favorites::add(&list, &quote);
        if favs.save(&updated) {
            println!(
                "{} Added to favorites: {}",
                "♥".cyan(),
                quote.citation()
            );
        } else {
            warn_save_failed();
        }
    }

    Ok(())
}

/// List favorites in insertion order
fn cmd_fav_list(store: &FileStore) -> Result<()> {
    let list = FavoritesStore::new(store).load();

    if list.is_empty() {
        println!("No favorites yet. Favorite a quote with `quotify fav`.");
        return Ok(());
    }

    for (i, quote) in list.iter().enumerate() {
        println!("{:>3}. \"{}\"", i + 1, quote.text.bold());
        println!("     - {}", quote.author.dimmed());
    }

    Ok(())
}

/// Remove a favorite by exact text or unique prefix
fn cmd_fav_remove(store: &FileStore, text: &str) -> Result<()> {
    let favs = FavoritesStore::new(store);
    let list = favs.load();

    let target = if favorites::is_favorite(&list, text) {
        text.to_string()
    } else {
        let matches: Vec<&Quote> = list.iter().filter(|q| q.text.starts_with(text)).collect();
        match matches.as_slice() {
            [] => {
                println!("No favorite matches \"{text}\".");
                return Ok(());
            }
            [one] => one.text.clone(),
            _ => {
                println!("\"{text}\" matches {} favorites; be more specific.", matches.len());
                return Ok(());
            }
        }
    };

    let updated = favorites::remove(&list, &target);
    if favs.save(&updated) {
        println!("Removed from favorites: \"{target}\"");
    } else {
        warn_save_failed();
    }

    Ok(())
}

/// Print the session quote's citation and share URL
fn cmd_share(store: &FileStore) -> Result<()> {
    let Some(quote) = Session::load(store).last_quote else {
        println!("No current quote. Run `quotify` first.");
        return Ok(());
    };

    println!("{}", quote.citation());
    println!("{}", share::tweet_url(&quote)?.underline());

    Ok(())
}

fn print_quote(quote: &Quote, source: Source) {
    let heart = if quote.is_favorite {
        "♥".cyan().to_string()
    } else {
        String::new()
    };
    let tag = match source {
        Source::Remote => "remote".green(),
        Source::Local => "local".yellow(),
    };

    println!();
    println!("\"{}\"", quote.text.bold());
    println!("    - {} [{}] {}", quote.author.dimmed(), tag, heart);
    println!();
}

fn warn_save_failed() {
    eprintln!(
        "{} could not save favorites; the change was not persisted.",
        "Warning:".yellow().bold()
    );
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
