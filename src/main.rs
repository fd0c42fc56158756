//! cleancards - clean code flashcards for the terminal

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cleancards::app::App;
use cleancards::catalog::Catalog;
use cleancards::config::Config;
use cleancards::deck::Deck;
use cleancards::display::{card_lines, to_ansi, Display};
use cleancards::error::{CardsError, Result};
use cleancards::explain::{Explainer, GeminiClient};
use cleancards::panel::ExplanationWorker;
use cleancards::syntax::{all_profiles, profile_by_name, LanguageProfile};
use cleancards::terminal::Terminal;

/// Width used when printing cards outside the full-screen viewer
const PRINT_WIDTH: usize = 80;

/// Environment variable holding a tracing filter
const LOG_ENV: &str = "CLEANCARDS_LOG";

/// Filter used when `CLEANCARDS_LOG` is unset or invalid
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "cleancards", version, about = "Clean code flashcards for the terminal")]
struct Cli {
    /// Config file (default: ~/.cleancards.conf)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// TOML deck file to use instead of the built-in cards
    #[arg(long, value_name = "PATH")]
    deck: Option<PathBuf>,

    /// Highlighting profile (typescript, rust, python)
    #[arg(long, value_name = "NAME")]
    language: Option<String>,

    /// List cards and exit
    #[arg(long, conflicts_with_all = ["show", "explain"])]
    list: bool,

    /// Print one card and exit
    #[arg(long, value_name = "ID", conflicts_with = "explain")]
    show: Option<String>,

    /// Print the AI explanation for one card and exit
    #[arg(long, value_name = "ID")]
    explain: Option<String>,

    /// Print without ANSI colors
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn is_interactive(&self) -> bool {
        !self.list && self.show.is_none() && self.explain.is_none()
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_logging(cli.is_interactive(), &config)?;

    let catalog = match &cli.deck {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::builtin(),
    };

    let language = cli
        .language
        .clone()
        .or_else(|| catalog.language.clone())
        .unwrap_or_else(|| config.language.clone());
    let profile = resolve_profile(&language)?;

    if cli.list {
        for card in &catalog.cards {
            println!("{:<6} {:<16} {}", card.id, card.category, card.title);
        }
        return Ok(());
    }

    if let Some(id) = &cli.show {
        let mut deck = Deck::new(catalog)?;
        deck.select(id)?;
        let lines = card_lines(
            deck.current(),
            (deck.index(), deck.len()),
            &profile,
            config.show_line_numbers,
            PRINT_WIDTH,
        );
        print!("{}", to_ansi(&lines, !cli.no_color));
        return Ok(());
    }

    let explainer = Explainer::new(
        config.api_key.clone(),
        GeminiClient::new(&config.endpoint, &config.model, config.timeout()),
    );

    if let Some(id) = &cli.explain {
        let card = catalog.find(id)?;
        let text = explainer.explain(card)?;
        println!("{}", text);
        return Ok(());
    }

    let deck = Deck::new(catalog)?;
    let terminal = Terminal::new()?;
    let display = Display::new(config.show_line_numbers);
    let worker = ExplanationWorker::new(explainer);

    let mut app = App::new(deck, profile, terminal, display, worker);
    app.run()
}

fn resolve_profile(name: &str) -> Result<LanguageProfile> {
    profile_by_name(name).ok_or_else(|| {
        let known: Vec<_> = all_profiles().into_iter().map(|p| p.name).collect();
        CardsError::UnknownLanguage(format!("{} (known: {})", name, known.join(", ")))
    })
}

/// Set up tracing.
///
/// The full-screen viewer owns the terminal, so it only logs when a
/// log file is configured. One-shot commands log to stderr.
fn init_logging(interactive: bool, config: &Config) -> Result<()> {
    let filter = log_filter(std::env::var(LOG_ENV).ok().as_deref());

    if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(());
    }

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    Ok(())
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).to_string(), "info");
        assert_eq!(log_filter(Some("cleancards=loud")).to_string(), "info");
        assert_eq!(log_filter(Some("debug")).to_string(), "debug");
    }

    #[test]
    fn test_interactive_mode() {
        let cli = Cli::try_parse_from(["cleancards"]).unwrap();
        assert!(cli.is_interactive());

        let cli = Cli::try_parse_from(["cleancards", "--show", "3", "--no-color"]).unwrap();
        assert!(!cli.is_interactive());
        assert!(cli.no_color);

        assert!(Cli::try_parse_from(["cleancards", "--list", "--explain", "1"]).is_err());
    }
}
