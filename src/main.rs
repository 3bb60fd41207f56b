//! Word Cards - three-language vocabulary flashcards in the terminal
//!
//! Each card shows a headword in Sanskrit, Spanish or English together with
//! its breakdown into smaller words, and switches language on demand.

mod config;
mod image;
mod logging;
mod models;
mod ui;
mod words;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use config::Config;
use models::{DisplayLanguage, WordRecord};
use ui::App;

// ══════════════════════════════════════════════════════════════════════════
// CLI Arguments
// ══════════════════════════════════════════════════════════════════════════

#[derive(Parser, Debug)]
#[command(name = "wordcard")]
#[command(author, version, about = "Three-language vocabulary flashcards", long_about = None)]
struct Args {
    /// JSON file with the words to show (one record or a list)
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Use the dark theme
    #[arg(long)]
    dark: bool,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print every card in the given language and exit
    #[arg(long, value_enum, num_args = 0..=1, default_missing_value = "sanskrit")]
    print: Option<DisplayLanguage>,
}

// ══════════════════════════════════════════════════════════════════════════
// Main Entry Point
// ══════════════════════════════════════════════════════════════════════════

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(e) = logging::init(&log_path) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    // Load config; an unreadable file is never overwritten
    let (mut config, config_path) = Config::load_for_session(&Config::default_path());
    if args.dark {
        config.dark_mode = true;
    }

    // Command line wins over the configured words file
    let words_path = args.words.or_else(|| config.words_file.clone());
    let words = words::resolve_words(words_path.as_deref())?;

    if let Some(language) = args.print {
        print_cards(&words, language);
        return Ok(());
    }

    run_tui(words, config, config_path)
}

fn print_cards(words: &[WordRecord], language: DisplayLanguage) {
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", language.headword(word));
        for link in &word.breakdown {
            println!("  {}", link.ordered(language).join(" » "));
        }
    }
}

fn run_tui(words: Vec<WordRecord>, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(words, config, config_path);
    tracing::info!(words = app.word_count(), dark = app.theme.name.is_dark(), "starting");

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = %err, "terminal loop failed");
        eprintln!("Error: {}", err);
        return Err(err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;
    }
    Ok(())
}
