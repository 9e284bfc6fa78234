use clap::Parser;
use flashdeck::core::config::{self, CliOverrides};
use flashdeck::core::deck::{self, Deck};
use flashdeck::core::state::App;
use flashdeck::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fmt::Display;
use std::fs::File;
use std::io;
use std::process;

#[derive(Parser)]
#[command(name = "flashdeck", about = "Terminal flashcard viewer")]
struct Args {
    /// JSON deck file (default: built-in HTML tag deck)
    #[arg(short, long)]
    deck: Option<String>,

    /// Card to open on, 1-based
    #[arg(short, long)]
    start: Option<usize>,

    /// Print the deck and exit
    #[arg(long)]
    list: bool,
}

/// Report a startup error once on stderr and exit non-zero.
fn fail(e: impl Display) -> ! {
    log::error!("{e}");
    eprintln!("flashdeck: {e}");
    process::exit(1)
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to flashdeck.log in current directory.
    // Starts wide open so config loading can log; narrowed once resolved.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("flashdeck.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| fail(e));
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            deck_file: args.deck.as_deref(),
            start_card: args.start,
        },
    );
    log::set_max_level(resolved.log_level);
    log::info!("flashdeck starting up with config: {:?}", resolved);

    let deck: Deck = match &resolved.deck_file {
        Some(path) => deck::load_deck(path).unwrap_or_else(|e| fail(e)),
        None => deck::builtin_deck(),
    };
    let app = App::new(deck)
        .unwrap_or_else(|e| fail(e))
        .open_at(resolved.start_card);

    if args.list {
        let width = crossterm::terminal::size()
            .map(|(w, _)| w as usize)
            .unwrap_or(80);
        print!("{}", app.listing(width));
        return Ok(());
    }

    tui::run(app, &resolved)
}
