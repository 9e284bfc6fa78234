//! # Decks
//!
//! A deck is the fixed, ordered list of cards studied in one session.
//! It comes either from the compiled-in HTML tag deck or from a local
//! JSON file chosen at startup. Either way it is read once and never
//! changes afterwards.
//!
//! Two JSON shapes are accepted:
//!
//! ```text
//! [ { "front": ..., "status": ..., ... }, ... ]
//! { "title": "My Deck", "cards": [ ... ] }
//! ```
//!
//! Emptiness is not checked here. `CardNavigator::new` owns that rule.

use log::{debug, info};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::card::{Card, Status};

pub const BUILTIN_TITLE: &str = "HTML Tags";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub title: String,
    pub cards: Vec<Card>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DeckFile {
    Titled { title: Option<String>, cards: Vec<Card> },
    Bare(Vec<Card>),
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum DeckError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Io(e) => write!(f, "deck I/O error: {e}"),
            DeckError::Parse(e) => write!(f, "deck parse error: {e}"),
        }
    }
}

impl std::error::Error for DeckError {}

// ============================================================================
// Loading
// ============================================================================

/// Parse a deck from JSON text. `fallback_title` is used when the document
/// is a bare array or has no title.
pub fn parse_deck(json: &str, fallback_title: &str) -> Result<Deck, DeckError> {
    let parsed: DeckFile = serde_json::from_str(json).map_err(DeckError::Parse)?;
    let deck = match parsed {
        DeckFile::Titled { title, cards } => Deck {
            title: title.unwrap_or_else(|| fallback_title.to_string()),
            cards,
        },
        DeckFile::Bare(cards) => Deck {
            title: fallback_title.to_string(),
            cards,
        },
    };
    debug!("Parsed deck '{}' with {} cards", deck.title, deck.cards.len());
    Ok(deck)
}

/// Load a deck from a JSON file. The file stem doubles as the title when
/// the document does not carry one.
pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    let contents = fs::read_to_string(path).map_err(DeckError::Io)?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Deck".to_string());
    let deck = parse_deck(&contents, &stem)?;
    info!("Loaded deck from {}", path.display());
    Ok(deck)
}

/// Plain-text listing of every card, wrapped to `width` columns.
pub fn listing(title: &str, cards: &[Card], width: usize) -> String {
    let body = textwrap::Options::new(width.max(20))
        .initial_indent("    ")
        .subsequent_indent("    ");

    let mut out = format!("{} ({} cards)\n", title, cards.len());
    for (index, card) in cards.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{:>2}. {} [{}]\n", index + 1, card.front, card.status));
        for text in [&card.description, &card.example, &card.note] {
            for line in textwrap::wrap(text, &body) {
                out.push_str(&line);
                out.push('\n');
            }
        }
    }
    out
}

/// The compiled-in deck: eight HTML elements, old and new.
pub fn builtin_deck() -> Deck {
    use Status::{Current, Deprecated};

    let cards = vec![
        Card::new(
            "<marquee>",
            Deprecated,
            "Used to scroll text horizontally or vertically.",
            "<marquee>🌸 Welcome to Vivetha's HTML World! 🌸</marquee>",
            "Creates scrolling text animation but deprecated due to accessibility issues",
        ),
        Card::new(
            "<blink>",
            Deprecated,
            "Used to make text blink (works only in old browsers).",
            "<blink>This text may or may not blink 😅</blink>",
            "Makes text flash on and off - removed from modern browsers",
        ),
        Card::new(
            "<strike>",
            Deprecated,
            "Used to show strikethrough text.",
            "<strike>This is old text</strike>",
            "Displays text with a line through it - replaced by CSS text-decoration",
        ),
        Card::new(
            "<wbr>",
            Current,
            "Inserts a word break opportunity in long words.",
            "Supercalifragilistic<wbr>expialidocious",
            "Suggests where a line break can occur in long words",
        ),
        Card::new(
            "<details> & <summary>",
            Current,
            "Used to create a collapsible content section.",
            "<details><summary>Click me</summary>Hidden content</details>",
            "Creates expandable/collapsible content areas",
        ),
        Card::new(
            "<meter>",
            Current,
            "Displays a measurement within a range.",
            "Battery: <meter value=\"0.6\">60%</meter>",
            "Shows scalar values like progress, disk usage, or battery levels",
        ),
        Card::new(
            "<time>",
            Current,
            "Used to display time/date info in machine-readable form.",
            "<time datetime=\"2025-11-21\">November 21, 2025</time>",
            "Provides semantic meaning to dates and times for search engines",
        ),
        Card::new(
            "<ruby>, <rt>, <rp>",
            Current,
            "Used in East Asian languages for pronunciation.",
            "<ruby>漢 <rt>hàn</rt></ruby>",
            "Displays pronunciation guides above characters in Asian languages",
        ),
    ];

    Deck {
        title: BUILTIN_TITLE.to_string(),
        cards,
    }
}
