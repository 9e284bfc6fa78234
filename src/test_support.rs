//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::card::{Card, Status};
use crate::core::deck::Deck;
use crate::core::state::App;

/// `n` distinct cards; every third one is deprecated.
pub fn sample_cards(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| {
            let status = if i % 3 == 0 {
                Status::Deprecated
            } else {
                Status::Current
            };
            Card::new(
                format!("<tag{}>", i + 1),
                status,
                format!("Description {}", i + 1),
                format!("<tag{0}>example</tag{0}>", i + 1),
                format!("Note {}", i + 1),
            )
        })
        .collect()
}

pub fn sample_deck(n: usize) -> Deck {
    Deck {
        title: "Test Deck".to_string(),
        cards: sample_cards(n),
    }
}

/// Creates a test App over `n` sample cards.
pub fn test_app(n: usize) -> App {
    App::new(sample_deck(n)).expect("sample deck is non-empty")
}
