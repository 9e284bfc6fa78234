//! # Application State
//!
//! Core business state for flashdeck. Domain logic only, no TUI-specific
//! types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── title: String                // deck title for the title bar
//! └── navigator: CardNavigator     // cards + (index, flipped)
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::deck::{self, Deck};
use crate::core::navigator::{CardNavigator, InvalidDeckError};

pub struct App {
    pub title: String,
    pub navigator: CardNavigator,
}

impl App {
    pub fn new(deck: Deck) -> Result<Self, InvalidDeckError> {
        Ok(Self {
            title: deck.title,
            navigator: CardNavigator::new(deck.cards)?,
        })
    }

    /// Open on a 1-based card. `0` and cards past the end leave the
    /// viewer on the first card.
    pub fn open_at(mut self, start: Option<usize>) -> Self {
        if let Some(index) = start.and_then(|n| n.checked_sub(1)) {
            self.navigator.go_to(index);
        }
        self
    }

    /// Plain-text listing of the deck, wrapped to `width` columns.
    pub fn listing(&self, width: usize) -> String {
        deck::listing(&self.title, self.navigator.cards(), width)
    }
}
