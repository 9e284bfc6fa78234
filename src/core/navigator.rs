//! # Card Navigator
//!
//! The state machine behind the viewer. States are `(index, flipped)` pairs:
//!
//! ```text
//!            next / previous / go_to            toggle_flip
//!   (i, f) ─────────────────────────► (j, false)   (i, f) ──► (i, !f)
//! ```
//!
//! Initial state is `(0, false)`. There is no terminal state.
//!
//! Boundary moves (past the last card, before the first, or onto the
//! current card) are accepted and change nothing. Only an empty deck is an
//! error, and it is rejected at construction.

use log::debug;
use std::fmt;

use crate::core::card::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDeckError;

impl fmt::Display for InvalidDeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid deck: a deck needs at least one card")
    }
}

impl std::error::Error for InvalidDeckError {}

/// Position in the deck plus which side of the card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current_index: usize,
    pub is_flipped: bool,
}

/// Read-only projection handed to the renderer after every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState<'a> {
    pub card: &'a Card,
    pub is_first: bool,
    pub is_last: bool,
    pub is_flipped: bool,
    /// 1-based.
    pub position: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct CardNavigator {
    cards: Vec<Card>,
    state: NavigationState,
}

impl CardNavigator {
    pub fn new(cards: Vec<Card>) -> Result<Self, InvalidDeckError> {
        if cards.is_empty() {
            return Err(InvalidDeckError);
        }
        debug!("Navigator initialized with {} cards", cards.len());
        Ok(Self {
            cards,
            state: NavigationState {
                current_index: 0,
                is_flipped: false,
            },
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Never true: `new` rejects empty decks.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Jump to `index`. Out-of-range indices and the current index are no-ops.
    pub fn go_to(&mut self, index: usize) -> ViewState<'_> {
        if index < self.cards.len() && index != self.state.current_index {
            debug!("Going to card {}", index + 1);
            self.state.current_index = index;
            self.state.is_flipped = false;
        }
        self.view_state()
    }

    /// Advance one card. Does not wrap.
    pub fn next(&mut self) -> ViewState<'_> {
        self.go_to(self.state.current_index.saturating_add(1))
    }

    /// Go back one card. Does not wrap.
    pub fn previous(&mut self) -> ViewState<'_> {
        match self.state.current_index.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => self.view_state(),
        }
    }

    pub fn toggle_flip(&mut self) -> ViewState<'_> {
        self.state.is_flipped = !self.state.is_flipped;
        debug!(
            "Card {} flipped to {}",
            self.state.current_index + 1,
            if self.state.is_flipped { "back" } else { "front" }
        );
        self.view_state()
    }

    pub fn view_state(&self) -> ViewState<'_> {
        let index = self.state.current_index;
        ViewState {
            card: &self.cards[index],
            is_first: index == 0,
            is_last: index + 1 == self.cards.len(),
            is_flipped: self.state.is_flipped,
            position: index + 1,
            total: self.cards.len(),
        }
    }
}
