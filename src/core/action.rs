//! # Actions
//!
//! Everything that can happen in flashdeck becomes an `Action`.
//! User presses Right? That's `Action::Next`. Clicks the third dot?
//! That's `Action::GoTo(2)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter what, if anything, it should do next.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    /// 0-based card index.
    GoTo(usize),
    First,
    Last,
    ToggleFlip,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed (boundary no-op).
    None,
    /// A different card is now showing. Plays the change pulse.
    CardChanged,
    /// Same card, other side.
    Flipped,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    let before = app.navigator.state();
    let nav = &mut app.navigator;

    match action {
        Action::Quit => return Effect::Quit,
        Action::ToggleFlip => {
            nav.toggle_flip();
            return Effect::Flipped;
        }
        Action::Next => {
            nav.next();
        }
        Action::Previous => {
            nav.previous();
        }
        Action::GoTo(index) => {
            nav.go_to(index);
        }
        Action::First => {
            nav.go_to(0);
        }
        Action::Last => {
            let last = nav.len() - 1;
            nav.go_to(last);
        }
    }

    if app.navigator.state().current_index != before.current_index {
        Effect::CardChanged
    } else {
        Effect::None
    }
}
