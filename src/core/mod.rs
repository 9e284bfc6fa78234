//! # Core Application Logic
//!
//! This module contains flashdeck's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • CardNavigator        │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`card`]: `Card` and `Status`
//! - [`deck`]: the built-in deck and JSON deck loading
//! - [`navigator`]: the `(index, flipped)` state machine
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: `~/.flashdeck/config.toml` and resolution

pub mod action;
pub mod card;
pub mod config;
pub mod deck;
pub mod navigator;
pub mod state;
