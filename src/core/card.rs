//! # Cards
//!
//! A card is an immutable study record. The front shows a single term; the
//! back explains it with a description, an example, and a note.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the subject of a card is still in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Status {
    Current,
    Deprecated,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Current => "Current",
            Status::Deprecated => "Deprecated",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Card {
    pub front: String,
    pub status: Status,
    pub description: String,
    pub example: String,
    pub note: String,
}

impl Card {
    pub fn new(
        front: impl Into<String>,
        status: Status,
        description: impl Into<String>,
        example: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            front: front.into(),
            status,
            description: description.into(),
            example: example.into(),
            note: note.into(),
        }
    }
}
