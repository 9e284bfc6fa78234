//! # NavBar Component
//!
//! Prev / Flip / Next buttons under the card.
//!
//! ```text
//! ┌──────────┐        ┌─────────────┐        ┌──────────┐
//! │  ◀ Prev  │        │  Flip Card  │        │  Next ▶  │
//! └──────────┘        └─────────────┘        └──────────┘
//! ```
//!
//! Prev is drawn disabled on the first card and Next on the last. A click on
//! a disabled button still reaches the navigator, where it is a no-op.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

const BUTTON_WIDTH: u16 = 15;

pub struct NavBar {
    pub is_first: bool,
    pub is_last: bool,
    pub is_flipped: bool,
}

impl NavBar {
    pub fn new(is_first: bool, is_last: bool, is_flipped: bool) -> Self {
        Self {
            is_first,
            is_last,
            is_flipped,
        }
    }

    pub fn flip_label(is_flipped: bool) -> &'static str {
        if is_flipped { "Flip Back" } else { "Flip Card" }
    }

    /// Button cells for `[prev, flip, next]`. Shared by render and hit testing.
    pub fn button_areas(area: Rect) -> [Rect; 3] {
        Layout::horizontal([Constraint::Length(BUTTON_WIDTH); 3])
            .flex(Flex::SpaceBetween)
            .areas(area)
    }

    fn button(label: &str, enabled: bool) -> Paragraph<'_> {
        let (text_style, border_style) = if enabled {
            (
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Gray),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )
        };
        Paragraph::new(label)
            .style(text_style)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(border_style))
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [prev, flip, next] = Self::button_areas(area);
        frame.render_widget(Self::button("◀ Prev", !self.is_first), prev);
        frame.render_widget(Self::button(Self::flip_label(self.is_flipped), true), flip);
        frame.render_widget(Self::button("Next ▶", !self.is_last), next);
    }
}
