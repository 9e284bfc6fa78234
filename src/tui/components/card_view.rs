//! # CardView Component
//!
//! The card itself. The front shows the term and its status badge; the
//! back shows description, example, and note.
//!
//! ```text
//! ┌ Front ─────────────────────────┐   ┌ Back ──────────────────────────┐
//! │                                │   │ Description                    │
//! │           <marquee>            │   │   Used to scroll text ...      │
//! │          [Deprecated]          │   │ Example                        │
//! │                                │   │   <marquee>...</marquee>       │
//! │       click or Space to flip   │   │ Note                           │
//! └────────────────────────────────┘   │   Creates scrolling text ...   │
//!                                      └────────────────────────────────┘
//! ```
//!
//! `pulsing` highlights the border for a moment after the card changes.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::card::{Card, Status};
use crate::tui::component::Component;

pub struct CardView<'a> {
    pub card: &'a Card,
    pub is_flipped: bool,
    pub pulsing: bool,
}

impl<'a> CardView<'a> {
    pub fn new(card: &'a Card, is_flipped: bool, pulsing: bool) -> Self {
        Self {
            card,
            is_flipped,
            pulsing,
        }
    }

    fn block(&self) -> Block<'static> {
        let border_style = if self.pulsing {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let side = if self.is_flipped { " Back " } else { " Front " };
        Block::bordered()
            .title(side)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
    }

    fn render_front(&self, frame: &mut Frame, inner: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.card.front.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!(" {} ", self.card.status.label()),
                status_style(self.card.status),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "click or Space to flip",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let height = lines.len() as u16;
        let [center] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(inner);
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, center);
    }

    fn render_back(&self, frame: &mut Frame, inner: Rect) {
        let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(vec![
                Span::styled(self.card.front.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(
                    format!(" {} ", self.card.status.label()),
                    status_style(self.card.status),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled("Description", heading)),
            Line::from(format!("  {}", self.card.description)),
            Line::from(""),
            Line::from(Span::styled("Example", heading)),
            Line::from(Span::styled(
                format!("  {}", self.card.example),
                Style::default().fg(Color::Green),
            )),
            Line::from(""),
            Line::from(Span::styled("Note", heading)),
            Line::from(Span::styled(
                format!("  {}", self.card.note),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}

impl Component for CardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = self.block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.is_flipped {
            self.render_back(frame, inner);
        } else {
            self.render_front(frame, inner);
        }
    }
}

/// Badge colors: red for deprecated, green for current.
pub fn status_style(status: Status) -> Style {
    match status {
        Status::Deprecated => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        Status::Current => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    }
}
