//! # TitleBar Component
//!
//! Top line: deck title on the left, progress on the right.
//!
//! ```text
//! flashdeck · HTML Tags                                    Card 3 / 8
//! ```
//!
//! Purely presentational. When the terminal is too narrow the deck title
//! is truncated first; the progress text always stays visible.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub struct TitleBar<'a> {
    pub title: &'a str,
    pub position: usize,
    pub total: usize,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: &'a str, position: usize, total: usize) -> Self {
        Self {
            title,
            position,
            total,
        }
    }

    fn progress_text(&self) -> String {
        format!("Card {} / {}", self.position, self.total)
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let progress = self.progress_text();
        let progress_width = progress.width() as u16;
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(progress_width)])
                .areas(area);

        let prefix = "flashdeck · ";
        let title_room = (left.width as usize)
            .saturating_sub(prefix.width())
            .saturating_sub(1);
        let title = Line::from(vec![
            Span::styled(prefix, Style::default().fg(Color::DarkGray)),
            Span::styled(
                truncate_to_width(self.title, title_room),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);

        frame.render_widget(title, left);
        frame.render_widget(
            Line::from(Span::styled(progress, Style::default().fg(Color::Cyan))).right_aligned(),
            right,
        );
    }
}

/// Truncate to at most `max_width` display columns, ending in "…" when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(width: u16, bar: &mut TitleBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_shows_title_and_progress() {
        let mut bar = TitleBar::new("HTML Tags", 3, 8);
        let text = rendered(60, &mut bar);
        assert!(text.contains("flashdeck"));
        assert!(text.contains("HTML Tags"));
        assert!(text.contains("Card 3 / 8"));
    }

    #[test]
    fn test_narrow_title_bar_keeps_progress() {
        let mut bar = TitleBar::new("A very long deck title that cannot fit", 1, 8);
        let text = rendered(30, &mut bar);
        assert!(text.contains("Card 1 / 8"));
        assert!(!text.contains("cannot fit"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 0), "");
        // Wide characters count as two columns
        assert_eq!(truncate_to_width("漢字漢字", 5), "漢字…");
    }
}
