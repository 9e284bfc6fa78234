//! # Indicators Component
//!
//! One dot per card, centered, the active card filled:
//!
//! ```text
//!                      ○ ○ ● ○ ○ ○ ○ ○
//! ```
//!
//! Each dot is clickable. When the deck has more cards than fit on one
//! line the row is left empty; progress is still shown in the title bar.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

const ACTIVE_DOT: &str = "●";
const DOT: &str = "○";
const GAP: u16 = 1;

pub struct Indicators {
    pub total: usize,
    /// 0-based.
    pub active: usize,
}

impl Indicators {
    pub fn new(total: usize, active: usize) -> Self {
        Self { total, active }
    }
}

/// Screen cell of every dot, or empty when the row does not fit.
pub fn dot_cells(total: usize, area: Rect) -> Vec<Rect> {
    let dot_width = DOT.width().max(ACTIVE_DOT.width());
    if total == 0 || area.height == 0 {
        return Vec::new();
    }
    // Widths in usize: a large deck must not overflow u16 before the check
    let row_width = total
        .checked_mul(dot_width)
        .and_then(|dots| dots.checked_add((total - 1) * GAP as usize));
    let row_width = match row_width.and_then(|w| u16::try_from(w).ok()) {
        Some(width) if width <= area.width => width,
        _ => return Vec::new(),
    };
    let (dot_width, count) = (dot_width as u16, total as u16);
    let start = area.x + (area.width - row_width) / 2;
    (0..count)
        .map(|i| Rect::new(start + i * (dot_width + GAP), area.y, dot_width, 1))
        .collect()
}

/// Which dot, if any, sits at screen column `col` on row `row`.
pub fn hit_test_dot(col: u16, row: u16, total: usize, area: Rect) -> Option<usize> {
    dot_cells(total, area)
        .iter()
        .position(|cell| row == cell.y && col >= cell.x && col < cell.right())
}

impl Component for Indicators {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cells = dot_cells(self.total, area);
        for (index, cell) in cells.into_iter().enumerate() {
            let span = if index == self.active {
                Span::styled(
                    ACTIVE_DOT,
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(DOT, Style::default().fg(Color::DarkGray))
            };
            frame.render_widget(Line::from(span), cell);
        }
    }
}
