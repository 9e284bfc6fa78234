use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::action::Action;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardView, Indicators, NavBar, TitleBar, indicators};

const HELP_TEXT: &str = "←/→ move  Space flip  1-9 jump  Home/End  q quit";

/// Screen regions. Rendering and hit testing both go through this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub card: Rect,
    pub indicators: Option<Rect>,
    pub nav: Rect,
    pub help: Option<Rect>,
}

pub fn screen_layout(area: Rect, show_indicators: bool, show_help: bool) -> ScreenLayout {
    use Constraint::{Length, Min};
    let indicator_height = if show_indicators { 1 } else { 0 };
    let help_height = if show_help { 1 } else { 0 };
    let [title, card, indicators, nav, help] = Layout::vertical([
        Length(1),
        Min(0),
        Length(indicator_height),
        Length(3),
        Length(help_height),
    ])
    .areas(area);

    ScreenLayout {
        title,
        card,
        indicators: show_indicators.then_some(indicators),
        nav,
        help: show_help.then_some(help),
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Card,
    Previous,
    Flip,
    Next,
    Indicator(usize),
}

impl ClickTarget {
    pub fn action(self) -> Action {
        match self {
            ClickTarget::Card | ClickTarget::Flip => Action::ToggleFlip,
            ClickTarget::Previous => Action::Previous,
            ClickTarget::Next => Action::Next,
            ClickTarget::Indicator(index) => Action::GoTo(index),
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    tui.frame_area = frame.area();
    let layout = screen_layout(frame.area(), tui.show_indicators, tui.show_help);
    let view = app.navigator.view_state();

    TitleBar::new(&app.title, view.position, view.total).render(frame, layout.title);
    CardView::new(view.card, view.is_flipped, tui.is_pulsing(now)).render(frame, layout.card);
    if let Some(area) = layout.indicators {
        Indicators::new(view.total, view.position - 1).render(frame, area);
    }
    NavBar::new(view.is_first, view.is_last, view.is_flipped).render(frame, layout.nav);
    if let Some(area) = layout.help {
        let help = Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)))
            .centered();
        frame.render_widget(help, area);
    }
}

/// Hit test: given a screen position, find the control under it.
pub fn hit_test(col: u16, row: u16, layout: &ScreenLayout, total: usize) -> Option<ClickTarget> {
    let inside = |r: Rect| col >= r.x && col < r.right() && row >= r.y && row < r.bottom();

    if inside(layout.card) {
        return Some(ClickTarget::Card);
    }
    if let Some(area) = layout.indicators
        && let Some(index) = indicators::hit_test_dot(col, row, total, area)
    {
        return Some(ClickTarget::Indicator(index));
    }
    let [prev, flip, next] = NavBar::button_areas(layout.nav);
    if inside(prev) {
        Some(ClickTarget::Previous)
    } else if inside(flip) {
        Some(ClickTarget::Flip)
    } else if inside(next) {
        Some(ClickTarget::Next)
    } else {
        None
    }
}
