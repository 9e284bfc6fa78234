//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Pulsing** (just after a card change): draws every ~30ms until the
//!   pulse expires, so the highlighted border clears on time.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Last drawn frame, for hit testing clicks between draws.
    pub frame_area: Rect,
    pub pulse: Duration,
    pub pulse_until: Option<Instant>,
    pub show_indicators: bool,
    pub show_help: bool,
}

impl TuiState {
    pub fn new(pulse: Duration, show_indicators: bool, show_help: bool) -> Self {
        Self {
            frame_area: Rect::default(),
            pulse,
            pulse_until: None,
            show_indicators,
            show_help,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            Duration::from_millis(config.pulse_ms),
            config.show_indicators,
            config.show_help,
        )
    }

    /// Presentation state for a fresh session. The first card opens with
    /// the same pulse as any later card change.
    pub fn opening(config: &ResolvedConfig, now: Instant) -> Self {
        let mut tui = Self::from_config(config);
        tui.start_pulse(now);
        tui
    }

    pub fn start_pulse(&mut self, now: Instant) {
        if !self.pulse.is_zero() {
            self.pulse_until = Some(now + self.pulse);
        }
    }

    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.pulse_until.is_some_and(|until| now < until)
    }

    /// Translate a terminal event into a core action.
    pub(crate) fn action_for(&self, event: TuiEvent, total: usize) -> Option<Action> {
        match event {
            TuiEvent::Quit => Some(Action::Quit),
            TuiEvent::Flip => Some(Action::ToggleFlip),
            TuiEvent::Previous => Some(Action::Previous),
            TuiEvent::Next => Some(Action::Next),
            TuiEvent::First => Some(Action::First),
            TuiEvent::Last => Some(Action::Last),
            TuiEvent::Jump(index) => Some(Action::GoTo(index)),
            TuiEvent::MouseClick(col, row) => {
                let layout =
                    ui::screen_layout(self.frame_area, self.show_indicators, self.show_help);
                let target = ui::hit_test(col, row, &layout, total);
                debug!("Click at ({}, {}) hit {:?}", col, row, target);
                target.map(ui::ClickTarget::action)
            }
            TuiEvent::Resize => None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(mut app: App, config: &ResolvedConfig) -> io::Result<()> {
    let mut tui = TuiState::opening(config, Instant::now());

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    let state = app.navigator.state();
    info!(
        "Exiting on card {} of {}",
        state.current_index + 1,
        app.navigator.len()
    );
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        let pulsing = tui.is_pulsing(now);
        if pulsing {
            needs_redraw = true;
        } else if tui.pulse_until.take().is_some() {
            // Pulse just expired: one more frame to clear the highlight
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui, now))?;
            needs_redraw = false;
        }

        let timeout = if pulsing {
            Duration::from_millis(30)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout)?;
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut pending = first_event;
        while let Some(event) = pending {
            if let Some(action) = tui.action_for(event, app.navigator.len()) {
                match update(app, action) {
                    Effect::Quit => return Ok(()),
                    Effect::CardChanged => tui.start_pulse(Instant::now()),
                    Effect::Flipped | Effect::None => {}
                }
            }
            pending = poll_event_immediate()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CliOverrides, FlashdeckConfig, resolve};

    fn tui() -> TuiState {
        let mut tui = TuiState::new(Duration::from_millis(150), true, true);
        tui.frame_area = Rect::new(0, 0, 80, 24);
        tui
    }

    #[test]
    fn test_pulse_lifecycle() {
        let mut tui = tui();
        let now = Instant::now();
        assert!(!tui.is_pulsing(now));

        tui.start_pulse(now);
        assert!(tui.is_pulsing(now));
        assert!(tui.is_pulsing(now + Duration::from_millis(149)));
        assert!(!tui.is_pulsing(now + Duration::from_millis(150)));
    }

    #[test]
    fn test_session_opens_with_pulse() {
        let config = resolve(&FlashdeckConfig::default(), CliOverrides::default());
        let now = Instant::now();
        let tui = TuiState::opening(&config, now);
        assert!(tui.is_pulsing(now));
        assert!(!tui.is_pulsing(now + Duration::from_millis(config.pulse_ms)));

        let quiet = ResolvedConfig {
            pulse_ms: 0,
            ..config
        };
        assert!(!TuiState::opening(&quiet, now).is_pulsing(now));
    }

    #[test]
    fn test_zero_pulse_never_pulses() {
        let mut tui = TuiState::new(Duration::ZERO, true, true);
        let now = Instant::now();
        tui.start_pulse(now);
        assert_eq!(tui.pulse_until, None);
        assert!(!tui.is_pulsing(now));
    }

    #[test]
    fn test_key_events_map_to_actions() {
        let tui = tui();
        assert_eq!(tui.action_for(TuiEvent::Flip, 8), Some(Action::ToggleFlip));
        assert_eq!(tui.action_for(TuiEvent::Next, 8), Some(Action::Next));
        assert_eq!(tui.action_for(TuiEvent::Previous, 8), Some(Action::Previous));
        assert_eq!(tui.action_for(TuiEvent::Jump(4), 8), Some(Action::GoTo(4)));
        assert_eq!(tui.action_for(TuiEvent::Last, 8), Some(Action::Last));
        assert_eq!(tui.action_for(TuiEvent::Quit, 8), Some(Action::Quit));
        assert_eq!(tui.action_for(TuiEvent::Resize, 8), None);
    }

    #[test]
    fn test_click_on_card_flips() {
        let tui = tui();
        assert_eq!(
            tui.action_for(TuiEvent::MouseClick(40, 5), 8),
            Some(Action::ToggleFlip)
        );
    }

    #[test]
    fn test_click_on_title_does_nothing() {
        let tui = tui();
        assert_eq!(tui.action_for(TuiEvent::MouseClick(40, 0), 8), None);
    }

    #[test]
    fn test_click_on_dot_jumps() {
        let tui = tui();
        let layout = ui::screen_layout(tui.frame_area, true, true);
        let cells = components::indicators::dot_cells(8, layout.indicators.unwrap());
        assert_eq!(
            tui.action_for(TuiEvent::MouseClick(cells[5].x, cells[5].y), 8),
            Some(Action::GoTo(5))
        );
    }
}
