//! TUI rendering and terminal management (impure shell).

pub mod easing;
pub mod envelope;
mod help;
pub mod styles;

pub use envelope::{EnvelopeView, FrameSnapshot};
pub use help::render_help_overlay;
pub use styles::{ColorConfig, Theme};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::KeyAction;
use crate::sched::{Clock, SystemClock};
use crate::state::EnvelopeAnimator;
use crate::view::envelope::rect_contains;
use crossterm::{
    event::{self, Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Animation frame interval: the event loop wakes this often while a
/// sequence is in flight (~30fps).
const TICK_INTERVAL: Duration = Duration::from_millis(33);

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application.
///
/// Generic over the backend (TestBackend in tests) and the clock
/// (manually advanced in tests).
pub struct TuiApp<B, C>
where
    B: ratatui::backend::Backend,
    C: Clock,
{
    terminal: Terminal<B>,
    animator: EnvelopeAnimator,
    clock: C,
    key_bindings: KeyBindings,
    theme: Theme,
    help_visible: bool,
    /// Envelope rect from the last frame, for click detection.
    last_envelope_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>, SystemClock> {
    /// Create and initialize a TUI application on the real terminal.
    ///
    /// Sets up raw mode, the alternate screen, and mouse capture.
    pub fn new(config: &ResolvedConfig, theme: Theme) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let mut app = Self::with_terminal(terminal, SystemClock, config);
        app.set_theme(theme);
        if config.auto_open {
            let now = app.clock.now();
            app.animator.open(now);
        }
        Ok(app)
    }
}

impl<B, C> TuiApp<B, C>
where
    B: ratatui::backend::Backend,
    C: Clock,
{
    /// Assemble an application around an existing terminal and clock.
    ///
    /// This is the constructor tests use with `TestBackend` and a manual
    /// clock; [`TuiApp::new`] wraps it for the real terminal.
    pub fn with_terminal(terminal: Terminal<B>, clock: C, config: &ResolvedConfig) -> Self {
        let colors = ColorConfig::from_env_and_args(false);
        Self {
            terminal,
            animator: EnvelopeAnimator::new(config.timings),
            clock,
            key_bindings: KeyBindings::default(),
            theme: Theme::from_name(&config.theme, colors),
            help_visible: false,
            last_envelope_area: None,
        }
    }

    /// Replace the theme (the real-terminal path resolves it from CLI
    /// flags before constructing).
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// The animation core, for assertions in tests.
    pub fn animator(&self) -> &EnvelopeAnimator {
        &self.animator
    }

    /// The wrapped terminal, so tests can inspect the rendered buffer.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Run the main event loop. Returns when the user quits.
    ///
    /// Event-driven: input redraws immediately; timer ticks redraw only
    /// while something is animating, so an idle envelope costs nothing.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;
        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        self.draw()?;
                    }
                    Event::Resize(_, _) => {
                        self.draw()?;
                    }
                    _ => {}
                }
            } else if self.on_tick() {
                self.draw()?;
            }
        }
    }

    /// Advance the animation clock by one poll timeout. Returns whether a
    /// redraw is needed.
    pub fn on_tick(&mut self) -> bool {
        let now = self.clock.now();
        let fired = self.animator.tick(now);
        fired > 0 || self.animator.is_animating(now)
    }

    /// Handle a key event. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        let now = self.clock.now();
        match action {
            KeyAction::Open => self.animator.open(now),
            KeyAction::Reset => self.animator.reset(now),
            KeyAction::ToggleZoom => self.animator.toggle_zoom(now),
            KeyAction::ToggleHelp => self.help_visible = !self.help_visible,
            KeyAction::Quit => return true,
        }
        false
    }

    /// Handle a mouse event.
    ///
    /// A left click on the revealed letter toggles the zoom and is
    /// consumed there — it never falls through to the envelope's open
    /// handler. A click on the envelope starts the reveal.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.help_visible {
            self.help_visible = false;
            return;
        }
        let now = self.clock.now();
        let (x, y) = (mouse.column, mouse.row);
        let view = *self.animator.view();

        let on_letter = self
            .animator
            .letter_rect()
            .is_some_and(|rect| rect_contains(rect, x, y));
        if on_letter && (view.letter_above || view.zoomed) {
            debug!(x, y, "click on letter: toggling zoom");
            self.animator.toggle_zoom(now);
            return;
        }

        let on_envelope = self
            .last_envelope_area
            .is_some_and(|rect| rect_contains(rect, x, y));
        if on_envelope {
            debug!(x, y, "click on envelope: opening");
            self.animator.open(now);
        }
    }

    /// Draw one frame and feed the drawn geometry back to the animator.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let now = self.clock.now();
        let view = EnvelopeView::new(&self.animator, &self.theme, now);
        let help_visible = self.help_visible;
        let mut snapshot = FrameSnapshot::default();
        self.terminal.draw(|frame| {
            snapshot = view.render(frame);
            if help_visible {
                render_help_overlay(frame);
            }
        })?;
        self.last_envelope_area = Some(snapshot.envelope);
        self.animator
            .observe_frame(snapshot.letter, snapshot.viewport, snapshot.slide_fraction, now);
        Ok(())
    }

    /// Cancel every pending animation step. Called on the way out so no
    /// step fires into a torn-down terminal.
    pub fn detach(&mut self) {
        self.animator.detach();
    }
}

/// Run the application on the real terminal until the user quits,
/// restoring the terminal state afterwards.
pub fn run(config: &ResolvedConfig, theme: Theme) -> Result<(), TuiError> {
    let mut app = TuiApp::new(config, theme)?;
    let result = app.run();
    app.detach();

    // Always restore terminal state, even when the loop errored.
    restore_terminal()?;
    result
}

fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
