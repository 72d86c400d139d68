//! Color configuration and envelope palettes.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Create a ColorConfig with an explicit setting, bypassing the
    /// environment.
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Styles for each layer of the envelope scene.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Envelope back panel border.
    pub envelope: Style,
    /// Front pocket diagonals.
    pub front: Style,
    /// Flap diagonals.
    pub flap: Style,
    /// Letter paper (border and background of the letter card).
    pub paper: Style,
    /// Accents: letter title, zoomed border.
    pub accent: Style,
    /// Letter body text.
    pub ink: Style,
    /// Status-bar key hints.
    pub hint: Style,
}

impl Theme {
    /// Resolve a theme by name.
    ///
    /// Known names: `classic` (warm paper tones), `midnight` (cool blues),
    /// `mono` (no colors). Unknown names fall back to `classic`; disabled
    /// colors force `mono` regardless of the name.
    pub fn from_name(name: &str, colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            return Self::mono();
        }
        match name {
            "midnight" => Self::midnight(),
            "mono" => Self::mono(),
            _ => Self::classic(),
        }
    }

    fn classic() -> Self {
        Self {
            envelope: Style::default().fg(Color::Yellow),
            front: Style::default().fg(Color::LightYellow),
            flap: Style::default().fg(Color::Yellow),
            paper: Style::default().fg(Color::White),
            accent: Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
            ink: Style::default().fg(Color::Gray),
            hint: Style::default().fg(Color::DarkGray),
        }
    }

    fn midnight() -> Self {
        Self {
            envelope: Style::default().fg(Color::Blue),
            front: Style::default().fg(Color::LightBlue),
            flap: Style::default().fg(Color::Blue),
            paper: Style::default().fg(Color::White),
            accent: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ink: Style::default().fg(Color::Gray),
            hint: Style::default().fg(Color::DarkGray),
        }
    }

    fn mono() -> Self {
        Self {
            envelope: Style::default(),
            front: Style::default(),
            flap: Style::default(),
            paper: Style::default(),
            accent: Style::default().add_modifier(Modifier::BOLD),
            ink: Style::default(),
            hint: Style::default().add_modifier(Modifier::DIM),
        }
    }
}
