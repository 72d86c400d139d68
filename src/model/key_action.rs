//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`crate::config::KeyBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Start (or restart) the reveal sequence. Default: Enter/Space/o
    Open,
    /// Play the choreography in reverse back to the closed state. Default: r
    Reset,
    /// Toggle the letter zoom while the letter is revealed. Default: z
    ToggleZoom,
    /// Show or hide the help overlay. Default: ?
    ToggleHelp,
    /// Quit the application. Default: q/Esc/Ctrl+C
    Quit,
}
