//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged or replayed.

use crate::icons::Icon;
use crate::picker::CursorMove;

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,

    // === Picker ===
    /// Open the picker if closed, close it if open
    TogglePicker,
    /// Select an icon and close the picker
    SelectIcon(Icon),
    /// Select the icon under the keyboard cursor
    SelectAtCursor,
    /// Move the keyboard cursor
    MoveCursor(CursorMove),

    // === Pagination ===
    /// Go to the previous page
    PrevPage,
    /// Go to the next page
    NextPage,

    // === Scrolling ===
    /// Wheel notches over the grid (negative is up)
    ScrollGrid(i32),

    // === No-op ===
    /// No action to take
    None,
}

impl Action {
    /// Whether this action is worth a log line.
    pub fn is_loggable(&self) -> bool {
        !matches!(self, Action::None | Action::MoveCursor(_) | Action::ScrollGrid(_))
    }
}
