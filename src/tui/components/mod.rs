//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `icon_button` - Closed-state button showing the selected icon
//! - `icon_picker` - Open picker panel: header, pagination bar and icon grid

mod icon_button;
mod icon_picker;

pub use icon_button::render_icon_button;
pub use icon_picker::render_icon_picker;

use ratatui::layout::Rect;

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Truncate `text` to `max_chars` characters, ending in an ellipsis when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max_chars - 1).collect();
    cut.push('…');
    cut
}
