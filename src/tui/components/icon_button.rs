//! Closed-state icon button.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::events::Action;
use crate::tui::interaction::ClickRegion;
use crate::tui::theme::*;

use super::{centered_rect, truncate};

/// Button size in pixels.
const BUTTON_PX: u32 = 96;

/// Render the button that shows the selected icon and opens the picker.
pub fn render_icon_button(frame: &mut Frame, area: Rect, app: &mut App) {
    let width = app.cell_metrics.columns_for(BUTTON_PX).max(5);
    let height = app.cell_metrics.rows_for(BUTTON_PX).max(3);
    // One extra line below the button for the icon name
    let outer = centered_rect(area, width, height.saturating_add(1));
    let button_area = Rect::new(outer.x, outer.y, outer.width, outer.height.saturating_sub(1));

    let border_color = if app.picker.is_open() { LOGO_LIGHT_BLUE } else { BORDER_GRAY };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(border_color))
        .style(Style::new().bg(Color::Black));

    let inner_height = button_area.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = vec![Line::raw(""); inner_height.saturating_sub(1) / 2];
    if let Some(icon) = app.picker.selected_icon() {
        lines.push(Line::styled(icon.glyph(), Style::new().fg(TEXT_WHITE).bold()));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, button_area);

    // Icon name, or a hint when nothing is selected yet
    let caption_area = Rect::new(outer.x, button_area.bottom(), outer.width, 1)
        .intersection(area);
    let caption = match app.picker.selected_icon() {
        Some(icon) => Line::styled(
            truncate(icon.name(), outer.width as usize),
            Style::new().fg(LOGO_LIGHT_BLUE),
        ),
        None => Line::styled(truncate("no icon", outer.width as usize), Style::new().fg(TEXT_DIM)),
    };
    frame.render_widget(
        Paragraph::new(caption).alignment(Alignment::Center),
        caption_area,
    );

    app.interactions.register_click(
        "icon_button",
        ClickRegion::from(button_area),
        Action::TogglePicker,
    );
}
