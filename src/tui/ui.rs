use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use super::components::{render_icon_button, render_icon_picker};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Regions are rebuilt from scratch every frame
    app.interactions.clear();

    // Main vertical layout: logo, content, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2),  // Logo + spacing
        Constraint::Min(0),     // Content
        Constraint::Length(1),  // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);

    render_icon_button(frame, main_layout[1], app);
    if app.picker.is_open() {
        render_icon_picker(frame, main_layout[1], app);
    }

    render_hotkeys(frame, main_layout[2], app);
}

fn render_logo(frame: &mut Frame, area: Rect) {
    let name = "iconpick";
    let colors = [LOGO_CORAL, LOGO_GOLD, LOGO_LIGHT_BLUE, LOGO_MINT];

    let padding = (area.width as usize).saturating_sub(name.len()) / 2;
    let mut spans = vec![Span::raw(" ".repeat(padding))];
    spans.extend(name.chars().zip(colors.iter().cycle()).map(|(c, color)| {
        Span::styled(c.to_string(), Style::new().fg(*color).bold())
    }));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let keys: &[(&str, &str)] = if app.picker.is_open() {
        &[
            ("[←↑↓→]", " move · "),
            ("[Enter]", " select · "),
            ("[[/]]", " page · "),
            ("[Esc]", " close · "),
            ("[q]", " quit"),
        ]
    } else {
        &[("[Enter]", " open picker · "), ("[q]", " quit")]
    };

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, Style::new().fg(TEXT_WHITE)),
                Span::styled(*label, Style::new().fg(TEXT_DIM)),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
