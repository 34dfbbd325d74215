//! Icon picker panel component.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::app::App;
use crate::events::Action;
use crate::icons::{self, Icon};
use crate::picker::Paginated;
use crate::tui::interaction::{ClickRegion, InteractiveRegion, POPUP_PRIORITY};
use crate::tui::theme::*;

/// Priority of controls inside the panel, above the panel background.
const CONTROL_PRIORITY: i32 = POPUP_PRIORITY + 1;

/// Gap between grid cells, in terminal cells.
const GRID_GAP: u16 = 1;

/// Render the open picker as a centered popup.
pub fn render_icon_picker(frame: &mut Frame, area: Rect, app: &mut App) {
    let (panel_width, panel_height) = app.picker.layout().picker_cells(app.cell_metrics);
    let popup_area = super::centered_rect(area, panel_width, panel_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    // Clicks on the panel background must not reach the button underneath
    app.interactions.register(
        InteractiveRegion::clickable("picker_panel", ClickRegion::from(popup_area), Action::None)
            .with_priority(POPUP_PRIORITY),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_LIGHT_BLUE))
        .style(Style::new().bg(Color::Black));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let sections = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(1), // Separator
        Constraint::Length(1), // Pagination bar
        Constraint::Length(1), // Spacing
        Constraint::Min(0),    // Grid
    ])
    .split(inner);

    render_header(frame, sections[0], app);
    frame.render_widget(
        Paragraph::new(Line::styled(
            "─".repeat(sections[1].width as usize),
            Style::new().fg(TEXT_DIM),
        )),
        sections[1],
    );
    render_pagination(frame, sections[2], app);
    render_grid(frame, sections[4], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let [title_area, close_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Select an Icon",
            Style::new().fg(TEXT_WHITE).bold(),
        )),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(icons::CLOSE.glyph(), Style::new().fg(TEXT_WHITE)))
            .alignment(Alignment::Center),
        close_area,
    );

    app.interactions.register(
        InteractiveRegion::clickable("close", ClickRegion::from(close_area), Action::TogglePicker)
            .with_priority(CONTROL_PRIORITY),
    );
}

fn render_pagination(frame: &mut Frame, area: Rect, app: &mut App) {
    let [prev_area, label_area, next_area] = Layout::horizontal([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);

    let label = format!(
        "Page {} of {}",
        app.picker.current_page() + 1,
        app.picker.total_pages()
    );
    frame.render_widget(
        Paragraph::new(Line::styled(label, Style::new().fg(TEXT_WHITE)))
            .alignment(Alignment::Center),
        label_area,
    );

    let has_prev = app.picker.has_prev_page();
    let has_next = app.picker.has_next_page();
    render_page_control(frame, prev_area, app, icons::PREV, has_prev.then_some(Action::PrevPage));
    render_page_control(frame, next_area, app, icons::NEXT, has_next.then_some(Action::NextPage));
}

/// Draw a page control; `None` renders it dimmed and without a click region.
fn render_page_control(frame: &mut Frame, area: Rect, app: &mut App, glyph: Icon, action: Option<Action>) {
    let style = match action {
        Some(_) => Style::new().fg(Color::Black).bg(CONTROL_GRAY),
        None => Style::new().fg(TEXT_DIM),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {} ", glyph.glyph()), style)))
            .alignment(Alignment::Center),
        area,
    );

    if let Some(action) = action {
        let id = if action == Action::PrevPage { "prev_page" } else { "next_page" };
        app.interactions.register(
            InteractiveRegion::clickable(id, ClickRegion::from(area), action)
                .with_priority(CONTROL_PRIORITY),
        );
    }
}

fn render_grid(frame: &mut Frame, area: Rect, app: &mut App) {
    if area.is_empty() {
        return;
    }

    let page: Vec<Icon> = app.picker.page_items().to_vec();
    if page.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled("(no icons)", Style::new().fg(TEXT_DIM)))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let columns = app.picker.layout().columns_in_one_page();
    let (cell_width, cell_height) = app.picker.layout().icon_cells(app.cell_metrics);
    let row_pitch = cell_height.saturating_add(GRID_GAP);
    let col_pitch = cell_width.saturating_add(GRID_GAP);

    // Rows that fit, counting the gap after all but the last one
    let visible_rows = (area.height.saturating_add(GRID_GAP) / row_pitch).max(1) as usize;
    app.picker.set_grid_viewport(visible_rows);
    let first_row = app.picker.grid_scroll();
    let total_rows = app.picker.page_rows();

    // Keep one column free for the scrollbar when the grid overflows
    let overflow = total_rows > visible_rows;
    let usable_width = if overflow { area.width.saturating_sub(1) } else { area.width };
    let grid_width = u16::try_from(columns)
        .unwrap_or(u16::MAX)
        .saturating_mul(col_pitch)
        .saturating_sub(GRID_GAP);
    let x0 = area.x + usable_width.saturating_sub(grid_width) / 2;
    let clip = Rect::new(area.x, area.y, usable_width, area.height);

    app.interactions.register(
        InteractiveRegion::scrollable(
            "icon_grid",
            ClickRegion::from(area),
            Action::ScrollGrid(-1),
            Action::ScrollGrid(1),
        )
        .with_priority(POPUP_PRIORITY),
    );

    let cursor = app.picker.cursor();
    for (index, icon) in page.iter().copied().enumerate() {
        let row = index / columns;
        let column = index % columns;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }

        let x = (column as u64)
            .saturating_mul(u64::from(col_pitch))
            .saturating_add(u64::from(x0));
        let y = ((row - first_row) as u64)
            .saturating_mul(u64::from(row_pitch))
            .saturating_add(u64::from(area.y));
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            continue;
        };
        let cell = Rect::new(x, y, cell_width, cell_height).intersection(clip);
        if cell.is_empty() {
            continue;
        }

        render_cell(frame, cell, icon, index == cursor);
        app.interactions.register(
            InteractiveRegion::clickable("icon_cell", ClickRegion::from(cell), Action::SelectIcon(icon))
                .with_priority(CONTROL_PRIORITY),
        );
    }

    if overflow {
        let mut state = ScrollbarState::new(total_rows.saturating_sub(visible_rows) + 1)
            .position(first_row)
            .viewport_content_length(visible_rows);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            area,
            &mut state,
        );
    }
}

fn render_cell(frame: &mut Frame, area: Rect, icon: Icon, is_cursor: bool) {
    let style = if is_cursor {
        Style::new().fg(TEXT_WHITE).bg(CELL_BLUE_LIGHT).bold()
    } else {
        Style::new().fg(TEXT_WHITE).bg(CELL_BLUE)
    };

    let mut lines: Vec<Line> = vec![Line::raw(""); (area.height.saturating_sub(1) / 2) as usize];
    lines.push(Line::raw(icon.glyph()));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).style(style),
        area,
    );
}
