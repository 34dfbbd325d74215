use crate::events::Action;
use crate::icons::{Catalog, Icon};
use crate::log;
use crate::picker::{CellMetrics, IconPicker, Paginated, PickerLayout};
use crate::scroll::ScrollHelper;
use crate::tui::interaction::InteractionRegistry;

/// Host state: the mounted picker plus everything the terminal loop needs.
pub struct App {
    pub picker: IconPicker,
    pub cell_metrics: CellMetrics,
    pub interactions: InteractionRegistry,
    pub scroll: ScrollHelper,
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, layout: PickerLayout, cell_metrics: CellMetrics) -> Self {
        Self {
            picker: IconPicker::new(catalog, layout),
            cell_metrics,
            interactions: InteractionRegistry::new(),
            scroll: ScrollHelper::default(),
            should_quit: false,
        }
    }

    /// The chosen icon, if any.
    pub fn selected_icon(&self) -> Option<Icon> {
        self.picker.selected_icon()
    }

    /// Apply an action to the app state.
    pub fn dispatch(&mut self, action: Action) {
        if action.is_loggable() {
            log::log_event(&format!("{:?}", action));
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePicker => {
                self.picker.toggle();
                self.scroll.reset();
            }
            Action::SelectIcon(icon) => self.picker.select(icon),
            Action::SelectAtCursor => {
                if let Some(icon) = self.picker.select_at_cursor() {
                    log::log(&format!("Selected {} from cursor", icon));
                }
            }
            Action::MoveCursor(direction) => self.picker.move_cursor(direction),
            Action::PrevPage => {
                if self.picker.prev_page() {
                    self.scroll.reset();
                }
            }
            Action::NextPage => {
                if self.picker.next_page() {
                    self.scroll.reset();
                }
            }
            Action::ScrollGrid(notches) => {
                if let Some(rows) = self.scroll.accumulate(notches) {
                    self.picker.scroll_grid(rows);
                }
            }
            Action::None => {}
        }
    }

    #[cfg(test)]
    pub fn for_tests(catalog_len: usize) -> Self {
        let icons = Icon::ALL.iter().copied().cycle().take(catalog_len).collect();
        let layout = PickerLayout::new(6, 6, 48, 48).expect("valid layout");
        Self::new(Catalog::new(icons), layout, CellMetrics::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_scenario_preserves_page() {
        let mut app = App::new(
            Catalog::bundled(),
            PickerLayout::new(6, 6, 48, 48).unwrap(),
            CellMetrics::default(),
        );

        app.dispatch(Action::TogglePicker);
        app.dispatch(Action::NextPage);
        app.dispatch(Action::SelectIcon(Icon::Home));
        assert_eq!(app.selected_icon(), Some(Icon::Home));
        assert!(!app.picker.is_open());

        app.dispatch(Action::TogglePicker);
        assert!(app.picker.is_open());
        assert_eq!(app.picker.current_page(), 1);
    }

    #[test]
    fn test_page_actions_are_clamped() {
        let mut app = App::for_tests(50);
        app.dispatch(Action::TogglePicker);
        app.dispatch(Action::PrevPage);
        assert_eq!(app.picker.current_page(), 0);

        app.dispatch(Action::NextPage);
        app.dispatch(Action::NextPage);
        assert_eq!(app.picker.current_page(), 1);
    }

    #[test]
    fn test_select_at_cursor() {
        let mut app = App::for_tests(50);
        app.dispatch(Action::TogglePicker);
        app.dispatch(Action::MoveCursor(crate::picker::CursorMove::Right));
        app.dispatch(Action::SelectAtCursor);
        assert_eq!(app.selected_icon(), Some(Icon::ALL[1]));
        assert!(!app.picker.is_open());
    }

    #[test]
    fn test_quit() {
        let mut app = App::for_tests(1);
        assert!(!app.should_quit);
        app.dispatch(Action::Quit);
        assert!(app.should_quit);
    }
}
