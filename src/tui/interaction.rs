//! Component-level mouse interactivity.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the highest-priority region under the pointer.
//!
//! # Example
//!
//! ```ignore
//! registry.register(
//!     InteractiveRegion::clickable("icon_cell", ClickRegion::new(x, y, w, h), Action::SelectIcon(icon))
//!         .with_priority(POPUP_PRIORITY),
//! );
//! ```

use ratatui::layout::Rect;

use crate::events::Action;

/// Priority of the closed-state button and other base content.
pub const BASE_PRIORITY: i32 = 0;

/// Priority of the open picker panel, above the button it covers.
pub const POPUP_PRIORITY: i32 = 10;

/// Rectangular screen area in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is within this region
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Higher priority regions are checked first
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: BASE_PRIORITY,
        }
    }

    /// Create a new scrollable region
    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: BASE_PRIORITY,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register a simple clickable region at base priority
    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    /// Number of registered regions
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Regions registered under `id`
    #[allow(dead_code)]
    pub fn regions_with_id<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a InteractiveRegion> {
        self.regions.iter().filter(move |r| r.id == id)
    }

    /// Action for a click at (x, y).
    ///
    /// The highest-priority region containing the point decides, even when its
    /// action is `Action::None`; this lets a popup swallow clicks on its own
    /// background instead of passing them to what lies underneath.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.top_action(x, y, |r| r.on_click)
    }

    /// Action for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.top_action(x, y, |r| r.on_scroll_up)
    }

    /// Action for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.top_action(x, y, |r| r.on_scroll_down)
    }

    fn top_action(
        &self,
        x: u16,
        y: u16,
        handler: impl Fn(&InteractiveRegion) -> Option<Action>,
    ) -> Action {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .filter_map(|r| handler(r).map(|action| (r.priority, action)))
            // Later registrations win ties, matching draw order
            .max_by_key(|(priority, _)| *priority)
            .map(|(_, action)| action)
            .unwrap_or(Action::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::Icon;

    #[test]
    fn test_region_contains() {
        let region = ClickRegion::new(10, 10, 20, 10);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_region_at_screen_edge_does_not_overflow() {
        let region = ClickRegion::new(u16::MAX - 1, 0, 5, 1);
        assert!(region.contains(u16::MAX, 0));
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        registry.register_click(
            "placeholder",
            ClickRegion::new(0, 0, 100, 100),
            Action::TogglePicker,
        );
        registry.register(
            InteractiveRegion::clickable(
                "icon_cell",
                ClickRegion::new(20, 20, 10, 10),
                Action::SelectIcon(Icon::Home),
            )
            .with_priority(POPUP_PRIORITY),
        );

        assert_eq!(registry.handle_click(25, 25), Action::SelectIcon(Icon::Home));
        assert_eq!(registry.handle_click(5, 5), Action::TogglePicker);
        assert_eq!(registry.handle_click(200, 200), Action::None);
    }

    #[test]
    fn test_popup_background_swallows_clicks() {
        let mut registry = InteractionRegistry::new();
        registry.register_click(
            "placeholder",
            ClickRegion::new(0, 0, 100, 100),
            Action::TogglePicker,
        );
        registry.register(
            InteractiveRegion::clickable("picker_panel", ClickRegion::new(10, 10, 50, 50), Action::None)
                .with_priority(POPUP_PRIORITY),
        );

        assert_eq!(registry.handle_click(20, 20), Action::None);
    }

    #[test]
    fn test_scroll_regions() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::scrollable(
            "icon_grid",
            ClickRegion::new(0, 0, 10, 10),
            Action::ScrollGrid(-1),
            Action::ScrollGrid(1),
        ));

        assert_eq!(registry.handle_scroll_up(1, 1), Action::ScrollGrid(-1));
        assert_eq!(registry.handle_scroll_down(1, 1), Action::ScrollGrid(1));
        assert_eq!(registry.handle_click(1, 1), Action::None);
        assert_eq!(registry.len(), 1);
    }
}
