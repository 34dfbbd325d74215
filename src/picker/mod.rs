//! Icon picker widget state
//!
//! `traits` holds the generic paging arithmetic, `layout` the validated size
//! parameters and `state` the picker itself.

mod layout;
mod state;
mod traits;

pub use layout::{CellMetrics, DEFAULT_PICKER_HEIGHT, DEFAULT_PICKER_WIDTH, PickerLayout};
pub use state::{CursorMove, IconPicker};
pub use traits::Paginated;
