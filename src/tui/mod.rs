//! Terminal rendering: the host frame, picker components and mouse regions.

pub mod components;
pub mod interaction;
pub mod theme;
pub mod ui;
