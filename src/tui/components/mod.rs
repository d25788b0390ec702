// Components module - UI building blocks
//
// - Title bar: app name and theme
// - Carousel panel: arrows, slide strip, dots
// - Status bar: rotation state and next timer
// - Logs panel: recent log entries
//
// Each component is a focused, single-responsibility module.

pub mod carousel_panel;
pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;
