//! Terminal UI module using ratatui.
//!
//! - `render`: Main frame rendering, layout and overlays
//! - `input`: Keyboard and mouse event handling
//! - `styles`: Light and dark palettes
//! - `tabs`: Per-tab content rendering

pub mod input;
pub mod render;
pub mod styles;
pub mod tabs;
