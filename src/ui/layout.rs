//! Window and button geometry, in logical units.

use crate::config::LayoutConfig;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Outer window size for `count` stacked buttons.
pub fn window_size(layout: &LayoutConfig, count: usize) -> (i32, i32) {
    let width = layout.button_width * 2;
    let height = (layout.button_height + layout.padding) * count as i32 + layout.padding * 4;
    (width, height)
}

/// Top-left position that centers a window of `size` on a screen of `screen`.
pub fn centered_origin(screen: (i32, i32), size: (i32, i32)) -> (i32, i32) {
    ((screen.0 - size.0) / 2, (screen.1 - size.1) / 2)
}

/// Rect of the button at `index`, centered horizontally inside a client area
/// of `client_width` whose top edge is at `client_top`.
pub fn button_rect(layout: &LayoutConfig, client_width: i32, client_top: i32, index: usize) -> Rect {
    let x = (client_width - layout.button_width) / 2;
    let y = client_top + layout.padding + (layout.button_height + layout.padding) * index as i32;
    Rect {
        x,
        y,
        width: layout.button_width,
        height: layout.button_height,
    }
}
