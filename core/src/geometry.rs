use serde::{Deserialize, Serialize};

/// A point in screen coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// An extent in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// A rectangle in the native half-open convention: `right` and `bottom` are
/// exclusive, so `width == right - left`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn top_left(&self) -> Point {
        Point {
            x: self.left,
            y: self.top,
        }
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Per-edge pixel margins. An edge with value zero (or below) means "use the
/// platform default for this edge".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margins {
    pub fn uniform(value: i32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// The geometry a maximized frameless window should occupy: the screen work
/// area pushed out by the maximized margins on every edge, so the enlarged
/// decoration region ends up off screen.
pub fn maximized_rect(available: Rect, margins: Margins) -> Rect {
    Rect {
        left: available.left - margins.left,
        top: available.top - margins.top,
        right: available.right + margins.right,
        bottom: available.bottom + margins.bottom,
    }
}

/// Position and extent for the maximized placement, as reported to the
/// min/max-info query and used for the maximized re-clamp.
pub fn maximized_placement(available: Rect, margins: Margins) -> (Point, Size) {
    let rect = maximized_rect(available, margins);
    (rect.top_left(), rect.size())
}

#[cfg(test)]
mod tests;
