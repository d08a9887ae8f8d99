//! Screen-edge region classification for resize borders.

use bitflags::bitflags;

use crate::geometry::{Margins, Point, Rect, Size};
use crate::tester::WindowTester;

bitflags! {
    /// Which frame edges a point is within threshold of. Empty means the
    /// point is interior. The bit values are part of the hit-test contract:
    /// an unresolved mask is returned verbatim as the platform result code.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RegionMask: u32 {
        const TOP = 0x0001;
        const LEFT = 0x0010;
        const RIGHT = 0x0100;
        const BOTTOM = 0x1000;
    }
}

/// A fully resolved resize region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeEdge {
    Top,
    Left,
    Right,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Outcome of classifying a point against the window frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    /// Point is on a resize border and the matching axes are resizable.
    Edge(ResizeEdge),
    /// Point is on a border region that cannot resize; the raw mask is
    /// handed back for the caller to report unchanged.
    Unresolved(RegionMask),
    /// Interior point that may start a window drag.
    Caption,
    /// Interior point claimed by the tester as ordinary client area.
    Client,
}

/// Whether each axis may resize, i.e. minimum extent < maximum extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resizable {
    pub width: bool,
    pub height: bool,
}

impl Resizable {
    pub fn from_limits(min: Size, max: Size) -> Self {
        Self {
            width: min.width < max.width,
            height: min.height < max.height,
        }
    }

    fn both(&self) -> bool {
        self.width && self.height
    }
}

/// Effective per-edge border thresholds in pixels, after fallback resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeThresholds {
    pub top: i32,
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
}

impl EdgeThresholds {
    /// Resolves configured margins against the platform frame metric:
    /// margins above zero are used verbatim, anything else falls back to the
    /// metric for that axis.
    pub fn resolve(margins: Margins, fallback: Size) -> Self {
        let pick = |margin: i32, fallback: i32| if margin > 0 { margin } else { fallback };
        Self {
            top: pick(margins.top, fallback.height),
            left: pick(margins.left, fallback.width),
            right: pick(margins.right, fallback.width),
            bottom: pick(margins.bottom, fallback.height),
        }
    }
}

/// Combined edge regions for a point, compared edge by edge against the frame
/// offset by the thresholds. Edges are independent; a top-left corner sets
/// both the top and left bits.
pub fn region_of(point: Point, frame: Rect, thresholds: EdgeThresholds) -> RegionMask {
    let mut mask = RegionMask::empty();
    if point.y < frame.top + thresholds.top {
        mask |= RegionMask::TOP;
    }
    if point.x < frame.left + thresholds.left {
        mask |= RegionMask::LEFT;
    }
    if point.x >= frame.right - thresholds.right {
        mask |= RegionMask::RIGHT;
    }
    if point.y >= frame.bottom - thresholds.bottom {
        mask |= RegionMask::BOTTOM;
    }
    mask
}

/// Classifies a screen point against the window frame.
///
/// Corner regions resolve to a resize corner only when both axes are
/// resizable, edge regions only when that axis is; otherwise the raw mask is
/// returned unresolved. Interior points consult the tester: a point it claims
/// as client area never starts a drag.
pub fn classify_hit(
    point: Point,
    frame: Rect,
    thresholds: EdgeThresholds,
    resizable: Resizable,
    tester: Option<&dyn WindowTester>,
) -> Hit {
    let mask = region_of(point, frame, thresholds);

    if mask.is_empty() {
        let local = Point {
            x: point.x - frame.left,
            y: point.y - frame.top,
        };
        return match tester {
            Some(tester) if tester.hit_test(local) => Hit::Client,
            _ => Hit::Caption,
        };
    }

    let top = mask.contains(RegionMask::TOP);
    let left = mask.contains(RegionMask::LEFT);
    let right = mask.contains(RegionMask::RIGHT);
    let bottom = mask.contains(RegionMask::BOTTOM);

    let edge = match (top, left, right, bottom) {
        (true, true, false, false) => resizable.both().then_some(ResizeEdge::TopLeft),
        (true, false, true, false) => resizable.both().then_some(ResizeEdge::TopRight),
        (false, true, false, true) => resizable.both().then_some(ResizeEdge::BottomLeft),
        (false, false, true, true) => resizable.both().then_some(ResizeEdge::BottomRight),
        (true, false, false, false) => resizable.height.then_some(ResizeEdge::Top),
        (false, false, false, true) => resizable.height.then_some(ResizeEdge::Bottom),
        (false, true, false, false) => resizable.width.then_some(ResizeEdge::Left),
        (false, false, true, false) => resizable.width.then_some(ResizeEdge::Right),
        // Three or more bits only happen when the window is smaller than the
        // combined thresholds; never a resize region.
        _ => None,
    };

    match edge {
        Some(edge) => Hit::Edge(edge),
        None => Hit::Unresolved(mask),
    }
}
