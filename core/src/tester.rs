use crate::geometry::{Margins, Point};

/// Application-supplied overrides for drag regions and margins.
///
/// Queried synchronously on every hit test, so implementations must be cheap
/// and side-effect-free. A window without a tester behaves as if every
/// interior point were draggable with zero extra margins, which is what the
/// default methods return.
pub trait WindowTester {
    /// Extra per-edge resize thresholds. Zero on an edge falls back to the
    /// platform frame metric for that edge.
    fn draggable_margins(&self) -> Margins {
        Margins::default()
    }

    /// How far the window is pushed past the work area while maximized.
    fn maximized_margins(&self) -> Margins {
        Margins::default()
    }

    /// Returns true when `point` (window-local coordinates) is ordinary
    /// client area and must not start a drag.
    fn hit_test(&self, point: Point) -> bool {
        let _ = point;
        false
    }
}
