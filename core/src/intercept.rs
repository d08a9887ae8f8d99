//! Message decisions for a frameless window.
//!
//! The recognized native messages form a closed set; everything else is
//! default-processed by the platform. Decisions are pure: the platform layer
//! captures a [`WindowSnapshot`] up front, dispatches [`intercept`] and
//! applies the resulting [`Verdict`].

use crate::geometry::{Point, Rect, Size, maximized_placement, maximized_rect};
use crate::hit::{EdgeThresholds, Hit, Resizable, classify_hit};
use crate::tester::WindowTester;

/// The native messages the interceptor recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    /// Hit-test query for a screen point.
    HitTest { x: i32, y: i32 },
    /// Non-client activation paint request.
    NonClientActivate,
    /// Non-client size calculation; `validate` distinguishes the
    /// validate-rects variant from the plain one.
    CalcClientSize { validate: bool },
    /// Min/max tracking-size and maximized-placement query.
    MinMaxQuery,
    /// Double click on the non-client (caption) region.
    NonClientDoubleClick,
}

/// Window state captured immediately before a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSnapshot {
    /// Frame rectangle in screen coordinates.
    pub frame: Rect,
    /// Work area of the screen the window is on.
    pub available: Rect,
    pub maximized: bool,
    pub composition_enabled: bool,
    pub min_size: Size,
    pub max_size: Size,
    /// Platform frame-border metric per axis, used where margins are zero.
    pub border_fallback: Size,
}

/// What the platform layer should do with a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Defer to default processing.
    NotHandled,
    /// Report this hit classification as the message result.
    Hit(Hit),
    /// Suppress the default non-client activation paint (result 1).
    SuppressNonClientPaint,
    /// Accept the proposed client rect (result 0), replacing it with the
    /// given rect when present.
    UseClientRect(Option<Rect>),
    /// Fill the min/max-info maximized position, size and track size.
    MaxPlacement { position: Point, size: Size },
    /// Swallow the message with result 0.
    SuppressDoubleClick,
}

/// Decides how to handle one recognized message.
pub fn intercept(
    message: Message,
    window: &WindowSnapshot,
    tester: Option<&dyn WindowTester>,
) -> Verdict {
    match message {
        Message::HitTest { x, y } => {
            let margins = tester.map(|t| t.draggable_margins()).unwrap_or_default();
            let thresholds = EdgeThresholds::resolve(margins, window.border_fallback);
            let resizable = Resizable::from_limits(window.min_size, window.max_size);
            Verdict::Hit(classify_hit(
                Point { x, y },
                window.frame,
                thresholds,
                resizable,
                tester,
            ))
        }
        Message::NonClientActivate => {
            // With composition off the default handling paints a classic
            // non-client frame over the borderless window.
            if window.composition_enabled {
                Verdict::NotHandled
            } else {
                Verdict::SuppressNonClientPaint
            }
        }
        Message::CalcClientSize { validate: false } => Verdict::NotHandled,
        Message::CalcClientSize { validate: true } => {
            if window.maximized {
                let margins = tester.map(|t| t.maximized_margins()).unwrap_or_default();
                Verdict::UseClientRect(Some(maximized_rect(window.available, margins)))
            } else {
                Verdict::UseClientRect(None)
            }
        }
        Message::MinMaxQuery => {
            let margins = tester.map(|t| t.maximized_margins()).unwrap_or_default();
            let (position, size) = maximized_placement(window.available, margins);
            Verdict::MaxPlacement { position, size }
        }
        Message::NonClientDoubleClick => {
            // A window that cannot resize must not maximize on double click.
            if window.min_size.width >= window.max_size.width
                || window.min_size.height >= window.max_size.height
            {
                Verdict::SuppressDoubleClick
            } else {
                Verdict::NotHandled
            }
        }
    }
}

#[cfg(test)]
mod tests;
