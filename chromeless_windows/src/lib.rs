//! Win32 message interception for frameless windows.
//!
//! A window whose OS chrome has been removed still needs resize borders,
//! drag-to-move and sane maximize behavior. [`Interceptor`] subclasses the
//! target window, recognizes the handful of non-client messages involved and
//! answers them from the policy in `chromeless_core`; everything else falls
//! through to default processing.

#![cfg(windows)]

mod composition;
mod error;
mod hit;
mod interceptor;
mod registry;
mod snapshot;
mod style;

pub use error::{Error, Result};
pub use interceptor::{Interceptor, InterceptorConfig};
pub use registry::StyleOverride;

pub use chromeless_core::{FrameHints, Margins, Point, Rect, Size, WindowTester};
