pub mod geometry;
pub use geometry::{Margins, Point, Rect, Size, maximized_placement, maximized_rect};

pub mod hit;
pub use hit::{EdgeThresholds, Hit, RegionMask, ResizeEdge, Resizable, classify_hit};

pub mod style;
pub use style::{FrameHints, WindowStyle, frameless_style};

pub(crate) mod tester;
pub use tester::WindowTester;

pub mod intercept;
pub use intercept::{Message, Verdict, WindowSnapshot, intercept};
