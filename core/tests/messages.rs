//! Message-level scenarios, mirroring how the platform layer drives the
//! decision machine.

use chromeless_core::{
    Hit, Margins, Message, Point, Rect, Size, Verdict, WindowSnapshot, WindowTester, intercept,
    maximized_rect,
};

fn desktop_window() -> WindowSnapshot {
    WindowSnapshot {
        frame: Rect {
            left: 200,
            top: 120,
            right: 1160,
            bottom: 840,
        },
        available: Rect {
            left: 0,
            top: 0,
            right: 1920,
            bottom: 1040,
        },
        maximized: false,
        composition_enabled: true,
        min_size: Size {
            width: 320,
            height: 240,
        },
        max_size: Size {
            width: i32::MAX,
            height: i32::MAX,
        },
        border_fallback: Size {
            width: 8,
            height: 8,
        },
    }
}

struct Chrome {
    caption_height: i32,
    margins: Margins,
}

impl WindowTester for Chrome {
    fn draggable_margins(&self) -> Margins {
        self.margins
    }

    fn maximized_margins(&self) -> Margins {
        self.margins
    }

    fn hit_test(&self, point: Point) -> bool {
        point.y >= self.caption_height
    }
}

#[test]
fn min_max_query_with_zero_margins_fills_the_work_area() {
    let verdict = intercept(Message::MinMaxQuery, &desktop_window(), None);
    assert_eq!(
        verdict,
        Verdict::MaxPlacement {
            position: Point { x: 0, y: 0 },
            size: Size {
                width: 1920,
                height: 1040,
            },
        }
    );
}

#[test]
fn maximized_geometry_with_margins_overshoots_the_work_area() {
    let window = desktop_window();
    let rect = maximized_rect(window.available, Margins::uniform(8));

    assert_eq!(rect.left, -8);
    assert_eq!(rect.top, -8);
    assert_eq!(rect.width(), 1936);
    assert_eq!(rect.height(), 1056);
}

#[test]
fn fixed_size_window_suppresses_maximize_toggle() {
    let mut window = desktop_window();
    window.max_size = window.min_size;

    let verdict = intercept(Message::NonClientDoubleClick, &window, None);
    assert_eq!(verdict, Verdict::SuppressDoubleClick);
}

#[test]
fn tester_claims_the_content_area_below_the_caption() {
    let window = desktop_window();
    let chrome = Chrome {
        caption_height: 40,
        margins: Margins::default(),
    };

    // Local y 200, well below the 40px caption strip.
    let verdict = intercept(
        Message::HitTest {
            x: 600,
            y: window.frame.top + 200,
        },
        &window,
        Some(&chrome),
    );
    assert_eq!(verdict, Verdict::Hit(Hit::Client));

    // Local y 20, inside the caption strip.
    let verdict = intercept(
        Message::HitTest {
            x: 600,
            y: window.frame.top + 20,
        },
        &window,
        Some(&chrome),
    );
    assert_eq!(verdict, Verdict::Hit(Hit::Caption));
}

#[test]
fn calc_size_while_maximized_reports_the_expanded_rect() {
    let mut window = desktop_window();
    window.maximized = true;
    let chrome = Chrome {
        caption_height: 40,
        margins: Margins::uniform(8),
    };

    let verdict = intercept(
        Message::CalcClientSize { validate: true },
        &window,
        Some(&chrome),
    );
    let Verdict::UseClientRect(Some(rect)) = verdict else {
        panic!("expected a replacement rect, got {verdict:?}");
    };
    assert_eq!(rect, maximized_rect(window.available, Margins::uniform(8)));
}

#[test]
fn composition_state_only_affects_nc_activation() {
    let mut window = desktop_window();
    window.composition_enabled = false;

    assert_eq!(
        intercept(Message::NonClientActivate, &window, None),
        Verdict::SuppressNonClientPaint
    );

    // Hit classification is indifferent to composition.
    let with = intercept(Message::HitTest { x: 600, y: 500 }, &desktop_window(), None);
    let without = intercept(Message::HitTest { x: 600, y: 500 }, &window, None);
    assert_eq!(with, without);
}
