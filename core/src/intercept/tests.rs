use super::*;
use crate::geometry::Margins;

fn snapshot() -> WindowSnapshot {
    WindowSnapshot {
        frame: Rect {
            left: 100,
            top: 100,
            right: 900,
            bottom: 700,
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
            width: 200,
            height: 150,
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

struct MaximizedMargins(Margins);

impl WindowTester for MaximizedMargins {
    fn maximized_margins(&self) -> Margins {
        self.0
    }
}

#[test]
fn hit_test_is_always_handled() {
    let verdict = intercept(Message::HitTest { x: 400, y: 400 }, &snapshot(), None);
    assert_eq!(verdict, Verdict::Hit(Hit::Caption));
}

#[test]
fn nc_activate_suppressed_only_without_composition() {
    let mut window = snapshot();
    assert_eq!(
        intercept(Message::NonClientActivate, &window, None),
        Verdict::NotHandled
    );

    window.composition_enabled = false;
    assert_eq!(
        intercept(Message::NonClientActivate, &window, None),
        Verdict::SuppressNonClientPaint
    );
}

#[test]
fn calc_size_non_validate_variant_falls_through() {
    let verdict = intercept(
        Message::CalcClientSize { validate: false },
        &snapshot(),
        None,
    );
    assert_eq!(verdict, Verdict::NotHandled);
}

#[test]
fn calc_size_keeps_rect_when_not_maximized() {
    let verdict = intercept(
        Message::CalcClientSize { validate: true },
        &snapshot(),
        None,
    );
    assert_eq!(verdict, Verdict::UseClientRect(None));
}

#[test]
fn calc_size_expands_rect_by_maximized_margins() {
    let mut window = snapshot();
    window.maximized = true;
    let tester = MaximizedMargins(Margins::uniform(8));

    let verdict = intercept(
        Message::CalcClientSize { validate: true },
        &window,
        Some(&tester),
    );
    assert_eq!(
        verdict,
        Verdict::UseClientRect(Some(Rect {
            left: -8,
            top: -8,
            right: 1928,
            bottom: 1048,
        }))
    );
}

#[test]
fn min_max_query_reports_work_area_placement() {
    let verdict = intercept(Message::MinMaxQuery, &snapshot(), None);
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
fn double_click_passes_through_on_resizable_windows() {
    let verdict = intercept(Message::NonClientDoubleClick, &snapshot(), None);
    assert_eq!(verdict, Verdict::NotHandled);
}

#[test]
fn double_click_suppressed_when_any_axis_is_fixed() {
    let mut window = snapshot();
    window.max_size.height = window.min_size.height;

    let verdict = intercept(Message::NonClientDoubleClick, &window, None);
    assert_eq!(verdict, Verdict::SuppressDoubleClick);
}
