use super::*;

#[test]
fn maximized_rect_grows_by_margins_on_every_edge() {
    let available = Rect {
        left: 0,
        top: 0,
        right: 1920,
        bottom: 1040,
    };
    let rect = maximized_rect(available, Margins::uniform(8));

    assert_eq!(rect.left, -8);
    assert_eq!(rect.top, -8);
    assert_eq!(rect.right, 1928);
    assert_eq!(rect.bottom, 1048);
}

#[test]
fn maximized_rect_size_is_available_plus_margins() {
    let available = Rect {
        left: 100,
        top: 50,
        right: 1700,
        bottom: 950,
    };
    let margins = Margins {
        left: 3,
        top: 5,
        right: 7,
        bottom: 11,
    };
    let rect = maximized_rect(available, margins);

    assert_eq!(rect.width(), available.width() + margins.left + margins.right);
    assert_eq!(rect.height(), available.height() + margins.top + margins.bottom);
}

#[test]
fn maximized_rect_with_zero_margins_is_the_work_area() {
    let available = Rect {
        left: 0,
        top: 0,
        right: 1920,
        bottom: 1040,
    };
    assert_eq!(maximized_rect(available, Margins::default()), available);
}

#[test]
fn maximized_placement_reports_top_left_and_extent() {
    let available = Rect {
        left: 0,
        top: 0,
        right: 1920,
        bottom: 1040,
    };
    let (position, size) = maximized_placement(available, Margins::uniform(8));

    assert_eq!(position, Point { x: -8, y: -8 });
    assert_eq!(
        size,
        Size {
            width: 1936,
            height: 1056
        }
    );
}
