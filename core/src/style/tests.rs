use super::*;

const FRAMED: WindowStyle = WindowStyle::OVERLAPPEDWINDOW;

#[test]
fn strips_framed_bits_and_keeps_thick_frame() {
    let style = frameless_style(FRAMED, FrameHints::default(), false);

    assert!(style.contains(WindowStyle::POPUP));
    assert!(style.contains(WindowStyle::THICKFRAME));
    assert!(!style.contains(WindowStyle::CAPTION));
}

#[test]
fn composition_re_adds_the_caption_bit() {
    let style = frameless_style(FRAMED, FrameHints::default(), true);
    assert!(style.contains(WindowStyle::CAPTION));
}

#[test]
fn default_hints_keep_system_menu_and_boxes() {
    let style = frameless_style(FRAMED, FrameHints::default(), false);

    assert!(style.contains(WindowStyle::SYSMENU));
    assert!(style.contains(WindowStyle::MINIMIZEBOX));
    assert!(style.contains(WindowStyle::MAXIMIZEBOX));
}

#[test]
fn customize_makes_sub_hints_authoritative() {
    let hints = FrameHints {
        customize: true,
        system_menu: true,
        minimize: false,
        maximize: false,
        ..FrameHints::default()
    };
    let style = frameless_style(FRAMED, hints, false);

    assert!(style.contains(WindowStyle::SYSMENU));
    assert!(!style.contains(WindowStyle::MINIMIZEBOX));
    assert!(!style.contains(WindowStyle::MAXIMIZEBOX));
}

#[test]
fn unrelated_bits_pass_through() {
    // WS_VISIBLE | WS_CLIPCHILDREN, outside the policy's bit set.
    let current = WindowStyle::from_bits_retain(0x1000_0000 | 0x0200_0000);
    let style = frameless_style(current, FrameHints::default(), false);

    assert_eq!(style.bits() & 0x1200_0000, 0x1200_0000);
}

#[test]
fn idempotent_for_identical_hints() {
    for composition in [false, true] {
        let hints = FrameHints {
            customize: true,
            system_menu: true,
            minimize: true,
            maximize: false,
            ..FrameHints::default()
        };
        let once = frameless_style(FRAMED, hints, composition);
        let twice = frameless_style(once, hints, composition);
        assert_eq!(once, twice);
    }
}
