//! Desktop composition queries and the glass-frame extension.

use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Dwm::{DwmExtendFrameIntoClientArea, DwmIsCompositionEnabled};
use windows::Win32::UI::Controls::MARGINS;

/// Whether the compositor is active. A failed query counts as disabled,
/// which degrades to the classic (no shadow) code path.
pub(crate) fn is_composition_enabled() -> bool {
    unsafe { DwmIsCompositionEnabled() }
        .map(|enabled| enabled.as_bool())
        .unwrap_or(false)
}

/// Extends the glass frame one pixel into the client area on every edge.
/// Needed so the compositor keeps drawing the shadow for a window whose
/// caption is never painted.
pub(crate) fn extend_frame_into_client_area(hwnd: HWND) -> windows_core::Result<()> {
    let margins = MARGINS {
        cxLeftWidth: 1,
        cxRightWidth: 1,
        cyTopHeight: 1,
        cyBottomHeight: 1,
    };
    unsafe { DwmExtendFrameIntoClientArea(hwnd, &margins) }
}
