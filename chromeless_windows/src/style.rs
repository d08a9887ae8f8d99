//! Applies the frameless style policy to a live window.

use chromeless_core::{FrameHints, WindowStyle, frameless_style};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_STYLE, GetWindowLongPtrW, SWP_FRAMECHANGED, SWP_NOMOVE, SWP_NOOWNERZORDER, SWP_NOSIZE,
    SWP_NOZORDER, SetWindowLongPtrW, SetWindowPos,
};

use crate::composition;
use crate::error::Result;

/// Rewrites the window's style bits per the frameless policy and forces a
/// frame recalculation. With composition active the glass frame is extended
/// one pixel into the client area so the compositor keeps the shadow.
pub(crate) fn apply_frameless_style(hwnd: HWND, hints: FrameHints) -> Result<()> {
    let composition_enabled = composition::is_composition_enabled();

    let current =
        WindowStyle::from_bits_retain(unsafe { GetWindowLongPtrW(hwnd, GWL_STYLE) } as u32);
    let style = frameless_style(current, hints, composition_enabled);

    unsafe {
        SetWindowLongPtrW(hwnd, GWL_STYLE, style.bits() as isize);
        SetWindowPos(
            hwnd,
            None,
            0,
            0,
            0,
            0,
            SWP_NOOWNERZORDER | SWP_NOZORDER | SWP_FRAMECHANGED | SWP_NOMOVE | SWP_NOSIZE,
        )?;
    }

    if composition_enabled {
        composition::extend_frame_into_client_area(hwnd)?;
    }

    log::debug!(
        "applied frameless style {:#010x} to window {:#x} (composition: {composition_enabled})",
        style.bits(),
        hwnd.0 as isize
    );
    Ok(())
}
