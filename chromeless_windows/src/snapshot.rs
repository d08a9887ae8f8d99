//! Native window-state queries feeding the decision machine.

use chromeless_core::{Rect, WindowSnapshot};
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MONITOR_DEFAULTTONEAREST, MONITORINFO, MonitorFromWindow,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowPlacement, GetWindowRect, SW_SHOWMAXIMIZED, WINDOWPLACEMENT,
};

use crate::hit;
use crate::interceptor::InterceptorConfig;

pub(crate) fn rect_from(rect: RECT) -> Rect {
    Rect {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    }
}

/// Captures everything a message decision needs. Returns `None` while the
/// handle is not (or no longer) valid, which the caller treats as "defer to
/// default processing".
pub(crate) fn capture(hwnd: HWND, config: &InterceptorConfig) -> Option<WindowSnapshot> {
    let mut frame = RECT::default();
    unsafe { GetWindowRect(hwnd, &mut frame) }.ok()?;

    Some(WindowSnapshot {
        frame: rect_from(frame),
        available: work_area(hwnd)?,
        maximized: is_maximized(hwnd),
        composition_enabled: crate::composition::is_composition_enabled(),
        min_size: config.min_size,
        max_size: config.max_size,
        border_fallback: hit::resize_border(),
    })
}

/// Work area of the monitor the window is on.
pub(crate) fn work_area(hwnd: HWND) -> Option<Rect> {
    let monitor = unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST) };
    let mut info = MONITORINFO {
        cbSize: size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };
    unsafe { GetMonitorInfoW(monitor, &mut info) }
        .as_bool()
        .then(|| rect_from(info.rcWork))
}

/// Whether the window is currently maximized. A failed placement query is
/// reported as not maximized.
pub(crate) fn is_maximized(hwnd: HWND) -> bool {
    let mut placement = WINDOWPLACEMENT {
        length: size_of::<WINDOWPLACEMENT>() as u32,
        ..Default::default()
    };
    if unsafe { GetWindowPlacement(hwnd, &mut placement) }.is_err() {
        return false;
    }
    placement.showCmd == SW_SHOWMAXIMIZED.0 as u32
}
