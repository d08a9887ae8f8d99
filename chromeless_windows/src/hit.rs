//! Border metrics and hit-code mapping.

use chromeless_core::{Hit, ResizeEdge, Size};
use windows::Win32::UI::WindowsAndMessaging::{
    GetSystemMetrics, HTBOTTOM, HTBOTTOMLEFT, HTBOTTOMRIGHT, HTCAPTION, HTCLIENT, HTLEFT, HTRIGHT,
    HTTOP, HTTOPLEFT, HTTOPRIGHT, SM_CXPADDEDBORDER, SM_CXSIZEFRAME, SM_CYSIZEFRAME,
};

/// System resize-border metric per axis, DPI and theme dependent. Used as
/// the fallback threshold for edges with no configured margin.
pub(crate) fn resize_border() -> Size {
    unsafe {
        let padded = GetSystemMetrics(SM_CXPADDEDBORDER);
        Size {
            width: GetSystemMetrics(SM_CXSIZEFRAME) + padded,
            height: GetSystemMetrics(SM_CYSIZEFRAME) + padded,
        }
    }
}

/// Maps a classification to the HT* result code. An unresolved mask is
/// reported verbatim, which the default handling treats as no region.
pub(crate) fn hit_code(hit: Hit) -> isize {
    let code = match hit {
        Hit::Client => HTCLIENT,
        Hit::Caption => HTCAPTION,
        Hit::Unresolved(mask) => return mask.bits() as isize,
        Hit::Edge(edge) => match edge {
            ResizeEdge::Top => HTTOP,
            ResizeEdge::Left => HTLEFT,
            ResizeEdge::Right => HTRIGHT,
            ResizeEdge::Bottom => HTBOTTOM,
            ResizeEdge::TopLeft => HTTOPLEFT,
            ResizeEdge::TopRight => HTTOPRIGHT,
            ResizeEdge::BottomLeft => HTBOTTOMLEFT,
            ResizeEdge::BottomRight => HTBOTTOMRIGHT,
        },
    };
    code as isize
}
