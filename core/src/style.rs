//! Native style policy for frameless windows.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// The WS_* style bits the frameless policy reads and writes. Values are
    /// the documented Win32 constants; unrelated bits in a window's current
    /// style pass through untouched.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct WindowStyle: u32 {
        const MAXIMIZEBOX = 0x0001_0000;
        const MINIMIZEBOX = 0x0002_0000;
        const THICKFRAME = 0x0004_0000;
        const SYSMENU = 0x0008_0000;
        const CAPTION = 0x00C0_0000;
        const POPUP = 0x8000_0000;
        const OVERLAPPEDWINDOW = Self::CAPTION.bits()
            | Self::SYSMENU.bits()
            | Self::THICKFRAME.bits()
            | Self::MINIMIZEBOX.bits()
            | Self::MAXIMIZEBOX.bits();
    }
}

/// Window chrome hints fixed at construction time.
///
/// With `customize` unset the window keeps a full system menu and min/max
/// boxes, like an ordinary resizable window; setting it makes the three
/// sub-hints authoritative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameHints {
    pub frameless: bool,
    pub customize: bool,
    pub system_menu: bool,
    pub minimize: bool,
    pub maximize: bool,
}

impl Default for FrameHints {
    fn default() -> Self {
        Self {
            frameless: true,
            customize: false,
            system_menu: true,
            minimize: true,
            maximize: true,
        }
    }
}

/// Computes the style a frameless window should carry, starting from its
/// current style bits.
///
/// The framed-window bits are stripped and replaced with a borderless popup
/// base that keeps the thick frame, so the window stays resizable. When
/// composition is active the caption bit is re-added: the compositor only
/// draws shadows and rounded corners for captioned windows, and no visible
/// caption is painted either way.
pub fn frameless_style(
    current: WindowStyle,
    hints: FrameHints,
    composition_enabled: bool,
) -> WindowStyle {
    // `difference` rather than `& !`: the complement operator would also
    // clear style bits this policy does not model (WS_VISIBLE and friends).
    let framed = WindowStyle::OVERLAPPEDWINDOW
        | WindowStyle::THICKFRAME
        | WindowStyle::CAPTION
        | WindowStyle::SYSMENU
        | WindowStyle::MINIMIZEBOX
        | WindowStyle::MAXIMIZEBOX;
    let mut style = current.difference(framed);

    style |= WindowStyle::POPUP | WindowStyle::THICKFRAME;

    if composition_enabled {
        style |= WindowStyle::CAPTION;
    }

    if hints.customize {
        if hints.system_menu {
            style |= WindowStyle::SYSMENU;
        }
        if hints.minimize {
            style |= WindowStyle::MINIMIZEBOX;
        }
        if hints.maximize {
            style |= WindowStyle::MAXIMIZEBOX;
        }
    } else {
        style |= WindowStyle::SYSMENU | WindowStyle::MINIMIZEBOX | WindowStyle::MAXIMIZEBOX;
    }

    style
}

#[cfg(test)]
mod tests;
