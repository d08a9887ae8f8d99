//! The per-window message interceptor.

use std::rc::Weak;

use chromeless_core::{
    FrameHints, Message, Rect, Size, Verdict, WindowTester, intercept, maximized_rect,
};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, POINT, RECT, WPARAM};
use windows::Win32::UI::Shell::{DefSubclassProc, RemoveWindowSubclass, SetWindowSubclass};
use windows::Win32::UI::WindowsAndMessaging::{
    MINMAXINFO, NCCALCSIZE_PARAMS, SWP_NOACTIVATE, SWP_NOOWNERZORDER, SWP_NOZORDER, SetWindowPos,
    WM_GETMINMAXINFO, WM_NCACTIVATE, WM_NCCALCSIZE, WM_NCHITTEST, WM_NCLBUTTONDBLCLK, WM_SIZE,
};

use crate::error::{Error, Result};
use crate::registry::{self, StyleOverride};
use crate::{hit, snapshot, style};

const SUBCLASS_ID: usize = 1;

/// Construction-time interceptor settings.
///
/// The min/max extents stand in for the window's size constraints; a window
/// with `min_size == max_size` on an axis is not resizable along it.
#[derive(Clone, Copy, Debug)]
pub struct InterceptorConfig {
    pub hints: FrameHints,
    pub min_size: Size,
    pub max_size: Size,
}

impl Default for InterceptorConfig {
    fn default() -> Self {
        Self {
            hints: FrameHints::default(),
            min_size: Size::default(),
            max_size: Size {
                width: i32::MAX,
                height: i32::MAX,
            },
        }
    }
}

impl InterceptorConfig {
    /// A window pinned to one extent; suppresses maximize-on-double-click
    /// and every resize region.
    pub fn fixed_size(size: Size) -> Self {
        Self {
            min_size: size,
            max_size: size,
            ..Self::default()
        }
    }
}

/// State shared with the subclass procedure. Lives in a stable heap
/// allocation for as long as the subclass is installed; the interceptor
/// removes the subclass before releasing it.
struct SharedState {
    config: InterceptorConfig,
    tester: Option<Weak<dyn WindowTester>>,
    style_override: Option<Weak<dyn StyleOverride>>,
}

/// Emulates standard window chrome on a frameless window by answering its
/// non-client messages.
///
/// The interceptor holds a non-owning window reference; the caller is
/// responsible for dropping it no later than the window. Dropping removes
/// the subclass and clears the registry binding. Collaborators are held as
/// weak handles, so a tester that was dropped early simply stops being
/// consulted.
pub struct Interceptor {
    hwnd: Option<HWND>,
    state: Box<SharedState>,
    subclassed: bool,
}

impl Interceptor {
    /// A detached interceptor; call [`attach_to`](Self::attach_to) once the
    /// native handle exists.
    pub fn new(config: InterceptorConfig) -> Self {
        Self {
            hwnd: None,
            state: Box::new(SharedState {
                config,
                tester: None,
                style_override: None,
            }),
            subclassed: false,
        }
    }

    /// Creates and attaches in one step, for windows that already have a
    /// native handle.
    pub fn attach(hwnd: HWND, config: InterceptorConfig) -> Result<Self> {
        let mut interceptor = Self::new(config);
        interceptor.attach_to(hwnd)?;
        Ok(interceptor)
    }

    /// Like [`attach`](Self::attach), with a drag/hit-test override.
    pub fn attach_with_tester(
        hwnd: HWND,
        config: InterceptorConfig,
        tester: Weak<dyn WindowTester>,
    ) -> Result<Self> {
        let mut interceptor = Self::new(config).with_tester(tester);
        interceptor.attach_to(hwnd)?;
        Ok(interceptor)
    }

    /// Sets the drag/hit-test override. Pre-attach only.
    pub fn with_tester(mut self, tester: Weak<dyn WindowTester>) -> Self {
        assert!(!self.subclassed, "tester must be set before attaching");
        self.state.tester = Some(tester);
        self
    }

    /// Sets the post-policy style hook. Pre-attach only.
    pub fn with_style_override(mut self, hook: Weak<dyn StyleOverride>) -> Self {
        assert!(!self.subclassed, "style override must be set before attaching");
        self.state.style_override = Some(hook);
        self
    }

    /// Installs the interceptor on `hwnd` and applies the frameless style.
    ///
    /// With the frameless hint unset this records the window and does
    /// nothing else: no subclass, no style change. A style application
    /// failure is logged and otherwise ignored; the window stays usable with
    /// default chrome behavior.
    pub fn attach_to(&mut self, hwnd: HWND) -> Result<()> {
        assert!(!self.subclassed, "interceptor is already attached");
        if hwnd.is_invalid() {
            return Err(Error::WindowUnavailable);
        }

        if !self.state.config.hints.frameless {
            self.hwnd = Some(hwnd);
            return Ok(());
        }

        registry::register(hwnd)?;

        let refdata = &*self.state as *const SharedState as usize;
        let installed =
            unsafe { SetWindowSubclass(hwnd, Some(subclass_proc), SUBCLASS_ID, refdata) };
        if !installed.as_bool() {
            registry::unregister(hwnd);
            return Err(Error::SubclassFailed);
        }

        self.hwnd = Some(hwnd);
        self.subclassed = true;

        if let Err(error) = style::apply_frameless_style(hwnd, self.state.config.hints) {
            log::warn!(
                "frameless style not applied to window {:#x}: {error}",
                hwnd.0 as isize
            );
        }
        if let Some(hook) = self.state.style_override.as_ref().and_then(Weak::upgrade) {
            hook.apply(hwnd);
        }

        log::debug!("interceptor attached to window {:#x}", hwnd.0 as isize);
        Ok(())
    }

    /// The window this interceptor is bound to, if any.
    pub fn window(&self) -> Option<HWND> {
        self.hwnd
    }
}

impl Drop for Interceptor {
    fn drop(&mut self) {
        if !self.subclassed {
            return;
        }
        if let Some(hwnd) = self.hwnd {
            unsafe {
                let _ = RemoveWindowSubclass(hwnd, Some(subclass_proc), SUBCLASS_ID);
            }
            registry::unregister(hwnd);
            log::debug!("interceptor detached from window {:#x}", hwnd.0 as isize);
        }
    }
}

unsafe extern "system" fn subclass_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    _subclass_id: usize,
    refdata: usize,
) -> LRESULT {
    let state = refdata as *const SharedState;
    if !state.is_null() {
        let state = unsafe { &*state };
        if msg == WM_SIZE {
            // A maximized frameless window must be re-clamped: the system
            // sizes it for the enlarged decoration region it no longer has.
            clamp_to_work_area(hwnd, state);
        } else if let Some(result) = handle_message(hwnd, msg, wparam, lparam, state) {
            return result;
        }
    }
    unsafe { DefSubclassProc(hwnd, msg, wparam, lparam) }
}

/// Translates a recognized message, decides, and applies the verdict.
/// Returns `None` for unrecognized messages, "not handled" verdicts, and
/// whenever the window state cannot be captured.
fn handle_message(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    state: &SharedState,
) -> Option<LRESULT> {
    let message = match msg {
        WM_NCHITTEST => {
            let (x, y) = cursor_from_lparam(lparam);
            Message::HitTest { x, y }
        }
        WM_NCACTIVATE => Message::NonClientActivate,
        WM_NCCALCSIZE => Message::CalcClientSize {
            validate: wparam.0 != 0,
        },
        WM_GETMINMAXINFO => Message::MinMaxQuery,
        WM_NCLBUTTONDBLCLK => Message::NonClientDoubleClick,
        _ => return None,
    };

    let window = snapshot::capture(hwnd, &state.config)?;
    let tester = state.tester.as_ref().and_then(Weak::upgrade);
    let verdict = intercept(message, &window, tester.as_deref());
    apply_verdict(verdict, lparam, &state.config)
}

fn apply_verdict(verdict: Verdict, lparam: LPARAM, config: &InterceptorConfig) -> Option<LRESULT> {
    match verdict {
        Verdict::NotHandled => None,
        Verdict::Hit(hit) => Some(LRESULT(hit::hit_code(hit))),
        Verdict::SuppressNonClientPaint => Some(LRESULT(1)),
        Verdict::UseClientRect(replacement) => {
            if let Some(rect) = replacement {
                let params = lparam.0 as *mut NCCALCSIZE_PARAMS;
                if !params.is_null() {
                    unsafe {
                        (*params).rgrc[0] = native_rect(rect);
                    }
                }
            }
            Some(LRESULT(0))
        }
        Verdict::MaxPlacement { position, size } => {
            let info = lparam.0 as *mut MINMAXINFO;
            if !info.is_null() {
                unsafe {
                    (*info).ptMaxPosition = POINT {
                        x: position.x,
                        y: position.y,
                    };
                    (*info).ptMaxSize = POINT {
                        x: size.width,
                        y: size.height,
                    };
                    (*info).ptMaxTrackSize = (*info).ptMaxSize;
                    if config.min_size != Size::default() {
                        (*info).ptMinTrackSize = POINT {
                            x: config.min_size.width,
                            y: config.min_size.height,
                        };
                    }
                }
            }
            Some(LRESULT(0))
        }
        Verdict::SuppressDoubleClick => Some(LRESULT(0)),
    }
}

fn clamp_to_work_area(hwnd: HWND, state: &SharedState) {
    if !snapshot::is_maximized(hwnd) {
        return;
    }
    let Some(available) = snapshot::work_area(hwnd) else {
        return;
    };
    let margins = state
        .tester
        .as_ref()
        .and_then(Weak::upgrade)
        .map(|tester| tester.maximized_margins())
        .unwrap_or_default();
    let rect = maximized_rect(available, margins);
    let _ = unsafe {
        SetWindowPos(
            hwnd,
            None,
            rect.left,
            rect.top,
            rect.width(),
            rect.height(),
            SWP_NOZORDER | SWP_NOOWNERZORDER | SWP_NOACTIVATE,
        )
    };
}

/// Screen coordinates packed into a hit-test lparam, sign-extended per word.
fn cursor_from_lparam(lparam: LPARAM) -> (i32, i32) {
    let x = (lparam.0 & 0xFFFF) as i16 as i32;
    let y = ((lparam.0 >> 16) & 0xFFFF) as i16 as i32;
    (x, y)
}

fn native_rect(rect: Rect) -> RECT {
    RECT {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    }
}
