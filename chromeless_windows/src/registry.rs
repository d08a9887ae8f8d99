//! Process-wide window registration.
//!
//! Exactly one interceptor may be attached to a window at a time; the
//! registry rejects duplicates at attach time instead of relying on caller
//! discipline. Only the raw window keys live here. The [`StyleOverride`]
//! binding stays with its interceptor, which invokes the hook once at
//! attach, after the policy style is applied; removing the subclass on drop
//! ends delivery, so a stale override is never invoked for a window that
//! dropped its interceptor.

use std::sync::{Mutex, PoisonError};

use windows::Win32::Foundation::HWND;

use crate::error::{Error, Result};

/// Post-policy style customization hook. The one channel through which
/// application code may adjust native style bits after the frameless policy
/// has run.
pub trait StyleOverride {
    fn apply(&self, hwnd: HWND);
}

static ATTACHED: Mutex<Vec<isize>> = Mutex::new(Vec::new());

fn key(hwnd: HWND) -> isize {
    hwnd.0 as isize
}

pub(crate) fn register(hwnd: HWND) -> Result<()> {
    let mut attached = ATTACHED.lock().unwrap_or_else(PoisonError::into_inner);
    let key = key(hwnd);
    if attached.contains(&key) {
        return Err(Error::AlreadyAttached(key));
    }
    attached.push(key);
    Ok(())
}

pub(crate) fn unregister(hwnd: HWND) {
    let mut attached = ATTACHED.lock().unwrap_or_else(PoisonError::into_inner);
    attached.retain(|&k| k != key(hwnd));
}
