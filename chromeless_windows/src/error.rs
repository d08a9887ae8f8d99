use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The window handle is null or no longer refers to a window.
    #[error("window is not valid")]
    WindowUnavailable,

    /// A window carries at most one interceptor at a time.
    #[error("an interceptor is already attached to window {0:#x}")]
    AlreadyAttached(isize),

    /// The subclass installation was refused by the platform.
    #[error("failed to install the window subclass")]
    SubclassFailed,

    #[error("platform call failed: {0}")]
    Platform(#[from] windows_core::Error),
}
