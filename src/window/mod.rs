pub mod engine;
pub mod names;
pub mod policy;
pub mod session;
pub mod title;
pub mod tracker;
pub mod watch;

use thiserror::Error;
use x11rb::protocol::xproto::{Atom, Window};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("X connection error: {0}")]
    Connection(#[from] x11rb::errors::ConnectionError),

    #[error("X request failed: {0}")]
    Reply(#[from] x11rb::errors::ReplyError),
}

/// What the engine needs from the windowing session. The live
/// implementation sits on [`crate::core::context::Context`]; tests use an
/// in-memory fake.
pub trait WindowSession {
    /// Direct children of `window`, in stacking order.
    fn children(&self, window: Window) -> Result<Vec<Window>, SessionError>;

    /// Subscribe `window` to focus-change and property-change notifications.
    /// Subscribing twice is harmless; the event mask is simply replaced.
    fn subscribe(&self, window: Window) -> Result<(), SessionError>;

    /// Subscribe a root window to substructure (window creation) notifications.
    fn subscribe_root(&self, root: Window) -> Result<(), SessionError>;

    /// Read a text property, `None` if it is missing, unreadable, or empty.
    fn read_text_property(&self, window: Window, property: Atom) -> Option<String>;

    /// Best-effort _NET_ACTIVE_WINDOW read; not all window managers keep it.
    fn active_window_hint(&self, root: Window) -> Option<Window>;
}
