use tracing::debug;
use x11rb::protocol::xproto::Window;

use crate::window::{SessionError, WindowSession};

/// Recursively subscribe every window reachable from `window` to
/// focus-change and property-change notifications.
///
/// A window can be destroyed between enumeration and subscription; that
/// race loses us nothing (the window is gone) so failures on descendants
/// are logged and traversal continues with the remaining siblings. A
/// failure to enumerate `window` itself is the caller's problem: for the
/// startup call on a screen root it is fatal.
pub fn watch_subtree<S: WindowSession>(session: &S, window: Window) -> Result<(), SessionError> {
    for child in session.children(window)? {
        if let Err(e) = session.subscribe(child) {
            debug!("window {} vanished before subscribe: {}", child, e);
            continue;
        }
        if let Err(e) = watch_subtree(session, child) {
            debug!("window {} vanished during scan: {}", child, e);
        }
    }
    Ok(())
}

/// Subscribe a freshly created window. No recursion: a window reported by
/// CreateNotify has no children yet.
pub fn watch_new<S: WindowSession>(session: &S, window: Window) {
    if let Err(e) = session.subscribe(window) {
        debug!("new window {} vanished before subscribe: {}", window, e);
    }
}
