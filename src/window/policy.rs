use tracing::{debug, warn};
use x11rb::protocol::ErrorKind;
use x11rb::x11_utils::X11Error;

/// Post-startup protocol error policy.
///
/// Once the tree scan is done, the only requests issued while running are
/// subscriptions and property reads, and those race against windows being
/// destroyed. Such errors carry no information the engine can act on, so
/// they are counted and dropped instead of tearing down the loop. Keeping
/// the counts explicit lets the shutdown report (and tests) say what was
/// suppressed.
pub struct ErrorPolicy {
    vanished: u64,
    other: u64,
}

impl ErrorPolicy {
    pub fn permissive() -> Self {
        Self {
            vanished: 0,
            other: 0,
        }
    }

    pub fn suppress(&mut self, error: &X11Error) {
        self.note(error.error_kind, error.bad_value);
    }

    fn note(&mut self, kind: ErrorKind, bad_value: u32) {
        match kind {
            ErrorKind::Window | ErrorKind::Drawable => {
                self.vanished += 1;
                debug!("ignoring error for vanished window {}", bad_value);
            }
            _ => {
                self.other += 1;
                warn!("ignoring X error {:?} (value {})", kind, bad_value);
            }
        }
    }

    pub fn vanished(&self) -> u64 {
        self.vanished
    }

    pub fn other(&self) -> u64 {
        self.other
    }

    pub fn total(&self) -> u64 {
        self.vanished + self.other
    }
}
