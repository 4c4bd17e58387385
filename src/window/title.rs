use tracing::debug;
use x11rb::protocol::xproto::{Atom, Window};

use crate::window::WindowSession;

/// Which title property convention this session's windows actually use.
///
/// Two incompatible schemes exist: the EWMH `_NET_WM_NAME` (modern) and the
/// ICCCM `WM_NAME` (legacy). Probing both on every read would be wasteful
/// and would make property-change filtering inconsistent, so the resolver
/// commits to whichever one succeeds first and never changes its mind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleMode {
    Unresolved,
    Modern,
    Legacy,
}

pub struct TitleResolver {
    mode: TitleMode,
    modern: Atom,
    legacy: Atom,
}

impl TitleResolver {
    pub fn new(modern: Atom, legacy: Atom) -> Self {
        Self {
            mode: TitleMode::Unresolved,
            modern,
            legacy,
        }
    }

    pub fn mode(&self) -> TitleMode {
        self.mode
    }

    /// Fetch `window`'s title under the resolved convention. The first
    /// successful read locks the mode for the life of the process; while
    /// unresolved, a failed probe of both conventions is retried on the
    /// next call rather than cached.
    pub fn resolve<S: WindowSession>(&mut self, session: &S, window: Window) -> Option<String> {
        match self.mode {
            TitleMode::Modern => session.read_text_property(window, self.modern),
            TitleMode::Legacy => session.read_text_property(window, self.legacy),
            TitleMode::Unresolved => {
                if let Some(title) = session.read_text_property(window, self.modern) {
                    debug!("windows use _NET_WM_NAME");
                    self.mode = TitleMode::Modern;
                    return Some(title);
                }
                if let Some(title) = session.read_text_property(window, self.legacy) {
                    debug!("windows use legacy WM_NAME");
                    self.mode = TitleMode::Legacy;
                    return Some(title);
                }
                None
            }
        }
    }

    /// Whether a property-change on `property` could affect the title under
    /// the current mode. Unresolved accepts either convention.
    pub fn is_title_property(&self, property: Atom) -> bool {
        match self.mode {
            TitleMode::Unresolved => property == self.modern || property == self.legacy,
            TitleMode::Modern => property == self.modern,
            TitleMode::Legacy => property == self.legacy,
        }
    }
}
