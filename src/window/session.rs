use x11rb::protocol::xproto::{
    Atom, AtomEnum, ChangeWindowAttributesAux, ConnectionExt, EventMask, Window,
};

use crate::core::context::Context;
use crate::window::{SessionError, WindowSession};

impl WindowSession for Context {
    fn children(&self, window: Window) -> Result<Vec<Window>, SessionError> {
        Ok(self.conn.query_tree(window)?.reply()?.children)
    }

    fn subscribe(&self, window: Window) -> Result<(), SessionError> {
        let values = ChangeWindowAttributesAux::new()
            .event_mask(EventMask::FOCUS_CHANGE | EventMask::PROPERTY_CHANGE);
        self.conn.change_window_attributes(window, &values)?.check()?;
        Ok(())
    }

    fn subscribe_root(&self, root: Window) -> Result<(), SessionError> {
        // SUBSTRUCTURE_NOTIFY on the root reports CreateNotify for new
        // top-level windows; FocusIn only arrives on windows carrying
        // FOCUS_CHANGE themselves.
        let values = ChangeWindowAttributesAux::new().event_mask(EventMask::SUBSTRUCTURE_NOTIFY);
        self.conn.change_window_attributes(root, &values)?.check()?;
        Ok(())
    }

    fn read_text_property(&self, window: Window, property: Atom) -> Option<String> {
        let reply = self
            .conn
            .get_property(false, window, property, AtomEnum::ANY, 0, 1024)
            .ok()?
            .reply()
            .ok()?;
        // GetProperty succeeds with type None when the property is absent.
        if reply.type_ == u32::from(AtomEnum::NONE) || reply.value.is_empty() {
            return None;
        }
        Some(String::from_utf8_lossy(&reply.value).into_owned())
    }

    fn active_window_hint(&self, root: Window) -> Option<Window> {
        let reply = self
            .conn
            .get_property(false, root, self.atoms._NET_ACTIVE_WINDOW, AtomEnum::WINDOW, 0, 1)
            .ok()?
            .reply()
            .ok()?;
        let window = reply.value32()?.next()?;
        if window == x11rb::NONE {
            None
        } else {
            Some(window)
        }
    }
}
