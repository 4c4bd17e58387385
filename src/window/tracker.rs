use tracing::{debug, info};
use x11rb::protocol::xproto::{Atom, NotifyDetail, NotifyMode, Window};

use crate::hooks::HookSink;
use crate::window::names::{detail_name, mode_name};
use crate::window::title::TitleResolver;
use crate::window::WindowSession;

/// Which window currently holds input focus, and its last-known title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusState {
    Unfocused,
    Focused {
        window: Window,
        title: Option<String>,
    },
}

/// Turns the raw FocusIn/PropertyNotify stream into confirmed focus and
/// title transitions. Owns the only copy of the focus state and the title
/// resolver; hooks fire exactly on accepted transitions.
pub struct FocusTracker {
    state: FocusState,
    titles: TitleResolver,
}

impl FocusTracker {
    pub fn new(titles: TitleResolver) -> Self {
        Self {
            state: FocusState::Unfocused,
            titles,
        }
    }

    pub fn state(&self) -> &FocusState {
        &self.state
    }

    /// Seed the state from the active-window hint, if the window manager
    /// maintains one. The hint's update timing relative to focus events is
    /// not well defined, so it is trusted only here; steady state relies on
    /// FocusIn events alone.
    pub fn init<S: WindowSession, H: HookSink>(&mut self, session: &S, hooks: &mut H, root: Window) {
        let Some(window) = session.active_window_hint(root) else {
            debug!("no active-window hint; starting unfocused");
            return;
        };
        let title = self.titles.resolve(session, window);
        info!("initial focus: window {} ({:?})", window, title);
        hooks.session_started(window, title.as_deref());
        self.state = FocusState::Focused { window, title };
    }

    /// Classify a FocusIn notification. A single logical focus change is
    /// replayed over the whole ancestor/descendant chain; only the
    /// NotifyNonlinear leaf event names the window that actually gained
    /// focus, so everything else is dropped.
    pub fn handle_focus_in<S: WindowSession, H: HookSink>(
        &mut self,
        session: &S,
        hooks: &mut H,
        window: Window,
        detail: NotifyDetail,
        mode: NotifyMode,
    ) {
        if detail != NotifyDetail::NONLINEAR {
            debug!(
                "dropping FocusIn on {} (detail {})",
                window,
                detail_name(detail)
            );
            return;
        }
        // Observed under at least ratpoison: the same leaf transition is
        // sometimes delivered as NotifyNormal and sometimes as
        // NotifyWhileGrabbed. The protocol does not promise this, but both
        // are accepted as the same logical event.
        if mode != NotifyMode::NORMAL && mode != NotifyMode::WHILE_GRABBED {
            debug!("dropping FocusIn on {} (mode {})", window, mode_name(mode));
            return;
        }

        let title = self.titles.resolve(session, window);
        info!("focus: window {} ({:?})", window, title);
        hooks.focus_changed(window, title.as_deref());
        self.state = FocusState::Focused { window, title };
    }

    /// A property change is a title change only if it hits the currently
    /// focused window and names the title property under the resolved
    /// convention.
    pub fn handle_property<S: WindowSession, H: HookSink>(
        &mut self,
        session: &S,
        hooks: &mut H,
        window: Window,
        property: Atom,
    ) {
        let focused = match &self.state {
            FocusState::Focused { window, .. } => *window,
            FocusState::Unfocused => return,
        };
        if window != focused || !self.titles.is_title_property(property) {
            return;
        }

        let title = self.titles.resolve(session, window);
        info!("title: window {} ({:?})", window, title);
        hooks.title_changed(window, title.as_deref());
        self.state = FocusState::Focused { window, title };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::testing::FakeSession;
    use crate::window::watch;

    const MODERN: Atom = 101;
    const LEGACY: Atom = 102;
    const ROOT: Window = 1;

    #[derive(Default)]
    struct RecordingHooks {
        calls: Vec<(&'static str, Window, Option<String>)>,
    }

    impl HookSink for RecordingHooks {
        fn session_started(&mut self, window: Window, title: Option<&str>) {
            self.calls.push(("start", window, title.map(str::to_string)));
        }

        fn focus_changed(&mut self, window: Window, title: Option<&str>) {
            self.calls.push(("focus", window, title.map(str::to_string)));
        }

        fn title_changed(&mut self, window: Window, title: Option<&str>) {
            self.calls.push(("title", window, title.map(str::to_string)));
        }
    }

    fn tracker() -> FocusTracker {
        FocusTracker::new(TitleResolver::new(MODERN, LEGACY))
    }

    #[test]
    fn no_hint_starts_unfocused_without_start_hook() {
        let session = FakeSession::new();
        let mut hooks = RecordingHooks::default();
        let mut tracker = tracker();

        tracker.init(&session, &mut hooks, ROOT);

        assert!(hooks.calls.is_empty());
        assert_eq!(*tracker.state(), FocusState::Unfocused);
    }

    #[test]
    fn hint_fires_start_hook_once() {
        let mut session = FakeSession::new();
        session.active = Some(42);
        session.set_title(42, MODERN, "Term");
        let mut hooks = RecordingHooks::default();
        let mut tracker = tracker();

        tracker.init(&session, &mut hooks, ROOT);

        assert_eq!(hooks.calls, vec![("start", 42, Some("Term".to_string()))]);
        assert_eq!(
            *tracker.state(),
            FocusState::Focused {
                window: 42,
                title: Some("Term".to_string())
            }
        );
    }

    #[test]
    fn nonlinear_leaf_focus_is_accepted() {
        let session = FakeSession::new();
        session.set_title(7, MODERN, "editor");
        let mut hooks = RecordingHooks::default();
        let mut tracker = tracker();

        tracker.handle_focus_in(
            &session,
            &mut hooks,
            7,
            NotifyDetail::NONLINEAR,
            NotifyMode::NORMAL,
        );

        assert_eq!(hooks.calls, vec![("focus", 7, Some("editor".to_string()))]);
    }

    #[test]
    fn ancestor_replay_is_dropped_after_leaf() {
        let session = FakeSession::new();
        let mut hooks = RecordingHooks::default();
        let mut tracker = tracker();

        tracker.handle_focus_in(
            &session,
            &mut hooks,
            7,
            NotifyDetail::NONLINEAR,
            NotifyMode::NORMAL,
        );
        tracker.handle_focus_in(
            &session,
            &mut hooks,
            7,
            NotifyDetail::ANCESTOR,
            NotifyMode::NORMAL,
        );

        assert_eq!(hooks.calls.len(), 1);
        assert_eq!(hooks.calls[0].1, 7);
    }

    #[test]
    fn non_leaf_details_never_fire() {
        let session = FakeSession::new();
        let mut hooks = RecordingHooks::default();
        let mut tracker = tracker();

        for detail in [
            NotifyDetail::ANCESTOR,
            NotifyDetail::VIRTUAL,
            NotifyDetail::INFERIOR,
            NotifyDetail::NONLINEAR_VIRTUAL,
            NotifyDetail::POINTER,
            NotifyDetail::POINTER_ROOT,
            NotifyDetail::NONE,
        ] {
            tracker.handle_focus_in(&session, &mut hooks, 7, detail, NotifyMode::NORMAL);
        }

        assert!(hooks.calls.is_empty());
        assert_eq!(*tracker.state(), FocusState::Unfocused);
    }

    #[test]
    fn grab_and_ungrab_modes_are_dropped() {
        let session = FakeSession::new();
        let mut hooks = RecordingHooks::default();
        let mut tracker = tracker();

        tracker.handle_focus_in(
            &session,
            &mut hooks,
            7,
            NotifyDetail::NONLINEAR,
            NotifyMode::GRAB,
        );
        tracker.handle_focus_in(
            &session,
            &mut hooks,
            7,
            NotifyDetail::NONLINEAR,
            NotifyMode::UNGRAB,
        );

        assert!(hooks.calls.is_empty());
    }

    #[test]
    fn while_grabbed_leaf_is_accepted() {
        let session = FakeSession::new();
        let mut hooks = RecordingHooks::default();
        let mut tracker = tracker();

        tracker.handle_focus_in(
            &session,
            &mut hooks,
            7,
            NotifyDetail::NONLINEAR,
            NotifyMode::WHILE_GRABBED,
        );

        assert_eq!(hooks.calls.len(), 1);
    }

    #[test]
    fn refocusing_the_same_window_fires_again() {
        let session = FakeSession::new();
        let mut hooks = RecordingHooks::default();
        let mut tracker = tracker();

        for _ in 0..2 {
            tracker.handle_focus_in(
                &session,
                &mut hooks,
                7,
                NotifyDetail::NONLINEAR,
                NotifyMode::NORMAL,
            );
        }

        assert_eq!(hooks.calls.len(), 2);
    }

    #[test]
    fn missing_title_does_not_block_the_transition() {
        let session = FakeSession::new();
        let mut hooks = RecordingHooks::default();
        let mut tracker = tracker();

        tracker.handle_focus_in(
            &session,
            &mut hooks,
            7,
            NotifyDetail::NONLINEAR,
            NotifyMode::NORMAL,
        );

        assert_eq!(hooks.calls, vec![("focus", 7, None)]);
        assert_eq!(
            *tracker.state(),
            FocusState::Focused {
                window: 7,
                title: None
            }
        );
    }

    #[test]
    fn property_change_on_other_window_is_ignored() {
        let session = FakeSession::new();
        session.set_title(7, MODERN, "editor");
        let mut hooks = RecordingHooks::default();
        let mut tracker = tracker();

        tracker.handle_focus_in(
            &session,
            &mut hooks,
            7,
            NotifyDetail::NONLINEAR,
            NotifyMode::NORMAL,
        );
        hooks.calls.clear();

        tracker.handle_property(&session, &mut hooks, 9, MODERN);

        assert!(hooks.calls.is_empty());
    }

    #[test]
    fn property_change_while_unfocused_is_ignored() {
        let session = FakeSession::new();
        let mut hooks = RecordingHooks::default();
        let mut tracker = tracker();

        tracker.handle_property(&session, &mut hooks, 7, MODERN);

        assert!(hooks.calls.is_empty());
    }

    #[test]
    fn legacy_property_is_ignored_once_locked_modern() {
        let session = FakeSession::new();
        session.set_title(7, MODERN, "editor");
        let mut hooks = RecordingHooks::default();
        let mut tracker = tracker();

        // First resolution locks the mode to modern.
        tracker.handle_focus_in(
            &session,
            &mut hooks,
            7,
            NotifyDetail::NONLINEAR,
            NotifyMode::NORMAL,
        );
        hooks.calls.clear();

        tracker.handle_property(&session, &mut hooks, 7, LEGACY);

        assert!(hooks.calls.is_empty());
    }

    #[test]
    fn title_change_refreshes_state_and_fires() {
        let session = FakeSession::new();
        session.set_title(7, MODERN, "editor");
        let mut hooks = RecordingHooks::default();
        let mut tracker = tracker();

        tracker.handle_focus_in(
            &session,
            &mut hooks,
            7,
            NotifyDetail::NONLINEAR,
            NotifyMode::NORMAL,
        );
        hooks.calls.clear();

        session.set_title(7, MODERN, "editor (draft)");
        tracker.handle_property(&session, &mut hooks, 7, MODERN);

        assert_eq!(
            hooks.calls,
            vec![("title", 7, Some("editor (draft)".to_string()))]
        );
        assert_eq!(
            *tracker.state(),
            FocusState::Focused {
                window: 7,
                title: Some("editor (draft)".to_string())
            }
        );
    }

    #[test]
    fn created_window_can_then_take_focus() {
        let mut session = FakeSession::new();
        session.children.insert(ROOT, vec![]);
        let mut hooks = RecordingHooks::default();
        let mut tracker = tracker();

        watch::watch_subtree(&session, ROOT).unwrap();
        assert!(session.subscribed.borrow().is_empty());

        watch::watch_new(&session, 99);
        assert_eq!(*session.subscribed.borrow(), vec![99]);

        tracker.handle_focus_in(
            &session,
            &mut hooks,
            99,
            NotifyDetail::NONLINEAR,
            NotifyMode::NORMAL,
        );

        assert_eq!(hooks.calls, vec![("focus", 99, None)]);
    }
}
