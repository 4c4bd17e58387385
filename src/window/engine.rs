use anyhow::Result;
use tracing::{debug, info};
use x11rb::connection::Connection;
use x11rb::protocol::Event;

use crate::core::context::Context;
use crate::hooks::HookSink;
use crate::window::names;
use crate::window::policy::ErrorPolicy;
use crate::window::title::TitleResolver;
use crate::window::tracker::FocusTracker;
use crate::window::watch;
use crate::window::{SessionError, WindowSession};

/// The pull-dispatch event loop wiring the tree watcher, the focus tracker
/// and the hook dispatcher together over one X connection.
pub struct FocusEngine<H: HookSink> {
    ctx: Context,
    tracker: FocusTracker,
    hooks: H,
}

impl<H: HookSink> FocusEngine<H> {
    pub fn new(ctx: Context, hooks: H) -> Self {
        let titles = TitleResolver::new(ctx.atoms._NET_WM_NAME, ctx.atoms.WM_NAME);
        Self {
            ctx,
            tracker: FocusTracker::new(titles),
            hooks,
        }
    }

    /// Subscribe every screen's window tree. Must complete before `run`;
    /// a failure on any screen root is fatal.
    pub fn scan(&mut self) -> Result<(), SessionError> {
        for &root in &self.ctx.roots {
            info!("scanning window tree of root {}", root);
            self.ctx.subscribe_root(root)?;
            watch::watch_subtree(&self.ctx, root)?;
        }
        Ok(())
    }

    /// Block on the notification stream until the connection dies. Protocol
    /// errors are handed to the permissive policy from here on; anything
    /// that raced the scan is expected and harmless.
    pub fn run(&mut self) -> Result<()> {
        let mut policy = ErrorPolicy::permissive();

        self.tracker
            .init(&self.ctx, &mut self.hooks, self.ctx.roots[0]);

        loop {
            self.ctx.conn.flush()?;
            match self.ctx.conn.wait_for_event() {
                Ok(event) => self.dispatch(event, &mut policy),
                Err(e) => {
                    info!("X connection closed: {}", e);
                    break;
                }
            }
        }

        if policy.total() > 0 {
            info!(
                "suppressed {} late X errors ({} from vanished windows)",
                policy.total(),
                policy.vanished()
            );
        }
        Ok(())
    }

    fn dispatch(&mut self, event: Event, policy: &mut ErrorPolicy) {
        match event {
            Event::FocusIn(e) => self.tracker.handle_focus_in(
                &self.ctx,
                &mut self.hooks,
                e.event,
                e.detail,
                e.mode,
            ),
            Event::PropertyNotify(e) => {
                self.tracker
                    .handle_property(&self.ctx, &mut self.hooks, e.window, e.atom)
            }
            Event::CreateNotify(e) => watch::watch_new(&self.ctx, e.window),
            Event::Error(e) => policy.suppress(&e),
            // Focus loss is only ever observed through the next accepted
            // FocusIn; the rest are tree churn we subscribed to as a side
            // effect of SUBSTRUCTURE_NOTIFY.
            Event::FocusOut(_)
            | Event::DestroyNotify(_)
            | Event::UnmapNotify(_)
            | Event::MapNotify(_)
            | Event::ConfigureNotify(_) => {}
            other => debug!("unhandled {} event", names::event_name(&other)),
        }
    }
}
