use std::process::Command;

use tracing::{info, warn};
use x11rb::protocol::xproto::Window;

/// Hook commands are baked in at build time. They are deployment
/// configuration, not runtime input; leaving a variable unset disables
/// that hook.
const START_HOOK: Option<&str> = option_env!("XFOCUS_START_HOOK");
const FOCUS_HOOK: Option<&str> = option_env!("XFOCUS_FOCUS_HOOK");
const TITLE_HOOK: Option<&str> = option_env!("XFOCUS_TITLE_HOOK");

/// Receiver for confirmed transitions out of the focus tracker.
pub trait HookSink {
    fn session_started(&mut self, window: Window, title: Option<&str>);
    fn focus_changed(&mut self, window: Window, title: Option<&str>);
    fn title_changed(&mut self, window: Window, title: Option<&str>);
}

#[derive(Debug, PartialEq, Eq)]
enum HookOutcome {
    SpawnFailed,
    Exited(i32),
    Signaled(i32),
}

/// Spawn a hook script with the window id and title as its two arguments
/// and wait for it to finish. The outcome is diagnostic only and never
/// feeds back into tracking. `Command::status` retries an interrupted wait
/// internally, so a signal landing mid-wait is not a failure.
fn run_script(script: &str, window: Window, title: Option<&str>) -> HookOutcome {
    let title = title.unwrap_or("");
    match Command::new(script).arg(window.to_string()).arg(title).status() {
        Err(e) => {
            warn!("failed to run `{}`: {}", script, e);
            HookOutcome::SpawnFailed
        }
        Ok(status) => {
            if let Some(code) = status.code() {
                if code != 0 {
                    warn!("`{} {} \"{}\"` exited {}", script, window, title, code);
                }
                HookOutcome::Exited(code)
            } else {
                use std::os::unix::process::ExitStatusExt;
                let signal = status.signal().unwrap_or(0);
                warn!(
                    "`{} {} \"{}\"` was terminated by signal {}",
                    script, window, title, signal
                );
                HookOutcome::Signaled(signal)
            }
        }
    }
}

/// Dispatches transitions to the configured hook scripts, synchronously.
/// A slow hook stalls the event loop; that is the accepted tradeoff of
/// running hooks inline.
pub struct ScriptHooks {
    start: Option<&'static str>,
    focus: Option<&'static str>,
    title: Option<&'static str>,
}

impl ScriptHooks {
    pub fn from_build_config() -> Self {
        for (name, script) in [
            ("start", START_HOOK),
            ("focus", FOCUS_HOOK),
            ("title", TITLE_HOOK),
        ] {
            match script {
                Some(script) => info!("{} hook: {}", name, script),
                None => info!("{} hook: disabled", name),
            }
        }
        Self {
            start: START_HOOK,
            focus: FOCUS_HOOK,
            title: TITLE_HOOK,
        }
    }
}

impl HookSink for ScriptHooks {
    fn session_started(&mut self, window: Window, title: Option<&str>) {
        if let Some(script) = self.start {
            run_script(script, window, title);
        }
    }

    fn focus_changed(&mut self, window: Window, title: Option<&str>) {
        if let Some(script) = self.focus {
            run_script(script, window, title);
        }
    }

    fn title_changed(&mut self, window: Window, title: Option<&str>) {
        if let Some(script) = self.title {
            run_script(script, window, title);
        }
    }
}
