mod core;
mod hooks;
mod window;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::core::context::Context;
use crate::hooks::ScriptHooks;
use crate::window::engine::FocusEngine;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting xfocus-hooks...");

    let ctx = match Context::new() {
        Ok(ctx) => {
            info!("Connected to X11 server ({} screen(s)).", ctx.roots.len());
            ctx
        }
        Err(e) => {
            error!("Failed to connect to X11 server: {}", e);
            return Err(e);
        }
    };

    let hooks = ScriptHooks::from_build_config();
    let mut engine = FocusEngine::new(ctx, hooks);

    if let Err(e) = engine.scan() {
        error!("Startup window scan failed: {}", e);
        return Err(e.into());
    }

    engine.run()
}
