use anyhow::Result;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::Window;
use x11rb::rust_connection::RustConnection;

use crate::core::atoms::AtomCollection;

pub struct Context {
    pub conn: RustConnection,
    pub roots: Vec<Window>,
    pub atoms: AtomCollection,
}

impl Context {
    pub fn new() -> Result<Self> {
        let (conn, _screen_num) = x11rb::connect(None)?;
        let roots = conn.setup().roots.iter().map(|screen| screen.root).collect();
        let atoms = AtomCollection::new(&conn)?.reply()?;

        Ok(Self { conn, roots, atoms })
    }
}
