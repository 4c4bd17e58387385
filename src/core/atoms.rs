x11rb::atom_manager! {
    /// The window properties this tool reads. _NET_WM_NAME and WM_NAME are
    /// the two competing title conventions; _NET_ACTIVE_WINDOW is only used
    /// opportunistically at startup.
    pub AtomCollection: AtomCollectionCookie {
        WM_NAME,
        _NET_WM_NAME,
        _NET_ACTIVE_WINDOW,
    }
}
