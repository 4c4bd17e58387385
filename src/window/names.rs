//! Human-readable names for protocol codes, for diagnostics only.

use x11rb::protocol::xproto::{NotifyDetail, NotifyMode};
use x11rb::protocol::Event;

pub fn event_name(event: &Event) -> &'static str {
    match event {
        Event::KeyPress(_) => "KeyPress",
        Event::KeyRelease(_) => "KeyRelease",
        Event::ButtonPress(_) => "ButtonPress",
        Event::ButtonRelease(_) => "ButtonRelease",
        Event::MotionNotify(_) => "MotionNotify",
        Event::EnterNotify(_) => "EnterNotify",
        Event::LeaveNotify(_) => "LeaveNotify",
        Event::FocusIn(_) => "FocusIn",
        Event::FocusOut(_) => "FocusOut",
        Event::KeymapNotify(_) => "KeymapNotify",
        Event::Expose(_) => "Expose",
        Event::GraphicsExposure(_) => "GraphicsExposure",
        Event::NoExposure(_) => "NoExposure",
        Event::VisibilityNotify(_) => "VisibilityNotify",
        Event::CreateNotify(_) => "CreateNotify",
        Event::DestroyNotify(_) => "DestroyNotify",
        Event::UnmapNotify(_) => "UnmapNotify",
        Event::MapNotify(_) => "MapNotify",
        Event::MapRequest(_) => "MapRequest",
        Event::ReparentNotify(_) => "ReparentNotify",
        Event::ConfigureNotify(_) => "ConfigureNotify",
        Event::ConfigureRequest(_) => "ConfigureRequest",
        Event::GravityNotify(_) => "GravityNotify",
        Event::ResizeRequest(_) => "ResizeRequest",
        Event::CirculateNotify(_) => "CirculateNotify",
        Event::CirculateRequest(_) => "CirculateRequest",
        Event::PropertyNotify(_) => "PropertyNotify",
        Event::SelectionClear(_) => "SelectionClear",
        Event::SelectionRequest(_) => "SelectionRequest",
        Event::SelectionNotify(_) => "SelectionNotify",
        Event::ColormapNotify(_) => "ColormapNotify",
        Event::ClientMessage(_) => "ClientMessage",
        Event::MappingNotify(_) => "MappingNotify",
        Event::Error(_) => "Error",
        _ => "unknown event type",
    }
}

pub fn detail_name(detail: NotifyDetail) -> &'static str {
    if detail == NotifyDetail::ANCESTOR {
        "NotifyAncestor"
    } else if detail == NotifyDetail::VIRTUAL {
        "NotifyVirtual"
    } else if detail == NotifyDetail::INFERIOR {
        "NotifyInferior"
    } else if detail == NotifyDetail::NONLINEAR {
        "NotifyNonlinear"
    } else if detail == NotifyDetail::NONLINEAR_VIRTUAL {
        "NotifyNonlinearVirtual"
    } else if detail == NotifyDetail::POINTER {
        "NotifyPointer"
    } else if detail == NotifyDetail::POINTER_ROOT {
        "NotifyPointerRoot"
    } else if detail == NotifyDetail::NONE {
        "NotifyDetailNone"
    } else {
        "unknown"
    }
}

pub fn mode_name(mode: NotifyMode) -> &'static str {
    if mode == NotifyMode::NORMAL {
        "NotifyNormal"
    } else if mode == NotifyMode::WHILE_GRABBED {
        "NotifyWhileGrabbed"
    } else if mode == NotifyMode::GRAB {
        "NotifyGrab"
    } else if mode == NotifyMode::UNGRAB {
        "NotifyUngrab"
    } else {
        "unknown"
    }
}
