//! Pointer and touch events dispatched to elements.

use std::fmt;
use std::rc::Rc;

use super::{Document, NodeId};

/// Input events the document knows how to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MouseEnter,
    MouseLeave,
    TouchStart,
    TouchEnd,
    TouchCancel,
}

impl EventKind {
    /// The DOM event name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::TouchStart => "touchstart",
            Self::TouchEnd => "touchend",
            Self::TouchCancel => "touchcancel",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options supplied when registering a listener.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// A passive listener cannot cancel the event it handles.
    pub passive: bool,
}

impl ListenerOptions {
    pub fn passive() -> Self {
        Self { passive: true }
    }
}

/// Handle identifying one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(super) u64);

/// Callback invoked during dispatch.
pub type Listener = Rc<dyn Fn(&mut Document, &mut Event)>;

/// An event travelling to its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    target: NodeId,
    default_prevented: bool,
    in_passive_listener: bool,
}

impl Event {
    pub(super) fn new(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            default_prevented: false,
            in_passive_listener: false,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Request cancellation of the default action.
    ///
    /// Ignored while a passive listener is running.
    pub fn prevent_default(&mut self) {
        if !self.in_passive_listener {
            self.default_prevented = true;
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub(super) fn enter_listener(&mut self, options: ListenerOptions) {
        self.in_passive_listener = options.passive;
    }
}

/// A listener as stored by the document.
#[derive(Clone)]
pub(super) struct Registration {
    pub(super) node: NodeId,
    pub(super) kind: EventKind,
    pub(super) options: ListenerOptions,
    pub(super) callback: Listener,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("node", &self.node)
            .field("kind", &self.kind)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
