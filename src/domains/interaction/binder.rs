//! Hover and touch highlighting for rendered badges.

use std::rc::Rc;

use tracing::{debug, instrument, trace};

use crate::core::dom::{
    Document, DomError, Event, EventKind, ListenerId, ListenerOptions, NodeId,
};
use crate::domains::render::ICON_CLASS;

/// Added to an icon while it is engaged.
pub const COLORED_CLASS: &str = "colored";

/// Added to the icon's parent link while the icon is engaged.
pub const HOVERED_CLASS: &str = "hovered";

/// Events that start highlighting.
pub const ENGAGE_EVENTS: [EventKind; 2] = [EventKind::MouseEnter, EventKind::TouchStart];

/// Events that stop highlighting.
pub const RELEASE_EVENTS: [EventKind; 3] = [
    EventKind::MouseLeave,
    EventKind::TouchEnd,
    EventKind::TouchCancel,
];

/// The listeners attached to one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionBinding {
    icon: NodeId,
    listeners: Vec<ListenerId>,
}

impl InteractionBinding {
    pub fn icon(&self) -> NodeId {
        self.icon
    }

    pub fn listeners(&self) -> &[ListenerId] {
        &self.listeners
    }

    /// Remove every listener this binding registered.
    pub fn unbind(self, document: &mut Document) {
        for id in self.listeners {
            document.remove_event_listener(id);
        }
        trace!("Unbound listeners from {}", self.icon);
    }
}

/// Every badge icon under `container`, in document order.
pub fn icons_under(document: &Document, container: NodeId) -> Vec<NodeId> {
    document.query_by_class(container, ICON_CLASS)
}

/// Attach passive highlight listeners to each icon in `icons`.
///
/// Every icon is checked first, so an unknown handle leaves the document
/// without any new listeners.
#[instrument(skip_all, fields(icons = icons.len()))]
pub fn bind_interactions(
    document: &mut Document,
    icons: &[NodeId],
) -> Result<Vec<InteractionBinding>, DomError> {
    for &icon in icons {
        document.element(icon)?;
    }

    let bindings = icons
        .iter()
        .map(|&icon| bind_icon(document, icon))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Bound interactions on {} icons", bindings.len());
    Ok(bindings)
}

/// Remove the listeners of every binding.
pub fn unbind_all(document: &mut Document, bindings: Vec<InteractionBinding>) {
    for binding in bindings {
        binding.unbind(document);
    }
}

fn bind_icon(document: &mut Document, icon: NodeId) -> Result<InteractionBinding, DomError> {
    document.element(icon)?;

    let mut listeners = Vec::with_capacity(ENGAGE_EVENTS.len() + RELEASE_EVENTS.len());
    for kind in ENGAGE_EVENTS {
        listeners.push(document.add_event_listener(
            icon,
            kind,
            ListenerOptions::passive(),
            Rc::new(move |doc: &mut Document, _: &mut Event| highlight(doc, icon, true)),
        )?);
    }
    for kind in RELEASE_EVENTS {
        listeners.push(document.add_event_listener(
            icon,
            kind,
            ListenerOptions::passive(),
            Rc::new(move |doc: &mut Document, _: &mut Event| highlight(doc, icon, false)),
        )?);
    }

    Ok(InteractionBinding { icon, listeners })
}

fn highlight(document: &mut Document, icon: NodeId, on: bool) {
    if let Err(e) = toggle_highlight(document, icon, on) {
        trace!("Skipping highlight on {}: {}", icon, e);
    }
}

fn toggle_highlight(document: &mut Document, icon: NodeId, on: bool) -> Result<(), DomError> {
    let parent = document.parent(icon)?;
    if on {
        document.add_classes(icon, &[COLORED_CLASS])?;
        if let Some(parent) = parent {
            document.add_classes(parent, &[HOVERED_CLASS])?;
        }
    } else {
        document.remove_classes(icon, &[COLORED_CLASS])?;
        if let Some(parent) = parent {
            document.remove_classes(parent, &[HOVERED_CLASS])?;
        }
    }
    Ok(())
}
