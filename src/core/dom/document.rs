//! Arena-backed element tree.

use std::collections::BTreeMap;
use std::fmt;

use tracing::trace;

use super::error::DomError;
use super::event::{Event, EventKind, Listener, ListenerId, ListenerOptions, Registration};

/// Handle to an element owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// A single element: tag name, class list, attributes and tree links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Class list in insertion order, without duplicates.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The `class` attribute as it would appear in markup.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attributes other than `class`, in the order they were first set.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// An in-memory page: a tree of elements rooted at `body`, plus the
/// listeners registered on them.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    body: NodeId,
    listeners: BTreeMap<ListenerId, Registration>,
    next_listener: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only `body`.
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
            body: NodeId(0),
            listeners: BTreeMap::new(),
            next_listener: 0,
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    pub fn element(&self, node: NodeId) -> Result<&Element, DomError> {
        self.nodes.get(node.0).ok_or(DomError::UnknownNode(node))
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut Element, DomError> {
        self.nodes.get_mut(node.0).ok_or(DomError::UnknownNode(node))
    }

    /// First attached element, in document order, whose `id` matches.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .find(|&node| self.nodes[node.0].id() == Some(id))
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.element(parent)?;
        self.element(child)?;

        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return Err(DomError::HierarchyRequest { parent, child });
            }
            cursor = self.nodes[node.0].parent;
        }

        if let Some(old_parent) = self.nodes[child.0].parent.take() {
            self.nodes[old_parent.0].children.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, DomError> {
        Ok(self.element(node)?.parent)
    }

    pub fn children(&self, node: NodeId) -> Result<&[NodeId], DomError> {
        Ok(self.element(node)?.children())
    }

    /// All descendants of `root` in pre-order, excluding `root` itself.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let Some(element) = self.nodes.get(root.0) else {
            return out;
        };
        let mut stack: Vec<NodeId> = element.children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        out
    }

    /// Descendants of `root` carrying `class`, in document order.
    pub fn query_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&node| self.nodes[node.0].has_class(class))
            .collect()
    }

    /// Add classes; already present ones are left in place.
    pub fn add_classes(&mut self, node: NodeId, classes: &[&str]) -> Result<(), DomError> {
        let element = self.element_mut(node)?;
        for class in classes {
            if !element.has_class(class) {
                element.classes.push((*class).to_string());
            }
        }
        Ok(())
    }

    pub fn remove_classes(&mut self, node: NodeId, classes: &[&str]) -> Result<(), DomError> {
        let element = self.element_mut(node)?;
        element.classes.retain(|c| !classes.contains(&c.as_str()));
        Ok(())
    }

    /// Replace the whole class list with the whitespace-separated `value`.
    pub fn set_class_name(&mut self, node: NodeId, value: &str) -> Result<(), DomError> {
        let element = self.element_mut(node)?;
        element.classes.clear();
        for class in value.split_whitespace() {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        }
        Ok(())
    }

    /// Set an attribute. `class` is routed to the class list.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        if name == "class" {
            return self.set_class_name(node, value);
        }
        let element = self.element_mut(node)?;
        match element.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => element
                .attributes
                .push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    /// Register `listener` for `kind` events targeting `node`.
    pub fn add_event_listener(
        &mut self,
        node: NodeId,
        kind: EventKind,
        options: ListenerOptions,
        listener: Listener,
    ) -> Result<ListenerId, DomError> {
        self.element(node)?;
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(
            id,
            Registration {
                node,
                kind,
                options,
                callback: listener,
            },
        );
        trace!("Registered {} listener {:?} on {}", kind, id, node);
        Ok(id)
    }

    /// Returns `false` when the handle was already removed.
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Number of listeners currently registered on `node`.
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners.values().filter(|r| r.node == node).count()
    }

    /// Options a listener was registered with, if it is still registered.
    pub fn listener_options(&self, id: ListenerId) -> Option<ListenerOptions> {
        self.listeners.get(&id).map(|r| r.options)
    }

    /// Deliver an event to the listeners of `target`, in registration order.
    ///
    /// Events do not bubble. A listener removed by an earlier listener in the
    /// same dispatch is skipped.
    pub fn dispatch_event(&mut self, target: NodeId, kind: EventKind) -> Result<Event, DomError> {
        self.element(target)?;

        let matching: Vec<(ListenerId, ListenerOptions, Listener)> = self
            .listeners
            .iter()
            .filter(|(_, r)| r.node == target && r.kind == kind)
            .map(|(id, r)| (*id, r.options, r.callback.clone()))
            .collect();

        let mut event = Event::new(kind, target);
        for (id, options, callback) in matching {
            if !self.listeners.contains_key(&id) {
                continue;
            }
            event.enter_listener(options);
            callback(self, &mut event);
        }
        event.enter_listener(ListenerOptions::default());
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_append_child_preserves_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.create_element("a");
        let b = doc.create_element("b");
        doc.append_child(body, a).unwrap();
        doc.append_child(body, b).unwrap();

        assert_eq!(doc.children(body).unwrap(), &[a, b]);
        assert_eq!(doc.parent(a).unwrap(), Some(body));
    }

    #[test]
    fn test_append_child_moves_between_parents() {
        let mut doc = Document::new();
        let body = doc.body();
        let first = doc.create_element("div");
        let second = doc.create_element("div");
        let child = doc.create_element("span");
        doc.append_child(body, first).unwrap();
        doc.append_child(body, second).unwrap();
        doc.append_child(first, child).unwrap();
        doc.append_child(second, child).unwrap();

        assert!(doc.children(first).unwrap().is_empty());
        assert_eq!(doc.children(second).unwrap(), &[child]);
    }

    #[test]
    fn test_append_child_rejects_cycle() {
        let mut doc = Document::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("div");
        doc.append_child(outer, inner).unwrap();

        let err = doc.append_child(inner, outer).unwrap_err();
        assert_eq!(
            err,
            DomError::HierarchyRequest {
                parent: inner,
                child: outer
            }
        );
    }

    #[test]
    fn test_get_element_by_id_ignores_detached() {
        let mut doc = Document::new();
        let detached = doc.create_element("div");
        doc.set_attribute(detached, "id", "tools").unwrap();
        assert_eq!(doc.get_element_by_id("tools"), None);

        let body = doc.body();
        doc.append_child(body, detached).unwrap();
        assert_eq!(doc.get_element_by_id("tools"), Some(detached));
    }

    #[test]
    fn test_class_list_is_idempotent() {
        let mut doc = Document::new();
        let node = doc.create_element("i");
        doc.add_classes(node, &["colored"]).unwrap();
        doc.add_classes(node, &["colored", "big"]).unwrap();
        assert_eq!(doc.element(node).unwrap().class_name(), "colored big");

        doc.remove_classes(node, &["colored"]).unwrap();
        doc.remove_classes(node, &["colored"]).unwrap();
        assert_eq!(doc.element(node).unwrap().class_name(), "big");
    }

    #[test]
    fn test_set_attribute_class_routes_to_class_list() {
        let mut doc = Document::new();
        let node = doc.create_element("i");
        doc.set_attribute(node, "class", "  a b  a ").unwrap();

        let element = doc.element(node).unwrap();
        assert_eq!(element.classes(), &["a".to_string(), "b".to_string()]);
        assert!(element.attributes().is_empty());
    }

    #[test]
    fn test_query_by_class_document_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let link = doc.create_element("a");
        let icon = doc.create_element("i");
        let other = doc.create_element("i");
        doc.add_classes(icon, &["tool-icon"]).unwrap();
        doc.add_classes(other, &["tool-icon"]).unwrap();
        doc.append_child(body, link).unwrap();
        doc.append_child(link, icon).unwrap();
        doc.append_child(body, other).unwrap();

        assert_eq!(doc.query_by_class(body, "tool-icon"), vec![icon, other]);
    }

    #[test]
    fn test_unknown_node() {
        let doc = Document::new();
        let err = doc.element(NodeId(42)).unwrap_err();
        assert_eq!(err, DomError::UnknownNode(NodeId(42)));
    }

    #[test]
    fn test_dispatch_runs_matching_listeners_only() {
        let mut doc = Document::new();
        let node = doc.create_element("i");
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        doc.add_event_listener(
            node,
            EventKind::MouseEnter,
            ListenerOptions::default(),
            Rc::new(move |_: &mut Document, _: &mut Event| counter.set(counter.get() + 1)),
        )
        .unwrap();

        doc.dispatch_event(node, EventKind::MouseLeave).unwrap();
        assert_eq!(hits.get(), 0);
        let event = doc.dispatch_event(node, EventKind::MouseEnter).unwrap();
        assert_eq!(hits.get(), 1);
        assert_eq!(event.kind(), EventKind::MouseEnter);
        assert_eq!(event.target(), node);
    }

    #[test]
    fn test_listener_removed_mid_dispatch_is_skipped() {
        let mut doc = Document::new();
        let node = doc.create_element("i");
        let later: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
        let hits = Rc::new(Cell::new(0));

        let target = later.clone();
        doc.add_event_listener(
            node,
            EventKind::TouchStart,
            ListenerOptions::passive(),
            Rc::new(move |doc: &mut Document, _: &mut Event| {
                if let Some(id) = target.get() {
                    doc.remove_event_listener(id);
                }
            }),
        )
        .unwrap();
        let counter = hits.clone();
        let second = doc
            .add_event_listener(
                node,
                EventKind::TouchStart,
                ListenerOptions::passive(),
                Rc::new(move |_: &mut Document, _: &mut Event| counter.set(counter.get() + 1)),
            )
            .unwrap();
        later.set(Some(second));

        doc.dispatch_event(node, EventKind::TouchStart).unwrap();
        assert_eq!(hits.get(), 0);
        assert_eq!(doc.listener_count(node), 1);
    }

    #[test]
    fn test_passive_listener_cannot_prevent_default() {
        let mut doc = Document::new();
        let node = doc.create_element("i");
        doc.add_event_listener(
            node,
            EventKind::TouchStart,
            ListenerOptions::passive(),
            Rc::new(|_: &mut Document, event: &mut Event| event.prevent_default()),
        )
        .unwrap();

        let event = doc.dispatch_event(node, EventKind::TouchStart).unwrap();
        assert!(!event.default_prevented());
    }

    #[test]
    fn test_active_listener_can_prevent_default() {
        let mut doc = Document::new();
        let node = doc.create_element("i");
        doc.add_event_listener(
            node,
            EventKind::TouchStart,
            ListenerOptions::default(),
            Rc::new(|_: &mut Document, event: &mut Event| event.prevent_default()),
        )
        .unwrap();

        let event = doc.dispatch_event(node, EventKind::TouchStart).unwrap();
        assert!(event.default_prevented());
    }

    #[test]
    fn test_removed_listener_not_called() {
        let mut doc = Document::new();
        let node = doc.create_element("i");
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let id = doc
            .add_event_listener(
                node,
                EventKind::TouchEnd,
                ListenerOptions::passive(),
                Rc::new(move |_: &mut Document, _: &mut Event| counter.set(counter.get() + 1)),
            )
            .unwrap();

        assert!(doc.remove_event_listener(id));
        assert!(!doc.remove_event_listener(id));
        doc.dispatch_event(node, EventKind::TouchEnd).unwrap();
        assert_eq!(hits.get(), 0);
        assert_eq!(doc.listener_count(node), 0);
    }

    #[test]
    fn test_listener_can_mutate_document() {
        let mut doc = Document::new();
        let node = doc.create_element("i");
        doc.add_event_listener(
            node,
            EventKind::MouseEnter,
            ListenerOptions::passive(),
            Rc::new(|doc: &mut Document, event: &mut Event| {
                doc.add_classes(event.target(), &["colored"]).unwrap();
            }),
        )
        .unwrap();

        doc.dispatch_event(node, EventKind::MouseEnter).unwrap();
        assert!(doc.element(node).unwrap().has_class("colored"));
    }
}
