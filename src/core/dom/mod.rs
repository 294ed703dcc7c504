//! In-memory document model.
//!
//! A small stand-in for the browser DOM: elements live in an arena owned by
//! [`Document`] and are addressed by [`NodeId`]. It covers what the badge
//! widget touches and nothing more:
//!
//! - element creation, `getElementById`, parent/child links
//! - class lists and attributes
//! - event listeners with passive options, removable through handles
//! - synchronous event dispatch
//! - HTML serialization
//!
//! Everything is single-threaded; listeners receive `&mut Document` while
//! they run.

mod document;
mod error;
mod event;
mod html;

pub use document::{Document, Element, NodeId};
pub use error::DomError;
pub use event::{Event, EventKind, Listener, ListenerId, ListenerOptions};
