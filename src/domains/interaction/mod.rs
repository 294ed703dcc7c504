//! Interaction domain module.
//!
//! Highlights a badge while the pointer is over it or a finger is on it:
//! the icon gets `colored`, its link gets `hovered`. Bindings hand back
//! listener handles so a re-render can tear the old listeners down first.

mod binder;

pub use binder::{
    COLORED_CLASS, ENGAGE_EVENTS, HOVERED_CLASS, InteractionBinding, RELEASE_EVENTS,
    bind_interactions, icons_under, unbind_all,
};
