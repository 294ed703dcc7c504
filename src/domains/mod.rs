//! Domains module containing the badge widget's logic.
//!
//! The widget runs in three steps, each in its own subdomain:
//! catalog (what to show), render (markup), interaction (hover behavior).

pub mod catalog;
pub mod interaction;
pub mod render;
