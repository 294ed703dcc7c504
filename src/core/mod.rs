//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the badge
//! widget: configuration, error handling, the in-memory document model and
//! the page lifecycle.

pub mod config;
pub mod dom;
pub mod error;
pub mod page;

pub use config::Config;
pub use dom::{Document, DomError, NodeId};
pub use error::{Error, Result};
pub use page::ToolsPage;
