//! Catalog domain module.
//!
//! The catalog is the ordered list of badges shown on the page. It is plain
//! data: descriptors are never mutated once the catalog is built.
//!
//! ## Architecture
//!
//! - `descriptor.rs` - `ToolDescriptor` and default resolution
//! - `loader.rs` - `Catalog` and JSON loading
//! - `registry.rs` - the built-in tool list
//! - `error.rs` - Catalog-specific error types

mod descriptor;
mod error;
mod loader;
mod registry;

pub use descriptor::{DEFAULT_ICON_TYPE, ResolvedTool, ToolDescriptor, capitalize_first};
pub use error::CatalogError;
pub use loader::Catalog;
