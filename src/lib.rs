//! Tool badge widget.
//!
//! Renders a catalog of technology badges (devicon glyphs wrapped in tag
//! links) into a page container and highlights a badge while it is hovered
//! or touched.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the in-memory document model
//!   and the page that ties the steps together
//! - **domains**: the widget itself
//!   - **catalog**: the ordered list of tool descriptors
//!   - **render**: one `a.tool > i.tool-icon` pair per descriptor
//!   - **interaction**: `colored`/`hovered` toggling on pointer and touch
//!
//! # Example
//!
//! ```rust
//! use tool_badges::{Config, ToolsPage};
//! use tool_badges::domains::catalog::Catalog;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut page = ToolsPage::new(Config::default())?;
//!     page.load(&Catalog::builtin())?;
//!     println!("{}", page.fragment_html()?);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, Result, ToolsPage};
