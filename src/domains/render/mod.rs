//! Render domain module.
//!
//! Turns catalog entries into badge markup inside the page container: an
//! `a.tool` link per entry wrapping an `i.tool-icon` glyph.

mod renderer;

pub use renderer::{
    DISABLED_CLASS, GLYPH_PREFIX, ICON_CLASS, RenderedTool, TOOL_CLASS, ToolRenderer,
};
