//! The page hosting the badge widget and its load lifecycle.
//!
//! A page owns a document that contains the container element. Loading a
//! catalog renders it into the container and binds hover behavior to the
//! icons that were just created.

use std::io::Write;

use tracing::{info, instrument};

use super::config::Config;
use super::dom::{Document, DomError, NodeId};
use super::error::{Error, Result};
use crate::domains::catalog::Catalog;
use crate::domains::interaction::{InteractionBinding, bind_interactions, unbind_all};
use crate::domains::render::{RenderedTool, ToolRenderer};

/// A document plus the widget state attached to it.
#[derive(Debug)]
pub struct ToolsPage {
    config: Config,
    document: Document,
    renderer: ToolRenderer,
    bindings: Vec<InteractionBinding>,
}

impl ToolsPage {
    /// Create a page whose body holds an empty `section` carrying the
    /// configured container id.
    pub fn new(config: Config) -> Result<Self> {
        if config.page.container_id.trim().is_empty() {
            return Err(Error::config("container id must not be empty"));
        }

        let mut document = Document::new();
        let body = document.body();
        let container = document.create_element("section");
        document.set_attribute(container, "id", &config.page.container_id)?;
        document.append_child(body, container)?;

        Ok(Self::with_document(config, document))
    }

    /// Wrap an existing document. The container is looked up on load.
    pub fn with_document(config: Config, document: Document) -> Self {
        Self {
            renderer: ToolRenderer::new(config.page.clone()),
            config,
            document,
            bindings: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access, e.g. for dispatching input events.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn bindings(&self) -> &[InteractionBinding] {
        &self.bindings
    }

    /// The container element, if the document has one.
    pub fn container(&self) -> Result<NodeId> {
        self.document
            .get_element_by_id(&self.config.page.container_id)
            .ok_or_else(|| DomError::container_not_found(&self.config.page.container_id).into())
    }

    /// Render `catalog` into the container and bind the new icons.
    ///
    /// Nothing is rendered when the container is missing. Loading again
    /// appends another copy of every badge.
    #[instrument(skip_all, fields(container = %self.config.page.container_id))]
    pub fn load(&mut self, catalog: &Catalog) -> Result<Vec<RenderedTool>> {
        let rendered = self.renderer.render_into(&mut self.document, catalog)?;

        let icons: Vec<NodeId> = rendered.iter().map(|r| r.icon).collect();
        let bindings = bind_interactions(&mut self.document, &icons)?;
        self.bindings.extend(bindings);

        info!(
            "Page loaded: {} badges, {} bound icons",
            rendered.len(),
            self.bindings.len()
        );
        Ok(rendered)
    }

    /// Remove every listener bound by previous loads.
    pub fn unbind(&mut self) {
        let bindings = std::mem::take(&mut self.bindings);
        unbind_all(&mut self.document, bindings);
    }

    /// The container and its badges as markup.
    pub fn fragment_html(&self) -> Result<String> {
        Ok(self.document.outer_html(self.container()?)?)
    }

    /// Write the fragment followed by a newline.
    pub fn write_fragment(&self, out: &mut impl Write) -> Result<()> {
        let html = self.fragment_html()?;
        writeln!(out, "{}", html)?;
        Ok(())
    }
}
