//! Builds badge elements from catalog entries.

use tracing::{debug, info, instrument};

use crate::core::config::PageConfig;
use crate::core::dom::{Document, DomError, NodeId};
use crate::domains::catalog::{Catalog, ToolDescriptor};

/// Class on every badge link.
pub const TOOL_CLASS: &str = "tool";

/// Extra link class for badges that do not navigate.
pub const DISABLED_CLASS: &str = "disabled";

/// Class on every badge icon; the binder looks icons up by it.
pub const ICON_CLASS: &str = "tool-icon";

/// Icon font prefix of the glyph selector class.
pub const GLYPH_PREFIX: &str = "devicon";

/// The link/icon pair created for one descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedTool {
    pub link: NodeId,
    pub icon: NodeId,
}

/// Appends one link-wrapped icon per catalog entry to a container.
///
/// Rendering only ever appends: existing children of the container are
/// neither read nor removed, so rendering twice shows every badge twice.
#[derive(Debug, Clone)]
pub struct ToolRenderer {
    config: PageConfig,
}

impl ToolRenderer {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    /// Locate the configured container by id and render into it.
    pub fn render_into(
        &self,
        document: &mut Document,
        catalog: &Catalog,
    ) -> Result<Vec<RenderedTool>, DomError> {
        let container = document
            .get_element_by_id(&self.config.container_id)
            .ok_or_else(|| DomError::container_not_found(&self.config.container_id))?;
        self.render(document, container, catalog)
    }

    /// Render every catalog entry into `container`, in catalog order.
    #[instrument(skip_all, fields(container = %container, tools = catalog.len()))]
    pub fn render(
        &self,
        document: &mut Document,
        container: NodeId,
        catalog: &Catalog,
    ) -> Result<Vec<RenderedTool>, DomError> {
        document.element(container)?;

        let rendered = catalog
            .iter()
            .map(|tool| self.render_tool(document, container, tool))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Rendered {} tools", rendered.len());
        Ok(rendered)
    }

    fn render_tool(
        &self,
        document: &mut Document,
        container: NodeId,
        tool: &ToolDescriptor,
    ) -> Result<RenderedTool, DomError> {
        let tool = tool.resolve();

        let link = document.create_element("a");
        if tool.clickable {
            document.add_classes(link, &[TOOL_CLASS])?;
        } else {
            document.add_classes(link, &[TOOL_CLASS, DISABLED_CLASS])?;
        }
        if let Some(href) = tool.href(&self.config.tag_route_prefix) {
            document.set_attribute(link, "href", &href)?;
        }
        document.set_attribute(link, "title", &tool.title)?;

        let icon = document.create_element("i");
        let class_name = format!("{} {}", ICON_CLASS, tool.glyph_class(GLYPH_PREFIX));
        document.set_class_name(icon, &class_name)?;

        document.append_child(link, icon)?;
        document.append_child(container, link)?;

        debug!("Rendered tool '{}' as {}", tool.icon, link);
        Ok(RenderedTool { link, icon })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_container() -> (Document, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let container = doc.create_element("div");
        doc.set_attribute(container, "id", "tools").unwrap();
        doc.append_child(body, container).unwrap();
        (doc, container)
    }

    fn renderer() -> ToolRenderer {
        ToolRenderer::new(PageConfig::default())
    }

    fn catalog(tools: Vec<ToolDescriptor>) -> Catalog {
        Catalog::new(tools).unwrap()
    }

    #[test]
    fn test_one_link_with_one_icon_per_entry() {
        let (mut doc, container) = page_with_container();
        let catalog = catalog(vec![
            ToolDescriptor::new("linux"),
            ToolDescriptor::new("docker"),
            ToolDescriptor::new("git"),
        ]);

        let rendered = renderer().render(&mut doc, container, &catalog).unwrap();

        let links = doc.children(container).unwrap().to_vec();
        assert_eq!(links.len(), 3);
        assert_eq!(links, rendered.iter().map(|r| r.link).collect::<Vec<_>>());
        for (link, tool) in links.iter().zip(catalog.iter()) {
            let children = doc.children(*link).unwrap();
            assert_eq!(children.len(), 1);
            let icon = doc.element(children[0]).unwrap();
            assert_eq!(icon.tag(), "i");
            assert!(icon.has_class(&format!("devicon-{}-plain", tool.icon)));
        }
    }

    #[test]
    fn test_defaults_applied_from_icon_only() {
        let (mut doc, container) = page_with_container();
        let catalog = catalog(vec![ToolDescriptor::new("python")]);

        let rendered = renderer().render(&mut doc, container, &catalog).unwrap();

        let link = doc.element(rendered[0].link).unwrap();
        assert_eq!(link.tag(), "a");
        assert_eq!(link.class_name(), "tool");
        assert_eq!(link.attribute("href"), Some("/tags/python"));
        assert_eq!(link.attribute("title"), Some("Python"));

        let icon = doc.element(rendered[0].icon).unwrap();
        assert_eq!(icon.class_name(), "tool-icon devicon-python-plain");
    }

    #[test]
    fn test_not_clickable_is_disabled_without_href() {
        let (mut doc, container) = page_with_container();
        let catalog = catalog(vec![ToolDescriptor::new("vim").clickable(false)]);

        let rendered = renderer().render(&mut doc, container, &catalog).unwrap();

        let link = doc.element(rendered[0].link).unwrap();
        assert_eq!(link.class_name(), "tool disabled");
        assert_eq!(link.attribute("href"), None);
        assert_eq!(link.attribute("title"), Some("Vim"));
    }

    #[test]
    fn test_hint_capitalized_and_tag_used_for_route() {
        let (mut doc, container) = page_with_container();
        let catalog = catalog(vec![
            ToolDescriptor::new("googlecloud")
                .tag("gcp")
                .hint("google cloud")
                .icon_type("original"),
        ]);

        let rendered = renderer().render(&mut doc, container, &catalog).unwrap();

        let link = doc.element(rendered[0].link).unwrap();
        assert_eq!(link.attribute("title"), Some("Google cloud"));
        assert_eq!(link.attribute("href"), Some("/tags/gcp"));
        let icon = doc.element(rendered[0].icon).unwrap();
        assert_eq!(icon.class_name(), "tool-icon devicon-googlecloud-original");
    }

    #[test]
    fn test_render_twice_duplicates() {
        let (mut doc, container) = page_with_container();
        let catalog = catalog(vec![ToolDescriptor::new("git"), ToolDescriptor::new("git")]);
        let renderer = renderer();

        renderer.render(&mut doc, container, &catalog).unwrap();
        renderer.render(&mut doc, container, &catalog).unwrap();

        assert_eq!(doc.children(container).unwrap().len(), 4);
    }

    #[test]
    fn test_existing_children_kept() {
        let (mut doc, container) = page_with_container();
        let heading = doc.create_element("h2");
        doc.append_child(container, heading).unwrap();

        renderer()
            .render(&mut doc, container, &catalog(vec![ToolDescriptor::new("bash")]))
            .unwrap();

        let children = doc.children(container).unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], heading);
    }

    #[test]
    fn test_render_into_finds_container() {
        let (mut doc, container) = page_with_container();
        let rendered = renderer()
            .render_into(&mut doc, &catalog(vec![ToolDescriptor::new("ruby")]))
            .unwrap();

        assert_eq!(doc.parent(rendered[0].link).unwrap(), Some(container));
    }

    #[test]
    fn test_render_into_missing_container() {
        let mut doc = Document::new();
        let err = renderer()
            .render_into(&mut doc, &Catalog::builtin())
            .unwrap_err();

        assert_eq!(err, DomError::ContainerNotFound("tools".to_string()));
        assert!(doc.children(doc.body()).unwrap().is_empty());
    }

    #[test]
    fn test_custom_route_prefix() {
        let (mut doc, container) = page_with_container();
        let renderer = ToolRenderer::new(PageConfig {
            container_id: "tools".to_string(),
            tag_route_prefix: "/topics/".to_string(),
        });

        let rendered = renderer
            .render(&mut doc, container, &catalog(vec![ToolDescriptor::new("numpy")]))
            .unwrap();

        let link = doc.element(rendered[0].link).unwrap();
        assert_eq!(link.attribute("href"), Some("/topics/numpy"));
    }

    #[test]
    fn test_builtin_markup_for_first_entry() {
        let (mut doc, container) = page_with_container();
        let rendered = renderer()
            .render(&mut doc, container, &Catalog::builtin())
            .unwrap();

        assert_eq!(rendered.len(), 34);
        assert_eq!(
            doc.outer_html(rendered[0].link).unwrap(),
            r#"<a class="tool" href="/tags/linux" title="Linux"><i class="tool-icon devicon-linux-plain"></i></a>"#
        );
    }
}
