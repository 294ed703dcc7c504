//! HTML serialization of document subtrees.

use super::error::DomError;
use super::{Document, NodeId};

impl Document {
    /// Serialize `node` and its descendants as markup.
    ///
    /// Attributes are written as `id`, then `class`, then the rest in the
    /// order they were set.
    pub fn outer_html(&self, node: NodeId) -> Result<String, DomError> {
        let mut out = String::new();
        self.write_node(node, &mut out)?;
        Ok(out)
    }

    /// Serialize only the children of `node`.
    pub fn inner_html(&self, node: NodeId) -> Result<String, DomError> {
        let mut out = String::new();
        for &child in self.children(node)? {
            self.write_node(child, &mut out)?;
        }
        Ok(out)
    }

    fn write_node(&self, node: NodeId, out: &mut String) -> Result<(), DomError> {
        let element = self.element(node)?;

        out.push('<');
        out.push_str(element.tag());
        if let Some(id) = element.id() {
            push_attribute(out, "id", id);
        }
        if !element.classes().is_empty() {
            push_attribute(out, "class", &element.class_name());
        }
        for (name, value) in element.attributes() {
            if name != "id" {
                push_attribute(out, name, value);
            }
        }
        out.push('>');

        for &child in element.children() {
            self.write_node(child, out)?;
        }

        out.push_str("</");
        out.push_str(element.tag());
        out.push('>');
        Ok(())
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_attribute(value, out);
    out.push('"');
}

fn escape_attribute(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
