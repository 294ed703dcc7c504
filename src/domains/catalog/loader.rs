//! The ordered tool list and its loaders.

use std::path::Path;

use tracing::{debug, info, instrument};

use super::descriptor::ToolDescriptor;
use super::error::CatalogError;

/// An immutable, ordered list of tool descriptors.
///
/// Order is display order. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tools: Vec<ToolDescriptor>,
}

impl Catalog {
    /// Build a catalog, rejecting descriptors whose `icon` is blank.
    pub fn new(tools: Vec<ToolDescriptor>) -> Result<Self, CatalogError> {
        if let Some(index) = tools.iter().position(|t| t.icon.trim().is_empty()) {
            return Err(CatalogError::missing_icon(index));
        }
        Ok(Self { tools })
    }

    /// Wrap a list whose icons are known to be present.
    pub(super) fn from_trusted(tools: Vec<ToolDescriptor>) -> Self {
        Self { tools }
    }

    /// Parse a JSON array of descriptors.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let tools: Vec<ToolDescriptor> = serde_json::from_str(text)?;
        debug!("Parsed {} tool descriptors", tools.len());
        Self::new(tools)
    }

    /// Read and parse a JSON catalog file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&text)?;
        info!("Loaded {} tools from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ToolDescriptor> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ToolDescriptor;
    type IntoIter = std::slice::Iter<'a, ToolDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}
