//! Configuration management for the badge renderer.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Host page contract: container id and link routes.
    pub page: PageConfig,

    /// Where the tool list comes from.
    pub catalog: CatalogConfig,

    /// Where rendered markup goes.
    pub output: OutputConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Identifiers the rendered markup depends on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Id of the element that receives the badges.
    pub container_id: String,

    /// Prefix joined with a tool's tag to form its link.
    pub tag_route_prefix: String,
}

/// Catalog source configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in list is used when unset.
    pub path: Option<PathBuf>,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File for the rendered fragment. Stdout when unset.
    pub path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            container_id: "tools".to_string(),
            tag_route_prefix: "/tags/".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `TOOLS_`, e.g. `TOOLS_CONTAINER_ID`,
    /// `TOOLS_LOG_LEVEL`. A `.env` file is honored when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(id) = std::env::var("TOOLS_CONTAINER_ID") {
            if id.trim().is_empty() {
                warn!("TOOLS_CONTAINER_ID is blank, keeping '{}'", config.page.container_id);
            } else {
                config.page.container_id = id;
            }
        }

        if let Ok(prefix) = std::env::var("TOOLS_TAG_ROUTE") {
            config.page.tag_route_prefix = prefix;
        }

        if let Ok(path) = std::env::var("TOOLS_CATALOG_PATH") {
            info!("Catalog file set to {}", path);
            config.catalog.path = Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("TOOLS_OUTPUT_PATH") {
            config.output.path = Some(PathBuf::from(path));
        }

        if let Ok(level) = std::env::var("TOOLS_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }
}
