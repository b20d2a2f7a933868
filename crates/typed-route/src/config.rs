// File: src/config.rs
// Purpose: Route table declarations loaded from routes.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::route::RouteDescriptor;
use crate::table::RouteTable;

/// Route table file
///
/// ```toml
/// [[routes]]
/// name = "view_details"
/// path = "/view/:id"
/// query = ["dateCreated", "dateUpdated"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoutesConfig {
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// One declared route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Key the route is registered under
    pub name: String,

    /// Template such as `/view/:id`
    pub path: String,

    /// Recognized query keys; must not be empty when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Vec<String>>,
}

impl RouteEntry {
    pub fn to_descriptor(&self) -> crate::Result<RouteDescriptor> {
        match &self.query {
            Some(keys) => RouteDescriptor::from_template_with_query(&self.path, keys.iter().cloned()),
            None => RouteDescriptor::from_template(&self.path),
        }
    }
}

impl RoutesConfig {
    /// Load route declarations from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, there are no routes
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read routes file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse routes file: {:?}", path))
    }

    /// Load route declarations from the default path (./routes.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("routes.toml")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: RoutesConfig = toml::from_str(content).context("Invalid routes TOML")?;
        Ok(config)
    }

    /// Builds a route table with routes in file order
    pub fn into_table(self) -> Result<RouteTable> {
        let routes = self
            .routes
            .iter()
            .map(|entry| {
                entry
                    .to_descriptor()
                    .map(|descriptor| (entry.name.clone(), descriptor))
                    .with_context(|| format!("Invalid route `{}` ({})", entry.name, entry.path))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(RouteTable::from_routes(routes)?)
    }
}
