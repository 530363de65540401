//! Route manifests in TOML.
//!
//! ```toml
//! [[routes]]
//! method = "get"
//! path = "/users/:id"
//! accept_type = "application/json"
//! target = "show_user"
//! ```
//!
//! Routes are registered in file order. Building is all-or-nothing: one bad
//! route leaves no table behind.

use crate::method::HttpMethod;
use crate::path::DEFAULT_ACCEPT_TYPE;
use crate::router::{RouteEntry, RouteTable, RouterError};

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub routes: Vec<RouteConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Request method or filter phase (`before`, `after`, `afterafter`).
    pub method: String,

    pub path: String,

    #[serde(default = "default_accept_type")]
    pub accept_type: String,

    /// Handler name the embedding application resolves.
    pub target: String,
}

fn default_accept_type() -> String {
    DEFAULT_ACCEPT_TYPE.to_owned()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read route manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse route manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("route #{index} is invalid: {source}")]
    Route {
        index: usize,
        #[source]
        source: RouterError,
    },
}

impl RoutesConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Compiles every route without registering any.
    pub fn entries(&self) -> Result<Vec<RouteEntry<String>>, ConfigError> {
        self.routes
            .iter()
            .enumerate()
            .map(|(index, route)| {
                route
                    .to_entry()
                    .map_err(|source| ConfigError::Route { index, source })
            })
            .collect()
    }

    pub fn build_table(&self) -> Result<RouteTable<String>, ConfigError> {
        let entries = self.entries()?;
        let table = RouteTable::new();
        for entry in entries {
            table.register(entry);
        }
        Ok(table)
    }
}

impl RouteConfig {
    pub fn to_entry(&self) -> Result<RouteEntry<String>, RouterError> {
        let method: HttpMethod = self.method.parse()?;
        let entry = RouteEntry::new(method, &self.path, self.target.clone())?;
        Ok(entry.with_accept_type(&self.accept_type))
    }
}

/// Loads a manifest file into a new table.
pub fn load_routes(path: &Path) -> Result<RouteTable<String>, ConfigError> {
    let content = fs::read_to_string(path)?;
    let table = RoutesConfig::from_toml(&content)?.build_table()?;
    info!(path = %path.display(), routes = table.len(), "route manifest loaded");
    Ok(table)
}
