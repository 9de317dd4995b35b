//! Proxy configuration via `sqlroute.toml`
//!
//! Controls how a proxy treats methods without routing metadata and lets
//! deployments attach or replace routing metadata without recompiling the
//! interface descriptor.

use serde::{Deserialize, Serialize};
use std::path::Path;

use sqlroute_core::RoutingMetadata;

use crate::{Error, Result};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "sqlroute.toml";

/// What to do with a call to a method that has no routing metadata and no
/// delegate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnroutedPolicy {
    /// Return the fallback value for the declared return type
    #[default]
    Noop,
    /// Fail the call with [`Error::Unrouted`]
    Error,
}

/// Routing metadata declared in configuration for one interface method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Interface name, as given by its descriptor
    pub interface: String,
    /// Method name
    pub method: String,
    /// Explicit logical id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Alternate logical id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_id: Option<String>,
    /// Positional parameter names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
    /// Collapse list results to their first element
    #[serde(default)]
    pub return_one: bool,
    /// Sub-result to return from a group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_sub_id: Option<String>,
}

impl RouteEntry {
    /// Convert into routing metadata.
    pub fn to_metadata(&self) -> RoutingMetadata {
        RoutingMetadata {
            id: self.id.clone(),
            alt_id: self.alt_id.clone(),
            param_names: self.params.clone(),
            return_one: self.return_one,
            return_sub_id: self.return_sub_id.clone(),
        }
    }
}

/// Proxy configuration loaded from `sqlroute.toml`.
///
/// # Example
///
/// ```toml
/// unrouted = "error"
/// trace_params = true
///
/// [[routes]]
/// interface = "UserDao"
/// method = "find_by_name"
/// id = "USER_FIND_BY_NAME"
/// params = ["name"]
/// return_one = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Policy for unrouted methods without a delegate: `"noop"` or `"error"`.
    #[serde(default)]
    pub unrouted: UnroutedPolicy,
    /// Log packed parameters at trace level on every dispatch.
    #[serde(default)]
    pub trace_params: bool,
    /// Routing metadata overlays.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteEntry>,
}

impl RouteConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# sqlroute proxy configuration
#
# Unrouted methods: "noop" (default) or "error"
#   "noop"  = return nothing (false for bool methods)
#   "error" = fail the call
unrouted = "noop"

# Log packed parameters at trace level (default: false)
trace_params = false

# Routing metadata declared outside the interface descriptor.
# [[routes]]
# interface = "UserDao"
# method = "find_by_name"
# id = "USER_FIND_BY_NAME"
# params = ["name"]
# return_one = true
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config {
            reason: format!("Failed to parse configuration: {}", e),
        })
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        toml::from_str(&content).map_err(|e| Error::Config {
            reason: format!("Failed to parse config file '{}': {}", path.display(), e),
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::Config {
                reason: format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config {
            reason: format!("Failed to serialize config: {}", e),
        })?;
        std::fs::write(path, content).map_err(|e| Error::Config {
            reason: format!("Failed to write config file '{}': {}", path.display(), e),
        })
    }
}
