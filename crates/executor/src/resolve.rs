//! Executable resolution.

use std::sync::Arc;

use sqlroute_core::{Executable, Group, Registry, Statement};

use crate::error::ConfigError;

/// A registry entry the dispatcher knows how to run.
pub(crate) enum Target {
    Statement(Arc<dyn Statement>),
    Group(Arc<dyn Group>),
}

/// Look up `id` and narrow it to a runnable target.
pub(crate) fn resolve(registry: &dyn Registry, id: &str) -> Result<Target, ConfigError> {
    match registry.resolve(id) {
        Some(Executable::Statement(statement)) => Ok(Target::Statement(statement)),
        Some(Executable::Group(group)) => Ok(Target::Group(group)),
        Some(Executable::Foreign { type_name }) => Err(ConfigError::UnsupportedTarget {
            id: id.to_string(),
            type_name,
        }),
        None => Err(ConfigError::UnknownId { id: id.to_string() }),
    }
}
