//! # Schema Validation
//!
//! Naming rules for schema trees. Validation runs once, at engine
//! construction, and is fatal on failure: an engine is never built over an
//! invalid schema.

use indexmap::IndexMap;
use thiserror::Error;

use crate::schema::SchemaNode;

/// Names a resource type may not use.
///
/// These are the method names the authorization surface exposes; allowing
/// them as resource types would make RIs ambiguous against the builder API.
pub const RESERVED_NAMES: [&str; 4] = ["toString", "can", "authorize", "getActions"];

/// Schema validation error types.
///
/// Each variant identifies the first offending name found during the
/// recursive walk.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Resource name contains characters outside `[a-zA-Z]`.
    #[error("invalid resource name \"{name}\": must contain only ASCII letters")]
    InvalidResourceName {
        /// The offending name.
        name: String,
    },

    /// Resource name collides with the authorization surface.
    #[error("reserved resource name \"{name}\": reserved names are toString, can, authorize, getActions")]
    ReservedResourceName {
        /// The offending name.
        name: String,
    },

    /// Action name contains characters outside `[a-z]`.
    #[error("invalid action name \"{name}\" on resource \"{resource}\": must contain only lowercase ASCII letters")]
    InvalidActionName {
        /// The resource declaring the action.
        resource: String,
        /// The offending action name.
        name: String,
    },
}

/// Check a resource-type name against `[a-zA-Z]+`.
pub fn is_resource_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

/// Check an action name against `[a-z]+`.
pub fn is_action_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase())
}

/// Recursively validate a resource map.
///
/// Fails on the first offending resource or action name, depth-first in
/// declaration order.
pub(crate) fn validate_tree(resources: &IndexMap<String, SchemaNode>) -> Result<(), SchemaError> {
    for (name, node) in resources {
        if !is_resource_name(name) {
            return Err(SchemaError::InvalidResourceName { name: name.clone() });
        }
        if RESERVED_NAMES.contains(&name.as_str()) {
            return Err(SchemaError::ReservedResourceName { name: name.clone() });
        }
        for action in node.actions.keys() {
            if !is_action_name(action) {
                return Err(SchemaError::InvalidActionName {
                    resource: name.clone(),
                    name: action.clone(),
                });
            }
        }
        validate_tree(&node.child)?;
    }
    Ok(())
}
