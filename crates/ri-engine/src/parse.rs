//! # Parser
//!
//! Schema-validated decomposition of RI strings into structured parts.
//!
//! Parsing never panics and never uses the error channel for control flow
//! in the caller: [`RiEngine::parse`] returns `Result<ParsedRi, InvalidRi>`
//! where both sides are plain values to branch on. A large share of inbound
//! RIs comes from requests, so "this RI is malformed" is an ordinary
//! outcome, not an exceptional one.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::engine::RiEngine;
use crate::wire;

/// One `type[:id]` segment of an RI path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiPart {
    /// The resource type name.
    pub resource: String,
    /// The id at this position: a ULID, the wildcard `*`, or absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RiPart {
    /// A part with no id, covering all resources of this type.
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            id: None,
        }
    }

    /// A part naming one resource instance (or the wildcard).
    pub fn with_id(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            id: Some(id.into()),
        }
    }
}

/// A successfully parsed RI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedRi {
    /// The path segments, outermost first.
    pub parts: Vec<RiPart>,
    /// Actions declared on the final resource's schema node, in declaration
    /// order. Empty when the path is empty (`ri:<app>` alone).
    pub actions: Vec<String>,
}

/// A rejected RI.
///
/// Carries a diagnostic and every part recognized before the mismatch. This
/// type is a value, not a propagated error; it derives [`std::error::Error`]
/// only so it Displays cleanly at logging boundaries.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidRi {
    /// Why the RI was rejected.
    pub message: String,
    /// Parts recognized before the mismatch.
    pub parts: Vec<RiPart>,
}

impl RiEngine {
    /// Parse an RI string against the schema.
    ///
    /// The walk keeps a cursor into the schema tree: each token must name a
    /// resource type at the cursor's level; a following ULID or `*` token is
    /// consumed as that part's id; the cursor then descends into the node's
    /// children. The first unknown token stops the walk and yields an
    /// [`InvalidRi`] carrying the parts recognized so far.
    ///
    /// # Example
    ///
    /// ```
    /// use ri_engine::RiEngine;
    /// use ri_schema::{ResourceSchema, SchemaNode};
    ///
    /// let schema = ResourceSchema::new()
    ///     .resource("user", SchemaNode::new().action("read", "View a user"));
    /// let engine = RiEngine::new("my-app", schema).unwrap();
    ///
    /// let parsed = engine.parse("ri:my-app:user").unwrap();
    /// assert_eq!(parsed.actions, vec!["read"]);
    ///
    /// let invalid = engine.parse("ri:my-app:bogus").unwrap_err();
    /// assert!(invalid.message.contains("bogus"));
    /// ```
    pub fn parse(&self, ri: &str) -> Result<ParsedRi, InvalidRi> {
        let tokens: Vec<&str> = ri.split(wire::SEPARATOR).collect();

        if tokens.first() != Some(&wire::RI_PREFIX)
            || tokens.get(1).copied() != Some(self.app_name())
        {
            debug!(ri, "rejected RI: bad prefix or app name");
            return Err(InvalidRi {
                message: format!(
                    "invalid RI prefix or app name: expected \"{}{}{}\"",
                    wire::RI_PREFIX,
                    wire::SEPARATOR,
                    self.app_name()
                ),
                parts: Vec::new(),
            });
        }

        let rest = &tokens[2..];
        let mut parts = Vec::new();
        let mut cursor = self.schema().resources();
        let mut last_node = None;

        let mut i = 0;
        while i < rest.len() {
            let resource = rest[i];
            let Some(node) = cursor.get(resource) else {
                debug!(ri, resource, "rejected RI: unknown resource type");
                return Err(InvalidRi {
                    message: format!("unknown resource type \"{resource}\" in chain"),
                    parts,
                });
            };

            // A following ULID or wildcard token belongs to this part;
            // anything else is left for the next round as a resource name.
            let id = rest
                .get(i + 1)
                .copied()
                .filter(|token| wire::is_id_token(token));
            i += if id.is_some() { 2 } else { 1 };

            parts.push(RiPart {
                resource: resource.to_string(),
                id: id.map(str::to_string),
            });
            last_node = Some(node);
            cursor = &node.child;
        }

        Ok(ParsedRi {
            parts,
            actions: last_node
                .map(|node| node.actions.keys().cloned().collect())
                .unwrap_or_default(),
        })
    }

    /// Whether an RI string parses successfully against the schema.
    pub fn validate(&self, ri: &str) -> bool {
        self.parse(ri).is_ok()
    }
}
