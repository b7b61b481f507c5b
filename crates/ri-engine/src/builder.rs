//! # Builder
//!
//! Step-by-step construction of RI strings, validated against the schema at
//! every step so mistakes surface where they are made, not at final use.
//!
//! A [`RiBuilder`] is an immutable snapshot: [`RiBuilder::step`] returns a
//! new builder one level deeper and leaves the receiver untouched, so an
//! intermediate builder can be branched into several continuations.
//!
//! Builder state is explicit: a cursor into the schema tree plus the
//! accumulated path. The cursor determines which resource names the next
//! step may use.

use std::fmt;

use indexmap::IndexMap;
use ri_schema::SchemaNode;

use crate::engine::RiEngine;
use crate::error::{AuthorizeError, BuildError};
use crate::parse::RiPart;
use crate::wire;

/// An immutable RI under construction.
///
/// # Example
///
/// ```
/// use ri_engine::RiEngine;
/// use ri_schema::{ResourceSchema, SchemaNode};
///
/// let schema = ResourceSchema::new().resource(
///     "user",
///     SchemaNode::new()
///         .action("read", "View a user")
///         .child("post", SchemaNode::new().action("delete", "Delete a post")),
/// );
/// let engine = RiEngine::new("my-app", schema).unwrap();
///
/// let user = engine.build().step("user", Some("*")).unwrap();
/// let post = user.step("post", None).unwrap();
/// assert_eq!(post.to_ri(), "ri:my-app:user:*:post");
/// assert_eq!(post.actions(), vec!["delete"]);
///
/// // `user` is still usable for a different continuation.
/// assert_eq!(user.to_ri(), "ri:my-app:user:*");
/// ```
#[derive(Debug, Clone)]
pub struct RiBuilder<'a> {
    engine: &'a RiEngine,
    parts: Vec<RiPart>,
    /// Resource types valid at the current depth.
    cursor: &'a IndexMap<String, SchemaNode>,
    /// Schema node of the last step; `None` at the root.
    node: Option<&'a SchemaNode>,
}

impl<'a> RiBuilder<'a> {
    pub(crate) fn root(engine: &'a RiEngine) -> Self {
        Self {
            engine,
            parts: Vec::new(),
            cursor: engine.schema().resources(),
            node: None,
        }
    }

    /// Append one `resource[:id]` segment, returning a new builder scoped to
    /// that resource's child schema.
    ///
    /// # Errors
    ///
    /// [`BuildError::UnknownResource`] when `resource` is not a type at the
    /// current level (the error lists the types that are), and
    /// [`BuildError::InvalidId`] when `id` is neither a ULID nor `*`. Unlike
    /// parsing, a malformed id here fails loudly: builder input comes from
    /// code, and a bad id is a bug worth catching at the call site.
    pub fn step(&self, resource: &str, id: Option<&str>) -> Result<RiBuilder<'a>, BuildError> {
        let Some(node) = self.cursor.get(resource) else {
            return Err(BuildError::UnknownResource {
                given: resource.to_string(),
                expected: self.cursor.keys().cloned().collect(),
            });
        };

        if let Some(id) = id {
            if !wire::is_id_token(id) {
                return Err(BuildError::InvalidId {
                    resource: resource.to_string(),
                    given: id.to_string(),
                });
            }
        }

        let mut parts = self.parts.clone();
        parts.push(RiPart {
            resource: resource.to_string(),
            id: id.map(str::to_string),
        });

        Ok(RiBuilder {
            engine: self.engine,
            parts,
            cursor: &node.child,
            node: Some(node),
        })
    }

    /// The canonical RI string for the accumulated path.
    pub fn to_ri(&self) -> String {
        self.engine.format_ri(&self.parts)
    }

    /// The accumulated path segments.
    pub fn parts(&self) -> &[RiPart] {
        &self.parts
    }

    /// Action names declared on the current terminal schema node, in
    /// declaration order. Empty at the root.
    pub fn actions(&self) -> Vec<&str> {
        self.node.map(SchemaNode::action_names).unwrap_or_default()
    }

    /// Whether `action` is permitted on the built resource.
    pub fn can(&self, action: &str) -> bool {
        self.engine.can(&self.to_ri(), action)
    }

    /// Assert that `action` is permitted on the built resource.
    ///
    /// # Errors
    ///
    /// [`AuthorizeError`] when the action is not permitted.
    pub fn authorize(&self, action: &str) -> Result<(), AuthorizeError> {
        self.engine.authorize(&self.to_ri(), action)
    }
}

impl fmt::Display for RiBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ri())
    }
}
