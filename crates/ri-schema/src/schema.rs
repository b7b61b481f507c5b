//! # Schema Tree
//!
//! Core schema types: actions, nodes, and the root resource map.
//! The tree is an owned structure; nodes own their child maps, so there are
//! no parent links and no reference cycles.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::validate::{self, SchemaError};

/// A named action with a human-readable description.
///
/// # Example
///
/// ```
/// use ri_schema::ActionDef;
///
/// let action = ActionDef::new("read", "View resource data");
/// assert_eq!(action.name, "read");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionDef {
    /// The action name (lowercase letters only).
    pub name: String,
    /// Human-readable description, surfaced in tooling and docs.
    pub description: String,
}

impl ActionDef {
    /// Create a new action definition.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A single node in the resource schema.
///
/// A node declares the actions permitted on a resource of this type and,
/// optionally, the resource types that may nest beneath it. Maps are
/// insertion-ordered, so declaration order is preserved through serde and
/// reflected by [`action_names`](SchemaNode::action_names).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaNode {
    /// Actions permitted on this resource, keyed by action name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub actions: IndexMap<String, ActionDef>,

    /// Nested resource types, keyed by resource name. Empty for leaf nodes.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub child: IndexMap<String, SchemaNode>,
}

impl SchemaNode {
    /// Create a new node with no actions and no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an action on this node (builder-style).
    ///
    /// # Example
    ///
    /// ```
    /// use ri_schema::SchemaNode;
    ///
    /// let node = SchemaNode::new()
    ///     .action("read", "View resource data")
    ///     .action("delete", "Remove the resource");
    /// assert_eq!(node.action_names(), vec!["read", "delete"]);
    /// ```
    pub fn action(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let def = ActionDef::new(name.clone(), description);
        self.actions.insert(name, def);
        self
    }

    /// Declare a nested resource type beneath this node (builder-style).
    pub fn child(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.child.insert(name.into(), node);
        self
    }

    /// Action names in declaration order.
    pub fn action_names(&self) -> Vec<&str> {
        self.actions.keys().map(String::as_str).collect()
    }

    /// Whether this node has no nested resource types.
    pub fn is_leaf(&self) -> bool {
        self.child.is_empty()
    }
}

/// The root of a resource schema: a map from top-level resource name to node.
///
/// # Example
///
/// ```
/// use ri_schema::{ResourceSchema, SchemaNode};
///
/// let schema = ResourceSchema::new()
///     .resource("user", SchemaNode::new().action("read", "View a user"))
///     .resource("report", SchemaNode::new().action("export", "Export a report"));
///
/// assert_eq!(schema.len(), 2);
/// assert!(schema.get("user").is_some());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ResourceSchema {
    resources: IndexMap<String, SchemaNode>,
}

impl ResourceSchema {
    /// Create a new empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a top-level resource type (builder-style).
    pub fn resource(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.resources.insert(name.into(), node);
        self
    }

    /// Look up a top-level resource node by name.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.resources.get(name)
    }

    /// The top-level resource map, in declaration order.
    pub fn resources(&self) -> &IndexMap<String, SchemaNode> {
        &self.resources
    }

    /// Number of top-level resource types.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the schema declares no resource types.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Validate the whole tree against the naming rules.
    ///
    /// Checks every node recursively: resource names must contain only ASCII
    /// letters and must not be reserved; action names must contain only
    /// lowercase ASCII letters. Fails on the first offending name.
    ///
    /// # Example
    ///
    /// ```
    /// use ri_schema::{ResourceSchema, SchemaNode};
    ///
    /// let bad = ResourceSchema::new().resource("can", SchemaNode::new());
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), SchemaError> {
        validate::validate_tree(&self.resources)
    }
}

impl FromIterator<(String, SchemaNode)> for ResourceSchema {
    fn from_iter<T: IntoIterator<Item = (String, SchemaNode)>>(iter: T) -> Self {
        Self {
            resources: iter.into_iter().collect(),
        }
    }
}
