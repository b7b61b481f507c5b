//! # Navigation
//!
//! Deriving related RIs from a parsed one: the immediate parent, the full
//! ancestor chain, and the id parameters carried along the path.

use indexmap::IndexMap;

use crate::engine::RiEngine;

impl RiEngine {
    /// The immediate parent RI, or `None` when the RI is invalid or has one
    /// or fewer parts.
    ///
    /// # Example
    ///
    /// ```
    /// use ri_engine::RiEngine;
    /// use ri_schema::{ResourceSchema, SchemaNode};
    ///
    /// let schema = ResourceSchema::new().resource(
    ///     "user",
    ///     SchemaNode::new().child("post", SchemaNode::new()),
    /// );
    /// let engine = RiEngine::new("my-app", schema).unwrap();
    ///
    /// assert_eq!(
    ///     engine.parent("ri:my-app:user:*:post"),
    ///     Some("ri:my-app:user:*".to_string())
    /// );
    /// assert_eq!(engine.parent("ri:my-app:user"), None);
    /// ```
    pub fn parent(&self, ri: &str) -> Option<String> {
        let parsed = self.parse(ri).ok()?;
        if parsed.parts.len() <= 1 {
            return None;
        }
        Some(self.format_ri(&parsed.parts[..parsed.parts.len() - 1]))
    }

    /// All ancestor RIs, nearest first.
    ///
    /// Only resource-bearing prefixes count: the bare `ri:<app>` root is not
    /// an ancestor. Invalid RIs yield an empty vector.
    pub fn ancestors(&self, ri: &str) -> Vec<String> {
        let Ok(parsed) = self.parse(ri) else {
            return Vec::new();
        };
        (1..parsed.parts.len())
            .rev()
            .map(|len| self.format_ri(&parsed.parts[..len]))
            .collect()
    }

    /// Ids along the path, keyed by resource type.
    ///
    /// Parts without an id are omitted. When a type repeats in the path
    /// (nested same-named resources), the later occurrence overwrites the
    /// earlier one; this is accepted behavior, not a defect.
    pub fn extract_params(&self, ri: &str) -> IndexMap<String, String> {
        match self.parse(ri) {
            Ok(parsed) => parsed
                .parts
                .into_iter()
                .filter_map(|part| part.id.map(|id| (part.resource, id)))
                .collect(),
            Err(_) => IndexMap::new(),
        }
    }
}
