//! # Matcher
//!
//! Positional matching of a wildcard-bearing pattern RI against a concrete
//! RI. Matching is order-sensitive, not a set-membership test: part `i` of
//! the pattern is compared against part `i` of the specific RI and nothing
//! else.

use crate::engine::RiEngine;
use crate::wire;

/// Options for [`RiEngine::matches`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Allow the pattern to name only a prefix of the specific RI's path.
    /// Off by default: part counts must then be equal.
    pub allow_prefix: bool,
}

impl MatchOptions {
    /// Options permitting prefix matches.
    pub fn prefix() -> Self {
        Self { allow_prefix: true }
    }
}

impl RiEngine {
    /// Whether `specific` is matched by `pattern`.
    ///
    /// Both strings are parsed against the schema; if either is invalid the
    /// result is `false`. For each position up to the pattern's length the
    /// resource types must match exactly, and the ids match when the
    /// pattern's id is absent, is `*`, or equals the specific id.
    ///
    /// # Example
    ///
    /// ```
    /// use ri_engine::{MatchOptions, RiEngine};
    /// use ri_schema::{ResourceSchema, SchemaNode};
    ///
    /// let schema = ResourceSchema::new()
    ///     .resource("user", SchemaNode::new().action("read", "View a user"));
    /// let engine = RiEngine::new("my-app", schema).unwrap();
    ///
    /// let user = "ri:my-app:user:01ARZ3NDEKTSV4RRFFQ69G5FAV";
    /// assert!(engine.matches("ri:my-app:user:*", user, MatchOptions::default()));
    /// assert!(!engine.matches(user, "ri:my-app:user:*", MatchOptions::default()));
    /// ```
    pub fn matches(&self, pattern: &str, specific: &str, options: MatchOptions) -> bool {
        let (Ok(pattern), Ok(specific)) = (self.parse(pattern), self.parse(specific)) else {
            return false;
        };

        if !options.allow_prefix && pattern.parts.len() != specific.parts.len() {
            return false;
        }
        if pattern.parts.len() > specific.parts.len() {
            return false;
        }

        pattern
            .parts
            .iter()
            .zip(&specific.parts)
            .all(|(pattern_part, specific_part)| {
                if pattern_part.resource != specific_part.resource {
                    return false;
                }
                match pattern_part.id.as_deref() {
                    None | Some(wire::WILDCARD) => true,
                    Some(id) => specific_part.id.as_deref() == Some(id),
                }
            })
    }
}
