//! # RI Schema
//!
//! Declarative resource schema for hierarchical Resource Identifiers (RIs).
//!
//! ## Overview
//!
//! An application declares, once at startup, which resource types exist,
//! how they nest, and which actions are permitted on each. The schema is a
//! recursive tree of named nodes:
//!
//! ```text
//! user ──┬── actions: read, update
//!        └── post ──── actions: read, delete
//! ```
//!
//! The `ri-engine` crate consumes a validated [`ResourceSchema`] to build,
//! parse, and authorize RI strings such as `ri:my-app:user:<ulid>:post:<ulid>`.
//!
//! ## Rules
//!
//! - Resource names match `[a-zA-Z]+` and must not collide with the reserved
//!   names of the authorization surface ([`RESERVED_NAMES`]).
//! - Action names match `[a-z]+`.
//! - Validation happens exactly once, at engine construction; the schema is
//!   never mutated afterwards and can be shared freely across threads.
//!
//! ## Usage
//!
//! ```rust
//! use ri_schema::{ResourceSchema, SchemaNode};
//!
//! let schema = ResourceSchema::new().resource(
//!     "user",
//!     SchemaNode::new()
//!         .action("read", "View a user profile")
//!         .child("post", SchemaNode::new().action("delete", "Delete a post")),
//! );
//!
//! assert!(schema.validate().is_ok());
//! assert_eq!(schema.get("user").unwrap().action_names(), vec!["read"]);
//! ```
//!
//! Schemas also deserialize from JSON via serde, so a bootstrap process can
//! load them from configuration instead of constructing them in code.

pub mod schema;
pub mod validate;

// Re-export main types for convenience
pub use schema::{ActionDef, ResourceSchema, SchemaNode};
pub use validate::{SchemaError, RESERVED_NAMES};
