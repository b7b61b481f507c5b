//! # RI Engine
//!
//! Build, parse, match, and authorize hierarchical Resource Identifiers
//! (RIs) against a declarative [`ri_schema::ResourceSchema`].
//!
//! ## Overview
//!
//! An RI is a colon-delimited string naming a resource and optional nested
//! sub-resources, analogous to a cloud-provider ARN:
//!
//! ```text
//! ri:<app-name>:<type>[:<id-or-*>][:<type>[:<id-or-*>]]*
//!
//! Examples:
//!   "ri:my-app:user"                                      - all users
//!   "ri:my-app:user:01ARZ3NDEKTSV4RRFFQ69G5FAV"           - one user
//!   "ri:my-app:user:*:post"                               - any user's posts
//! ```
//!
//! Ids are 26-character ULIDs or the wildcard `*`.
//!
//! ## Usage
//!
//! ```rust
//! use ri_engine::{MatchOptions, RiEngine};
//! use ri_schema::{ResourceSchema, SchemaNode};
//!
//! let schema = ResourceSchema::new().resource(
//!     "user",
//!     SchemaNode::new()
//!         .action("read", "View a user profile")
//!         .child("post", SchemaNode::new().action("delete", "Delete a post")),
//! );
//! let engine = RiEngine::new("my-app", schema).unwrap();
//!
//! // Build step by step; every step is validated against the schema.
//! let user = engine
//!     .build()
//!     .step("user", Some("01ARZ3NDEKTSV4RRFFQ69G5FAV"))
//!     .unwrap();
//! assert_eq!(user.to_ri(), "ri:my-app:user:01ARZ3NDEKTSV4RRFFQ69G5FAV");
//!
//! // Parse untrusted input; failure is a value, never a panic.
//! let parsed = engine.parse(&user.to_ri()).unwrap();
//! assert_eq!(parsed.actions, vec!["read"]);
//!
//! // Authorize actions and match wildcard patterns.
//! assert!(engine.can(&user.to_ri(), "read"));
//! assert!(engine.matches("ri:my-app:user:*", &user.to_ri(), MatchOptions::default()));
//! ```
//!
//! ## Error model
//!
//! - Schema and app-name problems fail [`RiEngine::new`] fatally
//!   ([`EngineError`]); an engine is never usable over a bad schema.
//! - Builder mistakes are caller bugs and fail the [`RiBuilder::step`] call
//!   ([`BuildError`]).
//! - Parse failure is **not** an error path: [`RiEngine::parse`] returns
//!   `Result<ParsedRi, InvalidRi>` where the `Err` side is an ordinary value
//!   carrying a diagnostic and the parts recognized before the mismatch.
//!   Inbound RIs are routinely attacker-controlled, so malformed input must
//!   not drive exception-style control flow.
//! - [`RiEngine::authorize`] returns [`AuthorizeError`] for denials, meant to
//!   propagate to the application boundary and map to a permission-denied
//!   response.
//!
//! All operations are pure, synchronous computations over immutable data;
//! the engine is `Send + Sync` and can be shared freely.

pub mod authorize;
pub mod builder;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod navigate;
pub mod parse;
pub mod wire;

// Re-export main types for convenience
pub use builder::RiBuilder;
pub use engine::RiEngine;
pub use error::{AuthorizeError, BuildError, EngineError};
pub use matcher::MatchOptions;
pub use parse::{InvalidRi, ParsedRi, RiPart};
pub use wire::{RI_PREFIX, SEPARATOR, WILDCARD};
