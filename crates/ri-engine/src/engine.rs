//! # Engine
//!
//! The [`RiEngine`] owns one application's name and validated schema, and is
//! the entry point for every RI operation. Construction validates both and
//! is fatal on failure; afterwards the engine is immutable and `Send + Sync`,
//! so it can sit behind an `Arc` and serve any number of callers.
//!
//! Multiple engines with different schemas (per tenant, per test) coexist
//! freely; there is no process-wide schema state.

use ri_schema::ResourceSchema;

use crate::builder::RiBuilder;
use crate::error::EngineError;
use crate::parse::RiPart;
use crate::wire;

/// Engine for building, parsing, matching, and authorizing RIs.
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
/// assert!(engine.validate("ri:my-app:user"));
/// assert!(engine.can("ri:my-app:user", "read"));
/// ```
#[derive(Debug, Clone)]
pub struct RiEngine {
    app_name: String,
    schema: ResourceSchema,
}

impl RiEngine {
    /// Create an engine for `app_name` over `schema`.
    ///
    /// The app name must match `[a-zA-Z0-9-]+` and the schema must pass
    /// [`ResourceSchema::validate`]. Both are checked here, once; failure is
    /// fatal and nothing retries it.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidAppName`] or [`EngineError::Schema`].
    pub fn new(app_name: impl Into<String>, schema: ResourceSchema) -> Result<Self, EngineError> {
        let app_name = app_name.into();
        if !wire::is_app_name(&app_name) {
            return Err(EngineError::InvalidAppName { name: app_name });
        }
        schema.validate()?;
        Ok(Self { app_name, schema })
    }

    /// The application name carried in every RI this engine accepts.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The validated schema.
    pub fn schema(&self) -> &ResourceSchema {
        &self.schema
    }

    /// A builder positioned at the schema root, with an empty path.
    pub fn build(&self) -> RiBuilder<'_> {
        RiBuilder::root(self)
    }

    /// Format parts into the canonical RI string for this engine's app.
    ///
    /// Formatting the parts of a valid parse reproduces the original string
    /// byte for byte.
    pub fn format_ri(&self, parts: &[RiPart]) -> String {
        wire::format_parts(&self.app_name, parts)
    }
}
