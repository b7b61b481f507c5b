//! # Authorizer
//!
//! Action checks over parsed RIs. `can` answers quietly; `authorize` turns a
//! denial into an [`AuthorizeError`] for the application boundary to map to
//! a permission-denied response.

use tracing::warn;

use crate::engine::RiEngine;
use crate::error::AuthorizeError;

impl RiEngine {
    /// Whether `action` is permitted on `ri`.
    ///
    /// True iff the RI parses successfully and `action` is among the actions
    /// declared on its final resource's schema node. Invalid RIs are never
    /// permitted anything.
    pub fn can(&self, ri: &str, action: &str) -> bool {
        match self.parse(ri) {
            Ok(parsed) => parsed.actions.iter().any(|a| a == action),
            Err(_) => false,
        }
    }

    /// Assert that `action` is permitted on `ri`.
    ///
    /// # Errors
    ///
    /// [`AuthorizeError`] naming the action and the RI; returned exactly when
    /// [`can`](RiEngine::can) is false.
    pub fn authorize(&self, ri: &str, action: &str) -> Result<(), AuthorizeError> {
        if self.can(ri, action) {
            Ok(())
        } else {
            warn!(ri, action, "authorization denied");
            Err(AuthorizeError {
                action: action.to_string(),
                ri: ri.to_string(),
            })
        }
    }
}
