//! # Wire Format
//!
//! Constants and lexical checks for the RI string format:
//!
//! ```text
//! ri:<app-name>:<type>[:<id-or-*>][:<type>[:<id-or-*>]]*
//! ```
//!
//! Everything here is schema-independent. Schema-aware parsing lives in
//! [`crate::parse`].

use crate::parse::RiPart;

/// Leading token of every RI string.
pub const RI_PREFIX: &str = "ri";

/// Token separator.
pub const SEPARATOR: char = ':';

/// Wildcard id, matching any concrete id at its position in a pattern.
pub const WILDCARD: &str = "*";

/// ULID length in characters.
const ULID_LEN: usize = 26;

/// Crockford base32 alphabet, excluding I, L, O, U.
fn is_ulid_char(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='H' | 'J' | 'K' | 'M' | 'N' | 'P'..='T' | 'V'..='Z')
}

/// Check whether a token is a well-formed ULID.
///
/// # Example
///
/// ```
/// use ri_engine::wire::is_ulid;
///
/// assert!(is_ulid("01ARZ3NDEKTSV4RRFFQ69G5FAV"));
/// assert!(!is_ulid("01ARZ3NDEKTSV4RRFFQ69G5FA")); // 25 chars
/// assert!(!is_ulid("01ARZ3NDEKTSV4RRFFQ69G5FAL")); // 'L' excluded
/// ```
pub fn is_ulid(token: &str) -> bool {
    token.len() == ULID_LEN && token.chars().all(is_ulid_char)
}

/// Check whether a token is acceptable in an id position: a ULID or `*`.
pub fn is_id_token(token: &str) -> bool {
    token == WILDCARD || is_ulid(token)
}

/// Check an application name against `[a-zA-Z0-9-]+`.
pub fn is_app_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Check a token against the resource-name charset `[a-zA-Z]+`.
fn is_resource_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}

/// Structural well-formedness check, without a schema.
///
/// Verifies the prefix, the app-name charset, and the alternating
/// type/id shape of the tail. It does not check resource types against any
/// schema; use [`crate::RiEngine::parse`] for that.
///
/// # Example
///
/// ```
/// use ri_engine::wire::is_well_formed;
///
/// assert!(is_well_formed("ri:my-app:user:01ARZ3NDEKTSV4RRFFQ69G5FAV"));
/// assert!(is_well_formed("ri:my-app:user:*:post"));
/// assert!(!is_well_formed("arn:my-app:user"));
/// assert!(!is_well_formed("ri:my-app:user:"));
/// ```
pub fn is_well_formed(ri: &str) -> bool {
    let mut tokens = ri.split(SEPARATOR);
    if tokens.next() != Some(RI_PREFIX) {
        return false;
    }
    match tokens.next() {
        Some(app) if is_app_name(app) => {}
        _ => return false,
    }

    // Tail is a sequence of resource tokens, each optionally followed by an
    // id token. Ids are consumed greedily, mirroring the parser.
    let mut expect_resource = true;
    for token in tokens {
        if is_resource_token(token) {
            expect_resource = false;
        } else if !expect_resource && is_id_token(token) {
            expect_resource = true;
        } else {
            return false;
        }
    }
    true
}

/// Format parts into the canonical RI string.
pub(crate) fn format_parts(app_name: &str, parts: &[RiPart]) -> String {
    let mut ri = String::new();
    ri.push_str(RI_PREFIX);
    ri.push(SEPARATOR);
    ri.push_str(app_name);
    for part in parts {
        ri.push(SEPARATOR);
        ri.push_str(&part.resource);
        if let Some(id) = &part.id {
            ri.push(SEPARATOR);
            ri.push_str(id);
        }
    }
    ri
}
