//! Resource descriptors derived from request paths.
//!
//! Error messages name the kind of entity a failed call was addressing and,
//! when the path carries one, its numeric id. Both are recovered from the
//! endpoint string alone.

use regex::Regex;
use std::sync::OnceLock;

use crate::config::SUPPORTED_RESOURCES;

/// Resource type used in messages when the path did not resolve to one.
pub const DEFAULT_RESOURCE_TYPE: &str = "resource";

// Tried in order; the id-carrying forms must come before the bare word.
const PATTERNS: [&str; 3] = [
    r"^(?P<resource>\w+)/(?P<id>\d+)/\w+",
    r"^(?P<resource>\w+)/(?P<id>\d+)",
    r"^(?P<resource>\w+)",
];

fn patterns() -> &'static [Regex] {
    static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        PATTERNS
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect()
    })
}

/// The `(type, id)` pair a request path resolves to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Singularized first path segment, e.g. `article`.
    pub resource_type: Option<String>,
    /// Numeric second path segment, verbatim.
    pub resource_id: Option<String>,
}

impl ResourceDescriptor {
    /// Returns the resource type, or `"resource"` when none was resolved.
    pub fn type_or_default(&self) -> &str {
        self.resource_type.as_deref().unwrap_or(DEFAULT_RESOURCE_TYPE)
    }

    /// True when the type is one the API exposes and an id was resolved.
    pub fn is_known_with_id(&self) -> bool {
        let known = self
            .resource_type
            .as_deref()
            .is_some_and(|kind| SUPPORTED_RESOURCES.contains(&kind));
        known && self.resource_id.is_some()
    }
}

/// Parses a request path into a [`ResourceDescriptor`].
///
/// The first path segment is singularized by dropping one trailing `s`
/// (`articles` becomes `article`, `status` becomes `statu`). Paths that match
/// none of the patterns yield an empty descriptor; this never fails.
pub fn parse_resource_info(endpoint: &str) -> ResourceDescriptor {
    for pattern in patterns() {
        if let Some(captures) = pattern.captures(endpoint) {
            let resource_type = captures
                .name("resource")
                .map(|m| singularize(m.as_str()).to_string());
            let resource_id = captures.name("id").map(|m| m.as_str().to_string());

            return ResourceDescriptor {
                resource_type,
                resource_id,
            };
        }
    }

    ResourceDescriptor::default()
}

fn singularize(word: &str) -> &str {
    word.strip_suffix('s').unwrap_or(word)
}
