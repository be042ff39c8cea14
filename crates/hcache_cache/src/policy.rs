use parser::HeaderElement;

use crate::CacheEntry;

/// Directives on a stored response that forbid serving it stale without
/// a successful revalidation at the origin.
const END_TO_END_DIRECTIVES: [&str; 2] = ["must-revalidate", "proxy-revalidate"];

/// Value sent in the request `Cache-Control` header to make every cache on
/// the path treat its stored copy as stale.
pub const FORCE_REVALIDATION: &str = "max-age=0";

pub struct RevalidationPolicy;

impl RevalidationPolicy {
    /// True when the entry carries `must-revalidate` or `proxy-revalidate`.
    pub fn requires_end_to_end(entry: &CacheEntry) -> bool {
        Self::has_end_to_end_directive(&entry.cache_control())
    }

    pub fn has_end_to_end_directive(elements: &[HeaderElement]) -> bool {
        elements
            .iter()
            .any(|el| END_TO_END_DIRECTIVES.iter().any(|d| el.is(d)))
    }
}
