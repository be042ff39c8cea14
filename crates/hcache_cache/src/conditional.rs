use hcache_http::{Request, names};

use crate::{CacheEntry, RevalidationPolicy, policy::FORCE_REVALIDATION};

/// Request headers that make an exchange conditional.
const CONDITIONAL_HEADERS: [&str; 5] = [
    names::IF_RANGE,
    names::IF_MATCH,
    names::IF_NONE_MATCH,
    names::IF_UNMODIFIED_SINCE,
    names::IF_MODIFIED_SINCE,
];

/// Builds revalidation requests from stored entries.
///
/// Stateless: every method copies the original request and appends headers
/// to the copy. Neither the request nor the entry is modified.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionalRequestBuilder;

impl ConditionalRequestBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Copy `original` and append, in this order:
    /// - `If-None-Match: <etag>` when the entry has an `ETag`, otherwise
    ///   `If-Modified-Since: <last-modified>` when it has a `Last-Modified`;
    /// - `Cache-Control: max-age=0` when the entry's `Cache-Control` carries
    ///   `must-revalidate` or `proxy-revalidate`.
    ///
    /// An existing `Cache-Control` on `original` is kept; the forced one is
    /// appended alongside it.
    pub fn build_conditional_request(&self, original: &Request, entry: &CacheEntry) -> Request {
        let mut req = original.clone();

        let validator = select_validator(entry);
        if let Some((name, value)) = validator {
            req.add_header(name, value);
        }

        let end_to_end = RevalidationPolicy::requires_end_to_end(entry);
        if end_to_end {
            req.add_header(names::CACHE_CONTROL, FORCE_REVALIDATION);
        }

        tracing::debug!(
            target: "hcache::conditional",
            method = %req.method(),
            uri = %req.uri(),
            validator = validator.map_or("none", |(name, _)| name),
            end_to_end,
            "Built conditional request"
        );

        req
    }

    /// Copy `original` and append a single `If-None-Match` listing the ETag
    /// of every variant that has one (first occurrence order, duplicates
    /// dropped). Nothing is appended when no variant carries an ETag.
    pub fn build_conditional_request_from_variants(
        &self,
        original: &Request,
        variants: &[CacheEntry],
    ) -> Request {
        let mut req = original.clone();

        let mut etags: Vec<&str> = Vec::new();
        for etag in variants.iter().filter_map(CacheEntry::etag) {
            if !etags.contains(&etag) {
                etags.push(etag);
            }
        }

        if !etags.is_empty() {
            req.add_header(names::IF_NONE_MATCH, etags.join(", "));
        }

        tracing::debug!(
            target: "hcache::conditional",
            method = %req.method(),
            uri = %req.uri(),
            variants = variants.len(),
            etags = etags.len(),
            "Built variant conditional request"
        );

        req
    }

    /// Copy `original` without any conditional headers and ask every cache
    /// on the path for a full response (`Cache-Control: no-cache`,
    /// `Pragma: no-cache`).
    pub fn build_unconditional_request(&self, original: &Request) -> Request {
        let mut req = original.clone();

        let mut removed = 0;
        for name in CONDITIONAL_HEADERS {
            removed += req.headers_mut().remove_all(name);
        }
        req.add_header(names::CACHE_CONTROL, "no-cache");
        req.add_header(names::PRAGMA, "no-cache");

        tracing::debug!(
            target: "hcache::conditional",
            method = %req.method(),
            uri = %req.uri(),
            removed,
            "Built unconditional request"
        );

        req
    }
}

/// ETag wins over Last-Modified; at most one validator is ever used.
fn select_validator(entry: &CacheEntry) -> Option<(&'static str, &str)> {
    if let Some(etag) = entry.etag() {
        return Some((names::IF_NONE_MATCH, etag));
    }
    entry
        .last_modified()
        .map(|last_modified| (names::IF_MODIFIED_SINCE, last_modified))
}
