//! Request and header model shared by the cache crates.
//!
//! Headers are kept in an ordered list rather than an `http::HeaderMap`
//! because revalidation must preserve the relative order of every header,
//! including duplicates with different names interleaved.

pub mod error;
pub mod header;
pub mod request;

pub use error::HttpError;
pub use header::{Header, HeaderList};
pub use request::{Request, parse_version, version_str};

/// Header names read or written by the revalidation logic.
pub mod names {
    pub const ETAG: &str = "ETag";
    pub const LAST_MODIFIED: &str = "Last-Modified";
    pub const CACHE_CONTROL: &str = "Cache-Control";
    pub const PRAGMA: &str = "Pragma";
    pub const DATE: &str = "Date";
    pub const IF_NONE_MATCH: &str = "If-None-Match";
    pub const IF_MODIFIED_SINCE: &str = "If-Modified-Since";
    pub const IF_MATCH: &str = "If-Match";
    pub const IF_UNMODIFIED_SINCE: &str = "If-Unmodified-Since";
    pub const IF_RANGE: &str = "If-Range";
}
