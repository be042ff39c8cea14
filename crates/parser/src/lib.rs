//! Specialized parsers used by the cache crates.
//!
//! - [`elements`]: splits header values such as `Cache-Control` into
//!   `name[=value]` elements.
//! - [`response`]: parses a stored response head with `httparse`.

pub mod elements;
pub mod response;

pub use elements::{HeaderElement, parse_all_elements, parse_elements};
pub use response::{MAX_HEADERS, ParseError, ResponseHead, parse_response_head, parse_stored_head};
