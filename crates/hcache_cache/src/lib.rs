//! Client-side cache revalidation.
//!
//! Given a stored [`CacheEntry`] and the request about to be sent, the
//! [`ConditionalRequestBuilder`] produces a copy of the request carrying
//! validators (`If-None-Match` / `If-Modified-Since`) and, when the stored
//! response demands it, a `Cache-Control: max-age=0` stamp forcing
//! end-to-end revalidation.

mod conditional;
mod entry;
mod policy;

pub use conditional::ConditionalRequestBuilder;
pub use entry::{CacheEntry, StatusLine};
pub use policy::RevalidationPolicy;
