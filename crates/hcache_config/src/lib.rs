//! Configuration for the `hcache` tool.
//!
//! Loaded from `hcache.toml`; every section is optional and falls back to
//! defaults. Semantic problems are collected into a [`ConfigReport`].

mod entry;
mod global;
mod hcache;
mod request;
mod validation;

pub use entry::{EntryConfig, EntryMode};
pub use global::{GlobalConfig, OutputFormat};
pub use hcache::HcacheConfig;
pub use request::RequestConfig;
pub use validation::{ConfigReport, Severity, validate};
