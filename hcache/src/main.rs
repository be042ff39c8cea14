use std::time::SystemTime;

use anyhow::Context;
use bytes::Bytes;
use hcache_cache::{CacheEntry, ConditionalRequestBuilder};
use hcache_config::{EntryMode, HcacheConfig};
use parser::parse_stored_head;
use utils::init_tracing;

mod render;

const DEFAULT_CONFIG: &str = "hcache.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    let cfg = HcacheConfig::from_file_or_default(&config_path);
    init_tracing(cfg.global().log_level());
    tracing::info!(
        target: "hcache::config",
        config = %config_path,
        mode = %cfg.entry().mode(),
        output = %cfg.global().output(),
        "Configuration loaded"
    );
    tracing::debug!(target: "hcache::config", "Effective configuration:\n{}", cfg.summary());

    let original = cfg
        .request()
        .to_request()
        .context("invalid [request] section")?;
    let builder = ConditionalRequestBuilder::new();

    let revalidation = match cfg.entry().mode() {
        EntryMode::Conditional => {
            let entry = load_entry(cfg.entry().path()).await?;
            if !entry.has_validator() {
                tracing::warn!(
                    target: "hcache::entry",
                    path = cfg.entry().path(),
                    "Stored entry has neither ETag nor Last-Modified; request stays unconditional"
                );
            }
            builder.build_conditional_request(&original, &entry)
        }
        EntryMode::Unconditional => builder.build_unconditional_request(&original),
        EntryMode::Variants => {
            let paths = std::iter::once(cfg.entry().path())
                .chain(cfg.entry().variant_paths().iter().map(String::as_str));
            let mut variants = Vec::new();
            for path in paths {
                variants.push(load_entry(path).await?);
            }
            builder.build_conditional_request_from_variants(&original, &variants)
        }
    };

    println!("{}", render::render(&revalidation, cfg.global().output())?);
    Ok(())
}

/// Read a stored response from disk. The file's modification time stands in
/// for both exchange timestamps.
async fn load_entry(path: &str) -> anyhow::Result<CacheEntry> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading stored entry '{path}'"))?;
    let stored_at = tokio::fs::metadata(path)
        .await
        .and_then(|meta| meta.modified())
        .unwrap_or_else(|_| SystemTime::now());

    let head = parse_stored_head(&raw).with_context(|| format!("parsing stored entry '{path}'"))?;
    let body = Bytes::copy_from_slice(raw.get(head.body_offset..).unwrap_or_default());

    tracing::debug!(
        target: "hcache::entry",
        path,
        status = head.status.as_u16(),
        headers = head.headers.len(),
        body_len = body.len(),
        "Loaded stored entry"
    );

    Ok(CacheEntry::from_head(stored_at, stored_at, head, body))
}
