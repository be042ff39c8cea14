use std::path::Path;

use hcache_http::{Header, Request, parse_version};

use crate::{EntryMode, HcacheConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Problems found in an `hcache.toml`, kept in the order they were found.
///
/// Errors make the file unusable; warnings are reported and the file is
/// still used.
#[derive(Debug, Default)]
pub struct ConfigReport {
    issues: Vec<(Severity, String)>,
}

impl ConfigReport {
    pub fn is_ok(&self) -> bool {
        !self.has_errors()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn issues(&self) -> impl Iterator<Item = (Severity, &str)> {
        self.issues.iter().map(|(severity, msg)| (*severity, msg.as_str()))
    }

    /// One summary line followed by `  <severity>: <message>` per issue.
    /// Empty when there is nothing to report.
    pub fn format(&self) -> String {
        if self.issues.is_empty() {
            return String::new();
        }
        let mut out = format!(
            "{} error(s), {} warning(s)\n",
            self.error_count(),
            self.warning_count()
        );
        for (severity, msg) in self.issues() {
            out.push_str(&format!("  {severity}: {msg}\n"));
        }
        out
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|(s, _)| *s == severity).count()
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.issues.push((Severity::Warning, message.into()));
    }

    fn error(&mut self, message: impl Into<String>) {
        self.issues.push((Severity::Error, message.into()));
    }
}

/// Validate an hcache configuration and return a report of issues.
pub fn validate(cfg: &HcacheConfig) -> ConfigReport {
    let mut report = ConfigReport::default();

    validate_global(cfg, &mut report);
    validate_request(cfg, &mut report);
    validate_entry(cfg, &mut report);

    report
}

fn validate_global(cfg: &HcacheConfig, report: &mut ConfigReport) {
    let level = cfg.global.log_level.trim().to_ascii_lowercase();
    if !matches!(
        level.as_str(),
        "trace" | "debug" | "info" | "warn" | "error" | "off"
    ) && !level.contains('=')
    {
        report.warn(format!(
            "global.log_level '{}' is not a plain level; it will be used as a filter directive",
            cfg.global.log_level
        ));
    }
}

fn validate_request(cfg: &HcacheConfig, report: &mut ConfigReport) {
    let request = &cfg.request;

    if let Err(e) = parse_version(&request.version) {
        report.error(format!("request.version: {e}"));
    }

    if let Err(e) = Request::new(&request.method, &request.uri) {
        report.error(format!("request: {e}"));
    }

    for (idx, line) in request.headers.iter().enumerate() {
        if let Err(e) = Header::parse_line(line) {
            report.error(format!("request.headers entry at index {idx}: {e}"));
        }
    }
}

fn validate_entry(cfg: &HcacheConfig, report: &mut ConfigReport) {
    let entry = &cfg.entry;

    if entry.mode != EntryMode::Unconditional && !Path::new(&entry.path).is_file() {
        report.warn(format!(
            "entry.path '{}' does not exist or is not a file",
            entry.path
        ));
    }

    match entry.mode {
        EntryMode::Variants => {
            if entry.variant_paths.is_empty() {
                report.warn("entry.mode is 'variants' but entry.variant_paths is empty; only entry.path is used");
            }
            for (idx, path) in entry.variant_paths.iter().enumerate() {
                if path.trim().is_empty() {
                    report.error(format!("entry.variant_paths entry at index {idx} is empty"));
                } else if !Path::new(path).is_file() {
                    report.warn(format!(
                        "entry.variant_paths '{path}' does not exist or is not a file"
                    ));
                }
            }
        }
        EntryMode::Conditional | EntryMode::Unconditional => {
            if !entry.variant_paths.is_empty() {
                report.warn(format!(
                    "entry.variant_paths is ignored in '{}' mode",
                    entry.mode
                ));
            }
        }
    }
}
