use serde::Deserialize;

// =======================================================
// ENTRY MODE (enum tipado)
// =======================================================
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryMode {
    /// Validators from a single stored entry.
    #[default]
    #[serde(rename = "conditional")]
    Conditional,
    /// Strip validators and ask for a full response.
    #[serde(rename = "unconditional")]
    Unconditional,
    /// One `If-None-Match` listing the ETags of several stored variants.
    #[serde(rename = "variants")]
    Variants,
}

impl std::fmt::Display for EntryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryMode::Conditional => write!(f, "conditional"),
            EntryMode::Unconditional => write!(f, "unconditional"),
            EntryMode::Variants => write!(f, "variants"),
        }
    }
}

// =======================================================
// ENTRY CONFIG + DEFAULTS
// =======================================================
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EntryConfig {
    /// Stored response head (status line + headers), optionally followed by the body.
    pub path: String,
    pub mode: EntryMode,
    /// Further stored variants, read after `path` in `variants` mode.
    pub variant_paths: Vec<String>,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            path: "entry.http".into(),
            mode: EntryMode::Conditional,
            variant_paths: Vec::new(),
        }
    }
}

impl EntryConfig {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    pub fn variant_paths(&self) -> &[String] {
        &self.variant_paths
    }

    pub(crate) fn apply_defaults_from(&mut self, defaults: &EntryConfig) {
        if self.path.trim().is_empty() {
            self.path = defaults.path.clone();
        }
    }
}
