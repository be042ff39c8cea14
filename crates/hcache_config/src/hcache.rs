use serde::Deserialize;

use crate::validation::{ConfigReport, validate};
use crate::{EntryConfig, GlobalConfig, RequestConfig};

// =======================================================
// HCACHE CONFIG — main config
// =======================================================
#[derive(Debug, Deserialize, Default)]
pub struct HcacheConfig {
    #[serde(default)]
    pub global: GlobalConfig,

    #[serde(default)]
    pub request: RequestConfig,

    #[serde(default)]
    pub entry: EntryConfig,
}

impl HcacheConfig {
    pub fn global(&self) -> &GlobalConfig {
        &self.global
    }

    pub fn request(&self) -> &RequestConfig {
        &self.request
    }

    pub fn entry(&self) -> &EntryConfig {
        &self.entry
    }

    /// Validate the configuration and return a report of warnings and errors.
    pub fn validate(&self) -> ConfigReport {
        validate(self)
    }

    pub fn from_file(file_name: &str) -> Result<Self, config::ConfigError> {
        let built = config::Config::builder()
            .add_source(config::File::new(file_name, config::FileFormat::Toml).required(false))
            .build()?;
        Self::from_built(built)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, config::ConfigError> {
        let built = config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?;
        Self::from_built(built)
    }

    fn from_built(built: config::Config) -> Result<Self, config::ConfigError> {
        let mut cfg: HcacheConfig = built.try_deserialize()?;
        cfg.apply_defaults();
        Ok(cfg)
    }

    /// Load `file_name`, falling back to the built-in defaults when it cannot
    /// be read or its report has errors. The report goes to stderr either way.
    pub fn from_file_or_default(file_name: &str) -> Self {
        let cfg = match Self::from_file(file_name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("hcache: cannot read config '{file_name}' ({e}); using defaults");
                return HcacheConfig::default();
            }
        };

        let report = cfg.validate();
        if report.has_errors() {
            eprint!("hcache: config '{file_name}' rejected, using defaults: {}", report.format());
            return HcacheConfig::default();
        }
        if report.warning_count() > 0 {
            eprint!("hcache: config '{file_name}': {}", report.format());
        }
        cfg
    }

    fn apply_defaults(&mut self) {
        self.global.apply_defaults_from(&GlobalConfig::default());
        self.request.apply_defaults_from(&RequestConfig::default());
        self.entry.apply_defaults_from(&EntryConfig::default());
    }

    /// Multi-line dump of the effective configuration, one `key = value` per line.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "[global]".to_string(),
            format!("  log_level = {}", self.global.log_level),
            format!("  output    = {}", self.global.output),
            "[request]".to_string(),
            format!("  method    = {}", self.request.method),
            format!("  uri       = {}", self.request.uri),
            format!("  version   = {}", self.request.version),
        ];
        lines.extend(
            self.request
                .headers
                .iter()
                .map(|header| format!("  header    = {header}")),
        );
        lines.push("[entry]".to_string());
        lines.push(format!("  path      = {}", self.entry.path));
        lines.push(format!("  mode      = {}", self.entry.mode));
        lines.extend(
            self.entry
                .variant_paths
                .iter()
                .map(|variant| format!("  variant   = {variant}")),
        );
        lines.join("\n")
    }
}
