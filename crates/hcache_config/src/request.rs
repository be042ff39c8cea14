use hcache_http::{HeaderList, HttpError, Request, parse_version};
use serde::Deserialize;

// =======================================================
// REQUEST CONFIG + DEFAULTS
// =======================================================
/// The request that would be sent if nothing were cached.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RequestConfig {
    pub method: String,
    pub uri: String,
    pub version: String,
    /// `Name: value` lines, sent in this order.
    pub headers: Vec<String>,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            method: "GET".into(),
            uri: "/".into(),
            version: "HTTP/1.1".into(),
            headers: Vec::new(),
        }
    }
}

impl RequestConfig {
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Build the typed request described by this section.
    pub fn to_request(&self) -> Result<Request, HttpError> {
        let version = parse_version(&self.version)?;
        let mut req = Request::with_version(&self.method, &self.uri, version)?;
        *req.headers_mut() = HeaderList::from_lines(&self.headers)?;
        Ok(req)
    }

    pub(crate) fn apply_defaults_from(&mut self, defaults: &RequestConfig) {
        if self.method.trim().is_empty() {
            self.method = defaults.method.clone();
        }
        if self.uri.trim().is_empty() {
            self.uri = defaults.uri.clone();
        }
        if self.version.trim().is_empty() {
            self.version = defaults.version.clone();
        }
    }
}
