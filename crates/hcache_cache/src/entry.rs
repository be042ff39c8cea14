use std::time::SystemTime;

use bytes::Bytes;
use hcache_http::{HeaderList, names};
use http::{StatusCode, Version};
use parser::{HeaderElement, ResponseHead, parse_all_elements};

/// Status line of the stored response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub version: Version,
    pub status: StatusCode,
    pub reason: String,
}

impl StatusLine {
    pub fn new(version: Version, status: StatusCode) -> Self {
        let reason = status.canonical_reason().unwrap_or("").to_string();
        Self {
            version,
            status,
            reason,
        }
    }
}

/// Read-only view of a stored response.
///
/// `request_date` and `response_date` bracket the exchange that produced
/// the entry; freshness and age logic lives elsewhere and nothing in this
/// crate decides on them.
#[derive(Clone, Debug)]
pub struct CacheEntry {
    request_date: SystemTime,
    response_date: SystemTime,
    status_line: StatusLine,
    headers: HeaderList,
    body: Bytes,
}

impl CacheEntry {
    pub fn new(
        request_date: SystemTime,
        response_date: SystemTime,
        status_line: StatusLine,
        headers: HeaderList,
        body: Bytes,
    ) -> Self {
        Self {
            request_date,
            response_date,
            status_line,
            headers,
            body,
        }
    }

    /// Build an entry from a parsed stored response head.
    pub fn from_head(
        request_date: SystemTime,
        response_date: SystemTime,
        head: ResponseHead,
        body: Bytes,
    ) -> Self {
        let status_line = StatusLine {
            version: head.version,
            status: head.status,
            reason: head.reason,
        };
        Self::new(request_date, response_date, status_line, head.headers, body)
    }

    pub fn request_date(&self) -> SystemTime {
        self.request_date
    }

    pub fn response_date(&self) -> SystemTime {
        self.response_date
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.status_line
    }

    pub fn headers(&self) -> &HeaderList {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// First `ETag` value, verbatim (quotes and `W/` prefix included).
    pub fn etag(&self) -> Option<&str> {
        self.headers.first_value(names::ETAG)
    }

    /// First `Last-Modified` value, verbatim.
    pub fn last_modified(&self) -> Option<&str> {
        self.headers.first_value(names::LAST_MODIFIED)
    }

    /// Elements of every `Cache-Control` header, in header order.
    pub fn cache_control(&self) -> Vec<HeaderElement> {
        parse_all_elements(self.headers.all(names::CACHE_CONTROL).map(|h| h.value()))
    }

    /// `Date` header as a timestamp. `None` when missing or unparsable.
    pub fn date(&self) -> Option<SystemTime> {
        let raw = self.headers.first_value(names::DATE)?;
        match httpdate::parse_http_date(raw) {
            Ok(date) => Some(date),
            Err(_) => {
                tracing::debug!(target: "hcache::entry", date = raw, "Unparsable Date header");
                None
            }
        }
    }

    /// Whether a conditional request can be built from this entry.
    pub fn has_validator(&self) -> bool {
        self.etag().is_some() || self.last_modified().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use bytes::Bytes;
    use hcache_http::HeaderList;
    use http::{StatusCode, Version};

    use super::{CacheEntry, StatusLine};

    fn entry(headers: &[(&str, &str)]) -> CacheEntry {
        let mut list = HeaderList::new();
        for (name, value) in headers {
            list.push(*name, *value);
        }
        let now = SystemTime::now();
        CacheEntry::new(
            now,
            now,
            StatusLine::new(Version::HTTP_11, StatusCode::OK),
            list,
            Bytes::new(),
        )
    }

    #[test]
    fn validators_are_first_match_and_verbatim() {
        let e = entry(&[
            ("etag", "W/\"one\""),
            ("ETag", "\"two\""),
            ("Last-Modified", "Tue, 15 Nov 1994 12:45:26 GMT"),
        ]);
        assert_eq!(e.etag(), Some("W/\"one\""));
        assert_eq!(e.last_modified(), Some("Tue, 15 Nov 1994 12:45:26 GMT"));
        assert!(e.has_validator());
    }

    #[test]
    fn cache_control_spans_all_header_lines() {
        let e = entry(&[
            ("Cache-Control", "max-age=5"),
            ("Date", "Tue, 15 Nov 1994 08:12:31 GMT"),
            ("cache-control", "must-revalidate,"),
        ]);
        let names: Vec<String> = e.cache_control().into_iter().map(|el| el.name).collect();
        assert_eq!(names, vec!["max-age", "must-revalidate"]);
    }

    #[test]
    fn date_header_is_parsed() {
        let e = entry(&[("Date", "Sun, 06 Nov 1994 08:49:37 GMT")]);
        assert_eq!(
            e.date(),
            Some(UNIX_EPOCH + Duration::from_secs(784_111_777))
        );
        assert_eq!(entry(&[("Date", "not a date")]).date(), None);
    }

    #[test]
    fn no_validator_without_etag_or_last_modified() {
        let e = entry(&[("Date", "Sun, 06 Nov 1994 08:49:37 GMT")]);
        assert!(!e.has_validator());
        assert_eq!(e.status_line().reason, "OK");
    }
}
