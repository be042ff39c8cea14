use hcache_http::HeaderList;
use http::{StatusCode, Version};
use thiserror::Error;

const INITIAL_HEADERS: usize = 64;
/// Header slots tried before giving up with `TooManyHeaders`.
pub const MAX_HEADERS: usize = 1024;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("response head is incomplete (missing blank line after headers)")]
    Incomplete,

    #[error("malformed response head: {0}")]
    Malformed(#[from] httparse::Error),

    #[error("invalid status code: {0}")]
    InvalidStatus(u16),

    #[error("header '{0}' has a non UTF-8 value")]
    NonUtf8HeaderValue(String),
}

/// Status line and headers of a stored response.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    pub version: Version,
    pub status: StatusCode,
    pub reason: String,
    pub headers: HeaderList,
    /// Offset of the first body byte in the parsed buffer.
    pub body_offset: usize,
}

/// Parse `HTTP/1.x <code> <reason>` followed by header lines and a blank line.
///
/// Starts with room for 64 headers and grows up to [`MAX_HEADERS`]; a head
/// with more headers than that is `Malformed(TooManyHeaders)`.
pub fn parse_response_head(buf: &[u8]) -> Result<ResponseHead, ParseError> {
    let mut capacity = INITIAL_HEADERS;
    loop {
        match parse_with_capacity(buf, capacity) {
            Err(ParseError::Malformed(httparse::Error::TooManyHeaders)) if capacity < MAX_HEADERS => {
                capacity = (capacity * 4).min(MAX_HEADERS);
            }
            other => return other,
        }
    }
}

fn parse_with_capacity(buf: &[u8], capacity: usize) -> Result<ResponseHead, ParseError> {
    let mut raw_headers = vec![httparse::EMPTY_HEADER; capacity];
    let mut res = httparse::Response::new(&mut raw_headers);

    let httparse::Status::Complete(body_offset) = res.parse(buf)? else {
        return Err(ParseError::Incomplete);
    };

    let version = match res.version {
        Some(0) => Version::HTTP_10,
        _ => Version::HTTP_11,
    };
    let code = res.code.unwrap_or(0);
    let status = StatusCode::from_u16(code).map_err(|_| ParseError::InvalidStatus(code))?;
    let reason = res.reason.unwrap_or("").to_string();

    let mut headers = HeaderList::with_capacity(res.headers.len());
    for header in res.headers.iter() {
        let value = std::str::from_utf8(header.value)
            .map_err(|_| ParseError::NonUtf8HeaderValue(header.name.to_string()))?;
        headers.push(header.name, value.trim());
    }

    Ok(ResponseHead {
        version,
        status,
        reason,
        headers,
        body_offset,
    })
}

/// Like [`parse_response_head`], but accepts a head-only file whose last
/// header line is not followed by a blank line.
pub fn parse_stored_head(buf: &[u8]) -> Result<ResponseHead, ParseError> {
    match parse_response_head(buf) {
        Err(ParseError::Incomplete) if !has_blank_line(buf) => {
            let mut owned = buf.to_vec();
            if !owned.ends_with(b"\n") {
                owned.extend_from_slice(b"\r\n");
            }
            owned.extend_from_slice(b"\r\n");
            let mut head = parse_response_head(&owned)?;
            head.body_offset = buf.len();
            Ok(head)
        }
        other => other,
    }
}

fn has_blank_line(buf: &[u8]) -> bool {
    buf.windows(2).any(|w| w == b"\n\n") || buf.windows(4).any(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use http::{StatusCode, Version};

    use super::{MAX_HEADERS, ParseError, parse_response_head, parse_stored_head};

    fn head_with_headers(count: usize) -> Vec<u8> {
        let mut raw = b"HTTP/1.1 200 OK\r\n".to_vec();
        for idx in 0..count {
            raw.extend_from_slice(format!("X-Extra-{idx}: {idx}\r\n").as_bytes());
        }
        raw.extend_from_slice(b"ETag: \"last\"\r\n\r\n");
        raw
    }

    #[test]
    fn parses_status_headers_and_body_offset() {
        let raw = b"HTTP/1.1 200 OK\r\nDate: Tue, 15 Nov 1994 08:12:31 GMT\r\nETag: \"etag\"\r\nCache-Control: max-age=5\r\nCache-Control: must-revalidate\r\n\r\nbody";
        let head = parse_response_head(raw).expect("expected head");
        assert_eq!(head.version, Version::HTTP_11);
        assert_eq!(head.status, StatusCode::OK);
        assert_eq!(head.reason, "OK");
        assert_eq!(head.headers.len(), 4);
        assert_eq!(head.headers.first_value("etag"), Some("\"etag\""));
        assert_eq!(head.headers.all("cache-control").count(), 2);
        assert_eq!(&raw[head.body_offset..], b"body");
    }

    #[test]
    fn incomplete_head_is_reported() {
        let err = parse_response_head(b"HTTP/1.1 200 OK\r\nETag: x\r\n").unwrap_err();
        assert!(matches!(err, ParseError::Incomplete));
    }

    #[test]
    fn garbage_is_malformed() {
        let err = parse_response_head(b"NOT HTTP\r\n\r\n").unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
    }

    #[test]
    fn stored_head_without_trailing_blank_line() {
        let raw = b"HTTP/1.0 304 Not Modified\nLast-Modified: yesterday\n";
        let head = parse_stored_head(raw).expect("expected head");
        assert_eq!(head.version, Version::HTTP_10);
        assert_eq!(head.status, StatusCode::NOT_MODIFIED);
        assert_eq!(head.headers.first_value("Last-Modified"), Some("yesterday"));
        assert_eq!(head.body_offset, raw.len());
    }

    #[test]
    fn many_headers_grow_the_buffer() {
        let raw = head_with_headers(100);
        let head = parse_response_head(&raw).expect("expected head");
        assert_eq!(head.headers.len(), 101);
        assert_eq!(head.headers.first_value("etag"), Some("\"last\""));
        assert_eq!(head.body_offset, raw.len());
    }

    #[test]
    fn header_count_above_the_cap_is_malformed() {
        let err = parse_response_head(&head_with_headers(MAX_HEADERS)).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Malformed(httparse::Error::TooManyHeaders)
        ));
    }
}
