use http::{HeaderName, HeaderValue, Method, Uri, Version};

use crate::{Header, HeaderList, HttpError};

/// Outgoing request as seen by the cache: request line plus ordered headers.
///
/// There is no body; revalidation only ever touches the request head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    uri: Uri,
    version: Version,
    headers: HeaderList,
}

impl Request {
    /// Parse `method` and `uri`, defaulting to HTTP/1.1.
    pub fn new(method: &str, uri: &str) -> Result<Self, HttpError> {
        Self::with_version(method, uri, Version::HTTP_11)
    }

    pub fn with_version(method: &str, uri: &str, version: Version) -> Result<Self, HttpError> {
        let method = method
            .parse::<Method>()
            .map_err(|_| HttpError::InvalidMethod(method.to_string()))?;
        if uri.trim().is_empty() {
            return Err(HttpError::InvalidUri(uri.to_string()));
        }
        let uri = uri
            .parse::<Uri>()
            .map_err(|_| HttpError::InvalidUri(uri.to_string()))?;
        Ok(Self::from_parts(method, uri, version, HeaderList::new()))
    }

    pub fn from_parts(method: Method, uri: Uri, version: Version, headers: HeaderList) -> Self {
        Self {
            method,
            uri,
            version,
            headers,
        }
    }

    /// Copy the request line and headers of an `http::Request`.
    ///
    /// `HeaderMap` groups values by name, so the resulting order is the map's
    /// iteration order, not necessarily the order the headers were inserted.
    /// Values that are not visible ASCII (obs-text) are rejected rather than
    /// rewritten.
    pub fn from_http<B>(req: &http::Request<B>) -> Result<Self, HttpError> {
        let headers = req
            .headers()
            .iter()
            .map(|(name, value)| {
                let value = value
                    .to_str()
                    .map_err(|_| HttpError::InvalidHeaderValue(name.as_str().to_string()))?;
                Ok(Header::new(name.as_str(), value))
            })
            .collect::<Result<HeaderList, HttpError>>()?;
        Ok(Self::from_parts(
            req.method().clone(),
            req.uri().clone(),
            req.version(),
            headers,
        ))
    }

    /// Hand the request to an `http`-based transport.
    pub fn into_http(self) -> Result<http::Request<()>, HttpError> {
        let mut req = http::Request::new(());
        *req.method_mut() = self.method;
        *req.uri_mut() = self.uri;
        *req.version_mut() = self.version;

        let map = req.headers_mut();
        for header in self.headers {
            let name = HeaderName::from_bytes(header.name.as_bytes())
                .map_err(|_| HttpError::InvalidHeaderName(header.name.clone()))?;
            let value = HeaderValue::from_str(&header.value)
                .map_err(|_| HttpError::InvalidHeaderValue(header.name.clone()))?;
            map.append(name, value);
        }
        Ok(req)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn headers(&self) -> &HeaderList {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderList {
        &mut self.headers
    }

    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push(name, value);
    }

    /// `GET /path HTTP/1.1` style request line.
    pub fn request_line(&self) -> String {
        format!("{} {} {}", self.method, self.uri, version_str(self.version))
    }
}

/// Parse a protocol version token such as `HTTP/1.1`.
pub fn parse_version(raw: &str) -> Result<Version, HttpError> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "HTTP/0.9" => Ok(Version::HTTP_09),
        "HTTP/1.0" => Ok(Version::HTTP_10),
        "HTTP/1.1" => Ok(Version::HTTP_11),
        "HTTP/2" | "HTTP/2.0" => Ok(Version::HTTP_2),
        "HTTP/3" | "HTTP/3.0" => Ok(Version::HTTP_3),
        _ => Err(HttpError::InvalidVersion(raw.to_string())),
    }
}

pub fn version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_2 => "HTTP/2",
        Version::HTTP_3 => "HTTP/3",
        _ => "HTTP/1.1",
    }
}

#[cfg(test)]
mod tests {
    use http::{HeaderValue, Method, Version};

    use super::{Request, parse_version, version_str};
    use crate::HttpError;

    #[test]
    fn new_defaults_to_http11() {
        let req = Request::new("GET", "/theuri").expect("expected request");
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.uri().path(), "/theuri");
        assert_eq!(req.version(), Version::HTTP_11);
        assert!(req.headers().is_empty());
        assert_eq!(req.request_line(), "GET /theuri HTTP/1.1");
    }

    #[test]
    fn new_rejects_bad_method_and_empty_uri() {
        assert!(matches!(
            Request::new("GE T", "/"),
            Err(HttpError::InvalidMethod(_))
        ));
        assert!(matches!(
            Request::new("GET", "  "),
            Err(HttpError::InvalidUri(_))
        ));
    }

    #[test]
    fn into_http_appends_every_header() {
        let mut req = Request::new("GET", "/").expect("expected request");
        req.add_header("Cache-Control", "no-store");
        req.add_header("Accept", "*/*");
        req.add_header("Cache-Control", "max-age=0");

        let http_req = req.into_http().expect("expected http request");
        let values: Vec<&str> = http_req
            .headers()
            .get_all("cache-control")
            .iter()
            .map(|v| v.to_str().expect("ascii"))
            .collect();
        assert_eq!(values, vec!["no-store", "max-age=0"]);
        assert_eq!(http_req.headers().len(), 3);
    }

    #[test]
    fn into_http_rejects_invalid_header_name() {
        let mut req = Request::new("GET", "/").expect("expected request");
        req.add_header("Bad Name", "x");
        assert!(matches!(
            req.into_http(),
            Err(HttpError::InvalidHeaderName(_))
        ));
    }

    #[test]
    fn from_http_copies_request_line_and_headers() {
        let http_req = http::Request::builder()
            .method("HEAD")
            .uri("/x?y=1")
            .version(Version::HTTP_10)
            .header("Accept-Encoding", "gzip")
            .body(())
            .expect("expected http request");

        let req = Request::from_http(&http_req).expect("expected request");
        assert_eq!(req.method(), &Method::HEAD);
        assert_eq!(req.uri().to_string(), "/x?y=1");
        assert_eq!(req.version(), Version::HTTP_10);
        assert_eq!(req.headers().first_value("accept-encoding"), Some("gzip"));
    }

    #[test]
    fn from_http_rejects_obs_text_instead_of_rewriting_it() {
        let mut http_req = http::Request::new(());
        http_req.headers_mut().insert(
            "x-name",
            HeaderValue::from_bytes(b"caf\xe9").expect("obs-text is a valid header value"),
        );

        let err = Request::from_http(&http_req).unwrap_err();
        assert!(matches!(err, HttpError::InvalidHeaderValue(ref name) if name == "x-name"));
    }

    #[test]
    fn version_tokens() {
        assert_eq!(parse_version("http/1.0").expect("1.0"), Version::HTTP_10);
        assert_eq!(parse_version("HTTP/2").expect("2"), Version::HTTP_2);
        assert!(parse_version("SPDY/3").is_err());
        assert_eq!(version_str(Version::HTTP_11), "HTTP/1.1");
    }
}
