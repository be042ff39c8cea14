use hcache_config::OutputFormat;
use hcache_http::{Request, version_str};

/// Render the built request for stdout.
pub(crate) fn render(req: &Request, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(req)),
        OutputFormat::Json => render_json(req),
    }
}

fn render_text(req: &Request) -> String {
    let mut out = req.request_line();
    for header in req.headers() {
        out.push('\n');
        out.push_str(&header.to_string());
    }
    out
}

fn render_json(req: &Request) -> Result<String, serde_json::Error> {
    let value = serde_json::json!({
        "method": req.method().as_str(),
        "uri": req.uri().to_string(),
        "version": version_str(req.version()),
        "headers": req.headers(),
    });
    serde_json::to_string_pretty(&value)
}

#[cfg(test)]
mod tests {
    use hcache_config::OutputFormat;
    use hcache_http::Request;

    use super::render;

    fn request() -> Request {
        let mut req = Request::new("GET", "/theuri").expect("expected request");
        req.add_header("Accept-Encoding", "gzip");
        req.add_header("If-None-Match", "\"etag\"");
        req
    }

    #[test]
    fn text_lists_request_line_then_headers() {
        let out = render(&request(), OutputFormat::Text).expect("expected text");
        assert_eq!(
            out,
            "GET /theuri HTTP/1.1\nAccept-Encoding: gzip\nIf-None-Match: \"etag\""
        );
    }

    #[test]
    fn json_keeps_header_order() {
        let out = render(&request(), OutputFormat::Json).expect("expected json");
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(value["method"], "GET");
        assert_eq!(value["version"], "HTTP/1.1");
        assert_eq!(value["headers"][0]["name"], "Accept-Encoding");
        assert_eq!(value["headers"][1]["value"], "\"etag\"");
    }
}
