use serde::Serialize;

/// One comma-separated element of a header value, e.g. `max-age=5` or
/// `must-revalidate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderElement {
    pub name: String,
    pub value: Option<String>,
}

impl HeaderElement {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// ASCII case-insensitive name comparison.
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Parse a single header value into its elements.
///
/// Commas inside quoted strings do not split elements. Parameters after an
/// unquoted `;` are dropped (`must-revalidate;x=1` is `must-revalidate`).
/// Empty elements (`a,,b`, trailing commas) and elements whose name is not
/// a token (`=5`, `"x"`) are skipped.
pub fn parse_elements(value: &str) -> Vec<HeaderElement> {
    split_elements(value)
        .into_iter()
        .filter_map(parse_element)
        .collect()
}

/// Parse every value of a multi-line header, in order.
pub fn parse_all_elements<'a, I>(values: I) -> Vec<HeaderElement>
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().flat_map(parse_elements).collect()
}

fn split_elements(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for idx in unquoted_positions(value, ',') {
        parts.push(&value[start..idx]);
        start = idx + 1;
    }
    parts.push(&value[start..]);
    parts
}

// Byte offsets of `delim` outside quoted strings.
fn unquoted_positions(value: &str, delim: char) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut in_quotes = false;
    let mut escaped = false;

    for (idx, ch) in value.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            c if c == delim && !in_quotes => positions.push(idx),
            _ => {}
        }
    }
    positions
}

fn strip_params(raw: &str) -> &str {
    match unquoted_positions(raw, ';').first() {
        Some(&idx) => &raw[..idx],
        None => raw,
    }
}

fn parse_element(raw: &str) -> Option<HeaderElement> {
    let raw = strip_params(raw).trim();
    if raw.is_empty() {
        return None;
    }

    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name.trim(), Some(unquote(value.trim()))),
        None => (raw, None),
    };

    if name.is_empty() || !name.bytes().all(is_tchar) {
        return None;
    }

    Some(HeaderElement {
        name: name.to_string(),
        value,
    })
}

fn unquote(value: &str) -> String {
    if value.len() < 2 || !value.starts_with('"') || !value.ends_with('"') {
        return value.to_string();
    }

    let inner = &value[1..value.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

// RFC 7230 tchar
fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}
