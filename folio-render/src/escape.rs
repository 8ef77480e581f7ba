//! HTML escaping and URL helpers.
//!
//! Every string that originates in a record or settings file passes through
//! one of these functions before it is written into a page.

/// Escape text for use inside an HTML element.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Schemes allowed in links; anything else with a scheme becomes `#`.
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Escape a URL for use inside a double-quoted `href`/`src` attribute.
///
/// The URL is normalised the way browsers read it first: tab, CR and LF
/// are removed and leading control characters and spaces are stripped.
/// Relative URLs and `http`, `https` and `mailto` pass; every other scheme
/// (`javascript:`, `vbscript:`, `data:` and so on) is replaced with `#`.
#[must_use]
pub fn escape_url(url: &str) -> String {
    let cleaned: String = url
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();
    let cleaned = cleaned.trim_start_matches(|c: char| c <= ' ');

    if let Some(scheme) = url_scheme(cleaned) {
        if !SAFE_SCHEMES.iter().any(|safe| scheme.eq_ignore_ascii_case(safe)) {
            return "#".to_string();
        }
    }
    escape_html(cleaned)
}

/// The scheme of `url`, if it has one.
///
/// A `:` only introduces a scheme when it comes before any `/`, `?` or `#`.
fn url_scheme(url: &str) -> Option<&str> {
    let end = url.find([':', '/', '?', '#'])?;
    url[end..].starts_with(':').then(|| &url[..end])
}

/// Percent-encode each `/`-separated segment of an asset filename.
#[must_use]
pub fn encode_path(name: &str) -> String {
    name.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Percent-encode a query-string value.
#[must_use]
pub fn encode_query(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Split plain text into paragraphs on blank lines.
///
/// Lines inside a paragraph are joined with a single space.
#[must_use]
pub fn paragraphs(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                out.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join(" "));
    }
    out
}
