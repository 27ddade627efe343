//! Href resolution
//!
//! Resolves relative references against the manifest base URL so spine
//! lookups compare absolute identities rather than raw href strings.
//! Covers the reference forms that appear in publication manifests:
//! absolute URLs, protocol-relative and absolute-path references, and
//! relative paths with dot segments. Queries and fragments are carried
//! from the reference. No IDN or percent-encoding normalization.

/// Resolve `href` against `base`, returning the absolute form.
///
/// ```
/// let abs = amnesia_reader::manifest::resolve(
///     "https://example.com/books/manifest.json",
///     "chapter2.xhtml",
/// );
/// assert_eq!(abs, "https://example.com/books/chapter2.xhtml");
/// ```
pub fn resolve(base: &str, href: &str) -> String {
    let href = href.trim();

    if href.is_empty() {
        return base.to_string();
    }
    if has_scheme(href) {
        return href.to_string();
    }
    if let Some(rest) = href.strip_prefix("//") {
        // Protocol-relative: adopt the base scheme
        let scheme = scheme_of(base).unwrap_or("https");
        return format!("{}://{}", scheme, rest);
    }
    if let Some(fragment) = href.strip_prefix('#') {
        // Same-document reference: base without its fragment
        return format!("{}#{}", strip_fragment(base), fragment);
    }

    let (path, suffix) = split_reference(href);
    let (origin, base_path) = split_base(base);

    let merged = if path.is_empty() {
        base_path.to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        // Replace the last segment of the base path
        match base_path.rfind('/') {
            Some(i) => format!("{}{}", &base_path[..=i], path),
            None => format!("/{}", path),
        }
    };

    format!("{}{}{}", origin, remove_dot_segments(&merged), suffix)
}

/// Whether the reference opens with a URI scheme (`alpha (alnum|+|-|.)* :`
/// before any slash).
fn has_scheme(reference: &str) -> bool {
    let colon = match reference.find(':') {
        Some(i) => i,
        None => return false,
    };
    if let Some(slash) = reference.find('/') {
        if slash < colon {
            return false;
        }
    }
    let scheme = &reference[..colon];
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn scheme_of(base: &str) -> Option<&str> {
    let colon = base.find(':')?;
    if has_scheme(base) {
        Some(&base[..colon])
    } else {
        None
    }
}

fn strip_fragment(base: &str) -> &str {
    match base.find('#') {
        Some(i) => &base[..i],
        None => base,
    }
}

/// Split a reference into its path and the trailing query/fragment part.
fn split_reference(reference: &str) -> (&str, &str) {
    match reference.find(|c| c == '?' || c == '#') {
        Some(i) => reference.split_at(i),
        None => (reference, ""),
    }
}

/// Split the base URL into `scheme://authority` and its path.
fn split_base(base: &str) -> (&str, &str) {
    let (base, _) = split_reference(base);
    match base.find("://") {
        Some(scheme_end) => {
            let authority_start = scheme_end + 3;
            match base[authority_start..].find('/') {
                Some(i) => base.split_at(authority_start + i),
                None => (base, "/"),
            }
        }
        None => ("", base),
    }
}

/// RFC 3986 dot-segment removal over an absolute path.
fn remove_dot_segments(path: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => {
                stack.pop();
            }
            s => stack.push(s),
        }
    }

    let mut output = String::with_capacity(path.len());
    for segment in &stack {
        output.push('/');
        output.push_str(segment);
    }
    if output.is_empty() || path.ends_with('/') || path.ends_with("/.") || path.ends_with("/..") {
        output.push('/');
    }
    output
}
