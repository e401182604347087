use crate::errors::RouterError;
use crate::routing::types::RouteSegment;
use regex::Regex;

/// Everything compiled out of one URL template at registration time.
#[derive(Debug)]
pub struct ParsedPattern {
    pub normalized: String,
    pub segments: Vec<RouteSegment>,
    pub param_names: Vec<String>,
    pub path_regex: Regex,
}

/// Compile a URL template such as `/users/:id` into its matcher.
///
/// A segment written `:name` (one or more word characters) becomes a named
/// capture; every other segment is literal text, matched byte-exact. The
/// compiled matcher accepts a path when the segment counts agree, literals
/// agree, and every capture binds a non-empty, slash-free value.
pub fn parse_route_pattern(pattern: &str) -> Result<ParsedPattern, RouterError> {
    if pattern.is_empty() {
        return Err(invalid(pattern, "pattern must not be empty"));
    }
    if !pattern.starts_with('/') {
        return Err(invalid(pattern, "pattern must begin with '/'"));
    }

    let mut segments = Vec::new();
    let mut param_names: Vec<String> = Vec::new();
    for part in pattern.split('/').filter(|part| !part.is_empty()) {
        if let Some(name) = part.strip_prefix(':') {
            if name.is_empty() {
                return Err(invalid(pattern, "parameter segment ':' has no name"));
            }
            if !name.chars().all(is_word_char) {
                return Err(invalid(
                    pattern,
                    format!("parameter name {name:?} may only contain word characters"),
                ));
            }
            if param_names.iter().any(|existing| existing == name) {
                return Err(invalid(
                    pattern,
                    format!("parameter name {name:?} appears more than once"),
                ));
            }
            param_names.push(name.to_string());
            segments.push(RouteSegment::Param(name.to_string()));
        } else {
            segments.push(RouteSegment::Static(part.to_string()));
        }
    }

    let mut regex_pattern = String::from("^");
    if segments.is_empty() {
        regex_pattern.push('/');
    }
    for segment in &segments {
        regex_pattern.push('/');
        match segment {
            RouteSegment::Static(text) => regex_pattern.push_str(&regex::escape(text)),
            RouteSegment::Param(_) => regex_pattern.push_str("([^/]+)"),
        }
    }
    regex_pattern.push('$');

    let path_regex = Regex::new(&regex_pattern)
        .map_err(|e| invalid(pattern, format!("matcher compilation failed: {e}")))?;

    Ok(ParsedPattern {
        normalized: normalize_path(pattern),
        segments,
        param_names,
        path_regex,
    })
}

/// Canonical form of a path or pattern: leading `/`, segments joined by a
/// single `/`, no trailing slash. Repeated and trailing slashes carry no
/// meaning; the root is `/`.
pub fn normalize_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + 1);
    for part in path.split('/').filter(|part| !part.is_empty()) {
        normalized.push('/');
        normalized.push_str(part);
    }
    if normalized.is_empty() {
        normalized.push('/');
    }
    normalized
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn invalid(pattern: &str, reason: impl Into<String>) -> RouterError {
    RouterError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.into(),
    }
}
