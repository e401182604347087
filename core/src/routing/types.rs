use crate::errors::{HandlerError, RouterError};
use crate::response::HttpResponse;
use crate::routing::parser::{normalize_path, parse_route_pattern};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Request methods the router accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    GET,
    POST,
}

impl HttpMethod {
    /// Parse a method token, case-insensitively.
    pub fn parse(method: &str) -> Result<Self, RouterError> {
        let upper = method.to_uppercase();
        match upper.as_str() {
            "GET" => Ok(HttpMethod::GET),
            "POST" => Ok(HttpMethod::POST),
            _ => Err(RouterError::UnsupportedMethod { method: upper }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One slash-delimited piece of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSegment {
    /// Literal text, matched byte-exact.
    Static(String),
    /// Named placeholder, matches any single non-empty segment.
    Param(String),
}

/// Parameters captured from a matched path, name to raw value.
///
/// Produced by a successful match and handed to the handler by shared
/// reference. Values are the path segments as received, undecoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RouteParams {
    values: HashMap<String, String>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// What a handler returns: a response, or an error the host reports as 500.
pub type HandlerResult = Result<HttpResponse, HandlerError>;

/// A registered request handler.
pub type Handler = Box<dyn Fn(&RouteParams) -> HandlerResult + Send + Sync>;

/// One registered route: a compiled pattern plus its handler.
///
/// Matching never mutates the route; captured parameters come back as a
/// fresh [`RouteParams`] per request.
pub struct Route {
    pattern: String,
    normalized: String,
    name: String,
    segments: Vec<RouteSegment>,
    param_names: Vec<String>,
    path_regex: Regex,
    handler: Handler,
}

impl Route {
    pub(crate) fn new(
        pattern: &str,
        name: Option<&str>,
        handler: Handler,
    ) -> Result<Self, RouterError> {
        let parsed = parse_route_pattern(pattern)?;
        let name = name.map_or_else(|| parsed.normalized.clone(), str::to_string);
        Ok(Self {
            pattern: pattern.to_string(),
            normalized: parsed.normalized,
            name,
            segments: parsed.segments,
            param_names: parsed.param_names,
            path_regex: parsed.path_regex,
            handler,
        })
    }

    /// The pattern exactly as registered.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The pattern in canonical form, the identity used for duplicate checks.
    pub fn normalized_pattern(&self) -> &str {
        &self.normalized
    }

    /// The lookup name, either given explicitly or the normalized pattern.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the pattern's placeholders, in pattern order.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Match a request path against this route.
    ///
    /// Returns the captured parameters on a match, `None` otherwise. The
    /// path is normalized first, so trailing and repeated slashes do not
    /// affect the outcome.
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let normalized = normalize_path(path);
        let captures = self.path_regex.captures(&normalized)?;
        let mut params = RouteParams::new();
        for (index, name) in self.param_names.iter().enumerate() {
            if let Some(capture) = captures.get(index + 1) {
                params.insert(name.clone(), capture.as_str());
            }
        }
        Some(params)
    }

    /// True when every declared parameter is bound to a non-empty value.
    pub fn params_valid(&self, params: &RouteParams) -> bool {
        self.param_names
            .iter()
            .all(|name| params.get(name).is_some_and(|value| !value.is_empty()))
    }

    /// Run the handler with the captured parameters.
    pub fn execute(&self, params: &RouteParams) -> Result<HttpResponse, RouterError> {
        (self.handler)(params).map_err(RouterError::Handler)
    }

    /// Build a concrete path by substituting `values` into the pattern.
    ///
    /// Every placeholder must have a value; static segments pass through
    /// untouched. Values are substituted verbatim.
    pub fn build_path(&self, values: &HashMap<String, String>) -> Result<String, RouterError> {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                RouteSegment::Static(text) => path.push_str(text),
                RouteSegment::Param(name) => match values.get(name) {
                    Some(value) => path.push_str(value),
                    None => {
                        return Err(RouterError::MissingParameter {
                            route_name: self.name.clone(),
                            name: name.clone(),
                        })
                    }
                },
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("normalized", &self.normalized)
            .field("name", &self.name)
            .field("param_names", &self.param_names)
            .finish_non_exhaustive()
    }
}
