use crate::errors::RouterError;
use crate::request::parser::{parse_query_string, split_target};
use crate::routing::HttpMethod;
use std::collections::HashMap;

/// An incoming request reduced to what routing needs.
///
/// `path` is the raw, undecoded request path; percent-encoding is left to
/// the handler. Query parameters are decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query_params: HashMap<String, String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query_params: HashMap::new(),
        }
    }

    /// Build a request from a method token and a request target such as
    /// `/users/42?tab=posts`.
    pub fn from_target(method: &str, target: &str) -> Result<Self, RouterError> {
        let method = HttpMethod::parse(method)?;
        let (path, query) = split_target(target);
        Ok(Self {
            method,
            path: path.to_string(),
            query_params: parse_query_string(query),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_target_splits_path_and_query() {
        let request = HttpRequest::from_target("get", "/users/42?tab=posts").unwrap();
        assert_eq!(request.method, HttpMethod::GET);
        assert_eq!(request.path, "/users/42");
        assert_eq!(request.query_params.get("tab"), Some(&"posts".to_string()));
    }

    #[test]
    fn test_from_target_without_query() {
        let request = HttpRequest::from_target("POST", "/users").unwrap();
        assert_eq!(request.method, HttpMethod::POST);
        assert_eq!(request.path, "/users");
        assert!(request.query_params.is_empty());
    }

    #[test]
    fn test_from_target_rejects_unknown_method() {
        let err = HttpRequest::from_target("PATCH", "/users").unwrap_err();
        assert!(matches!(err, RouterError::UnsupportedMethod { .. }));
    }

    #[test]
    fn test_path_stays_raw() {
        let request = HttpRequest::from_target("GET", "/files/a%20b").unwrap();
        assert_eq!(request.path, "/files/a%20b");
    }
}
