use std::collections::HashMap;

/// A response produced by a handler or by the router itself.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Empty,
    Json(serde_json::Value),
    Text(String),
    Binary(Vec<u8>),
}

impl HttpResponse {
    /// Build a response with `Content-Type` chosen from the body kind.
    pub fn new(status: u16, body: ResponseBody) -> Self {
        let mut headers = HashMap::new();
        match &body {
            ResponseBody::Json(_) => {
                headers.insert("Content-Type".to_string(), "application/json".to_string());
            }
            ResponseBody::Text(_) => {
                headers.insert("Content-Type".to_string(), "text/plain".to_string());
            }
            ResponseBody::Binary(_) => {
                headers.insert(
                    "Content-Type".to_string(),
                    "application/octet-stream".to_string(),
                );
            }
            ResponseBody::Empty => {}
        }
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}
