use crate::response::types::{HttpResponse, ResponseBody};

pub fn serialize_json_response(value: &serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap_or_default()
}

pub fn serialize_response_body(body: &ResponseBody) -> Vec<u8> {
    match body {
        ResponseBody::Empty => vec![],
        ResponseBody::Json(value) => serialize_json_response(value),
        ResponseBody::Text(text) => text.as_bytes().to_vec(),
        ResponseBody::Binary(data) => data.clone(),
    }
}

/// A JSON response with the given status.
pub fn json_response(status: u16, value: serde_json::Value) -> HttpResponse {
    HttpResponse::new(status, ResponseBody::Json(value))
}

/// A `302 Found` pointing at `location`.
pub fn redirect_response(location: &str) -> HttpResponse {
    HttpResponse::new(302, ResponseBody::Empty).with_header("Location", location)
}
