pub use crate::errors::{HandlerError, RouterError};
pub use crate::request::{parse_query_string, split_target, HttpRequest};
pub use crate::response::{json_response, redirect_response, HttpResponse, ResponseBody};
pub use crate::routing::{
    normalize_path, parse_route_pattern, HandlerResult, HttpMethod, Route, RouteParams, Router,
};
