pub mod parser;
pub mod router;
pub mod types;

pub use parser::{normalize_path, parse_route_pattern, ParsedPattern};
pub use router::Router;
pub use types::{Handler, HandlerResult, HttpMethod, Route, RouteParams, RouteSegment};
