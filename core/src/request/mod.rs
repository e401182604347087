pub mod parser;
pub mod types;

pub use parser::{parse_query_string, split_target};
pub use types::HttpRequest;
