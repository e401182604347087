use crate::routing::HttpMethod;
use thiserror::Error;

/// Errors raised by handlers, carried through dispatch untranslated.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Domain error type for router operations.
///
/// Every variant is a programmer/configuration error or a request-shape
/// mismatch, surfaced synchronously to the caller of the triggering
/// operation. Nothing here is transient or retryable, and nothing is caught
/// internally; translating these into wire statuses is the hosting
/// application's job.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Registration or request used a method outside the supported set.
    #[error("unsupported request method: {method}")]
    UnsupportedMethod { method: String },
    /// A route with the same normalized pattern already exists for this method.
    #[error("duplicate route: {method} {pattern} is already registered")]
    DuplicateRoute { method: HttpMethod, pattern: String },
    /// The pattern failed compilation at registration time.
    #[error("invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    /// Resolution found no route matching the request.
    #[error("no route found for {method} {path}")]
    RouteNotFound { method: HttpMethod, path: String },
    /// Reverse lookup found no GET route with the given name.
    #[error("no GET route named {name:?}")]
    UnknownRouteName { name: String },
    /// A structurally matched route's bound parameters failed validation.
    #[error("invalid parameters for route {pattern}: {name:?} is empty or unbound")]
    InvalidRouteParameters { pattern: String, name: String },
    /// Reverse lookup was not given a value for every pattern token.
    #[error("redirect to {route_name:?} needs parameter {name:?}")]
    MissingParameter { route_name: String, name: String },
    /// A handler failed; the underlying error is preserved as-is.
    #[error("handler error: {0}")]
    Handler(HandlerError),
}
