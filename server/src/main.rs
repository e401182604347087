//! # LIGHTROUTE SERVER
//!
//! **STANDALONE HTTP HOST FOR THE ROUTER**
//!
//! Serves a demo route table over HTTP/1 and translates router errors into
//! wire statuses. `GET /go/<name>?param=value` answers with the redirect the
//! named route resolves to.

use http_body_util::Full;
use hyper::header::{HeaderName, HeaderValue};
use hyper::service::service_fn;
use hyper::{body::Bytes, body::Incoming, Request, Response, StatusCode};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder;
use lightroute::api::*;
use lightroute::response::serialize_response_body;
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::net::TcpListener;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

fn build_router() -> Result<Router, RouterError> {
    let mut router = Router::new();
    router.add_route("GET", "/", |_params| {
        Ok(json_response(
            200,
            json!({ "service": "lightroute", "status": "running" }),
        ))
    })?;
    router.add_route("GET", "/health", |_params| {
        Ok(json_response(200, json!({ "status": "ok" })))
    })?;
    router.add_route_named("GET", "/users/:id", "showUser", |params| {
        Ok(json_response(
            200,
            json!({ "user": params.get("id"), "params": params }),
        ))
    })?;
    router.add_route("GET", "/users/:id/posts/:post_id", |params| {
        Ok(json_response(
            200,
            json!({
                "user": params.get("id"),
                "post": params.get("post_id"),
            }),
        ))
    })?;
    router.add_route("POST", "/users", |_params| {
        Ok(json_response(201, json!({ "created": true })))
    })?;
    Ok(router)
}

/// Route a raw method/target pair through the router.
///
/// `GET /go/<name>` is the host's redirect endpoint: the rest of the path
/// names the route, the query string supplies its parameters. Everything
/// else goes through normal resolution.
fn dispatch(router: &Router, method: &str, target: &str) -> Result<HttpResponse, RouterError> {
    let request = HttpRequest::from_target(method, target)?;
    if request.method == HttpMethod::GET {
        if let Some(name) = request.path.strip_prefix("/go/") {
            return router.redirect(name, &request.query_params);
        }
    }
    router.resolve(&request)
}

fn error_status(error: &RouterError) -> u16 {
    match error {
        RouterError::RouteNotFound { .. } | RouterError::UnknownRouteName { .. } => 404,
        RouterError::UnsupportedMethod { .. } => 405,
        RouterError::InvalidRouteParameters { .. } | RouterError::MissingParameter { .. } => 422,
        RouterError::DuplicateRoute { .. }
        | RouterError::InvalidPattern { .. }
        | RouterError::Handler(_) => 500,
    }
}

fn error_response(error: &RouterError) -> HttpResponse {
    json_response(error_status(error), json!({ "detail": error.to_string() }))
}

fn to_wire(response: &HttpResponse) -> Response<Full<Bytes>> {
    let mut wire = Response::new(Full::from(serialize_response_body(&response.body)));
    *wire.status_mut() =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    for (name, value) in &response.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                wire.headers_mut().insert(name, value);
            }
            _ => log::warn!("dropping unencodable header {name}: {value}"),
        }
    }
    wire
}

async fn handle_request(
    req: Request<Incoming>,
    router: Arc<Router>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().as_str().to_string();
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());

    let response = match dispatch(&router, &method, &target) {
        Ok(response) => response,
        Err(error) => {
            log::warn!("{method} {target} failed: {error}");
            error_response(&error)
        }
    };
    Ok(to_wire(&response))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let router = Arc::new(build_router()?);
    let listener = TcpListener::bind(&addr).await?;
    log::info!("listening on {addr}");

    let builder = Builder::new(TokioExecutor::new());
    loop {
        let (stream, remote) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                log::error!("accept error: {e}");
                continue;
            }
        };
        let router = router.clone();
        let builder = builder.clone();
        tokio::spawn(async move {
            let io = TokioIo::new(stream);
            let service = service_fn(move |req| handle_request(req, router.clone()));
            if let Err(err) = builder.serve_connection(io, service).await {
                log::error!("connection error from {remote}: {err}");
            }
        });
    }
}
