use crate::errors::RouterError;
use crate::request::HttpRequest;
use crate::response::{redirect_response, HttpResponse};
use crate::routing::types::{Handler, HandlerResult, HttpMethod, Route, RouteParams};
use std::collections::HashMap;

/// Registry of routes and the dispatcher over them.
///
/// Routes are grouped per method and kept in registration order; the first
/// route whose pattern matches a request path wins. Registering two routes
/// whose normalized patterns coincide under the same method is an error.
pub struct Router {
    routes: HashMap<HttpMethod, Vec<Route>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Register a route named after its normalized pattern.
    pub fn add_route(
        &mut self,
        method: &str,
        pattern: &str,
        handler: impl Fn(&RouteParams) -> HandlerResult + Send + Sync + 'static,
    ) -> Result<&Route, RouterError> {
        self.register(method, pattern, None, Box::new(handler))
    }

    /// Register a route under an explicit name for reverse lookup.
    pub fn add_route_named(
        &mut self,
        method: &str,
        pattern: &str,
        name: &str,
        handler: impl Fn(&RouteParams) -> HandlerResult + Send + Sync + 'static,
    ) -> Result<&Route, RouterError> {
        self.register(method, pattern, Some(name), Box::new(handler))
    }

    fn register(
        &mut self,
        method: &str,
        pattern: &str,
        name: Option<&str>,
        handler: Handler,
    ) -> Result<&Route, RouterError> {
        let method = HttpMethod::parse(method)?;
        let route = Route::new(pattern, name, handler)?;
        let duplicate = self.routes.get(&method).is_some_and(|routes| {
            routes
                .iter()
                .any(|existing| existing.normalized_pattern() == route.normalized_pattern())
        });
        if duplicate {
            return Err(RouterError::DuplicateRoute {
                method,
                pattern: route.normalized_pattern().to_string(),
            });
        }
        log::debug!("registered route {} {}", method, route.normalized_pattern());
        let routes = self.routes.entry(method).or_default();
        routes.push(route);
        let index = routes.len() - 1;
        Ok(&routes[index])
    }

    /// Dispatch a request to the first matching route.
    ///
    /// Walks the request method's routes in registration order and executes
    /// the first one whose pattern matches the path. A match with an empty
    /// or unbound parameter is rejected without trying later routes.
    pub fn resolve(&self, request: &HttpRequest) -> Result<HttpResponse, RouterError> {
        if let Some(routes) = self.routes.get(&request.method) {
            for route in routes {
                if let Some(params) = route.match_path(&request.path) {
                    if !route.params_valid(&params) {
                        return Err(RouterError::InvalidRouteParameters {
                            pattern: route.pattern().to_string(),
                            name: first_invalid_param(route, &params),
                        });
                    }
                    log::debug!(
                        "{} {} matched {}",
                        request.method,
                        request.path,
                        route.normalized_pattern()
                    );
                    return route.execute(&params);
                }
            }
        }
        log::warn!("no route for {} {}", request.method, request.path);
        Err(RouterError::RouteNotFound {
            method: request.method,
            path: request.path.clone(),
        })
    }

    /// Build a redirect response to the named GET route.
    ///
    /// Looks the route up by name, substitutes `query_params` into its
    /// pattern and returns a `302` response whose `Location` header carries
    /// the concrete path.
    pub fn redirect(
        &self,
        route_name: &str,
        query_params: &HashMap<String, String>,
    ) -> Result<HttpResponse, RouterError> {
        let target = self
            .routes
            .get(&HttpMethod::GET)
            .and_then(|routes| routes.iter().find(|route| route.name() == route_name));
        match target {
            Some(route) => {
                let location = route.build_path(query_params)?;
                log::debug!("redirecting to {route_name:?} at {location}");
                Ok(redirect_response(&location))
            }
            None => Err(RouterError::UnknownRouteName {
                name: route_name.to_string(),
            }),
        }
    }

    /// Routes registered under `method`, in registration order.
    pub fn routes(&self, method: HttpMethod) -> &[Route] {
        self.routes.get(&method).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

fn first_invalid_param(route: &Route, params: &RouteParams) -> String {
    route
        .param_names()
        .iter()
        .find(|name| params.get(name).map_or(true, str::is_empty))
        .cloned()
        .unwrap_or_default()
}
