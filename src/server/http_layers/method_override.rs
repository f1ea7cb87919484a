//! Lets plain HTML forms issue PUT and DELETE.
//!
//! A `POST` carrying `?_method=PUT` or `?_method=DELETE` is rewritten to that
//! method. Must wrap the router rather than be layered on it, since routes match
//! on the method.

use axum::{
    body::Body,
    extract::Query,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
struct MethodOverrideQuery {
    #[serde(rename = "_method")]
    method: Option<String>,
}

fn overridden_method(request: &Request<Body>) -> Option<Method> {
    if request.method() != Method::POST {
        return None;
    }
    let Query(query) = Query::<MethodOverrideQuery>::try_from_uri(request.uri()).ok()?;
    match query.method?.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

pub async fn method_override(mut request: Request<Body>, next: Next) -> Response {
    if let Some(method) = overridden_method(&request) {
        debug!("Overriding POST {} as {}", request.uri().path(), method);
        *request.method_mut() = method;
    }
    next.run(request).await
}
