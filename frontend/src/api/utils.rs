use gloo_net::http::{Request, RequestBuilder};

use crate::storage::session_store;

/// Adds the session token from the auth cookie, when there is one.
fn authenticated(req: RequestBuilder) -> RequestBuilder {
    match session_store().token() {
        Some(token) => with_bearer(req, &token),
        None => req,
    }
}

pub fn with_bearer(req: RequestBuilder, token: &str) -> RequestBuilder {
    req.header("Authorization", &format!("Bearer {}", token))
}

pub fn authenticated_get(url: &str) -> RequestBuilder {
    authenticated(Request::get(url))
}

pub fn authenticated_post(url: &str) -> RequestBuilder {
    authenticated(Request::post(url))
}

pub fn authenticated_put(url: &str) -> RequestBuilder {
    authenticated(Request::put(url))
}

pub fn authenticated_delete(url: &str) -> RequestBuilder {
    authenticated(Request::delete(url))
}
