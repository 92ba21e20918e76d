//! Browser form method override.
//!
//! HTML forms can only submit GET and POST. A POST carrying a
//! `_method` query parameter of PUT, PATCH, or DELETE is rewritten to
//! that verb before routing, which lets the rendered edit and delete
//! forms drive the real routes. Direct PUT/DELETE requests are
//! untouched.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    Error,
};
use futures::future::{ok, Ready};

pub struct MethodOverride;

impl<S, B> Transform<S, ServiceRequest> for MethodOverride
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = MethodOverrideService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(MethodOverrideService { service })
    }
}

pub struct MethodOverrideService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MethodOverrideService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        if req.method() == Method::POST {
            if let Some(method) = override_from_query(req.query_string()) {
                req.head_mut().method = method;
            }
        }
        self.service.call(req)
    }
}

/// Only POST may be overridden, and only to the write verbs a form
/// cannot express itself.
fn override_from_query(query: &str) -> Option<Method> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key != "_method" {
            return None;
        }
        match value.to_ascii_uppercase().as_str() {
            "PUT" => Some(Method::PUT),
            "PATCH" => Some(Method::PATCH),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_override_verbs() {
        assert_eq!(override_from_query("_method=DELETE"), Some(Method::DELETE));
        assert_eq!(override_from_query("_method=put"), Some(Method::PUT));
        assert_eq!(
            override_from_query("a=1&_method=PATCH&b=2"),
            Some(Method::PATCH)
        );
    }

    #[test]
    fn ignores_everything_else() {
        assert_eq!(override_from_query(""), None);
        assert_eq!(override_from_query("_method=GET"), None);
        assert_eq!(override_from_query("_method=TRACE"), None);
        assert_eq!(override_from_query("method=DELETE"), None);
    }
}
