//! Session authentication middleware for protected routes.

use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, ResponseError,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use log::debug;
use std::rc::Rc;

use crate::constants::ERR_INVALID_SESSION;
use crate::errors::AppError;
use crate::services::auth_service::decode_token;
use crate::session::SESSION_COOKIE;

/// Session authentication middleware.
///
/// This middleware validates the session cookie, decodes the claims,
/// and adds them to the request extensions. Requests without a valid
/// session are answered with a redirect to the login page before any
/// handler runs, so unauthenticated callers never see repository data.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            // Extract and validate the session cookie
            let claims = req
                .cookie(SESSION_COOKIE)
                .and_then(|cookie| decode_token(cookie.value()).ok());

            let claims = match claims {
                Some(claims) => claims,
                None => {
                    // No valid session: redirect to the login page
                    debug!("{}: {} {}", ERR_INVALID_SESSION, req.method(), req.path());
                    return Ok(req.into_response(AppError::Unauthenticated.error_response()));
                }
            };

            // Add claims to request extensions for use in handlers
            req.extensions_mut().insert(claims);

            let res = service.call(req).await?;
            Ok(res.map_into_boxed_body())
        })
    }
}
