//! Request extension trait for extracting session claims.

use actix_web::HttpMessage;

use crate::models::Claims;

/// Extension trait for reading the authenticated user's claims that
/// the AuthMiddleware added to the request.
pub trait RequestExt {
    /// Returns `Some(Claims)` if the request was authenticated,
    /// or `None` if no claims are present.
    fn get_claims(&self) -> Option<Claims>;
}

impl RequestExt for actix_web::HttpRequest {
    fn get_claims(&self) -> Option<Claims> {
        self.extensions().get::<Claims>().cloned()
    }
}
