//! HTTP middleware.

pub mod auth_middleware;
pub mod method_override;
pub mod request_ext;

pub use auth_middleware::AuthMiddleware;
pub use method_override::MethodOverride;
pub use request_ext::RequestExt;
