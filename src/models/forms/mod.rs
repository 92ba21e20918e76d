//! Form payloads submitted by the browser.

pub mod auth;
pub mod repository;

pub use auth::*;
pub use repository::*;
