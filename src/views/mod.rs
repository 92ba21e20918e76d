//! Server-rendered HTML views.
//!
//! Markup is deliberately minimal: the values and forms the
//! controllers need, nothing more. All user-provided text is escaped.

pub mod auth;
pub mod layout;
pub mod repositories;

pub use layout::{error_page, escape};
