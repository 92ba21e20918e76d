//! Web application for managing per-user repository records.
//!
//! Guests are redirected to the login page; authenticated users can
//! list, view, create, edit, update, and delete the repository records
//! they own. Ownership is enforced by `policies::repository_policy`
//! before any validation or mutation.

pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod policies;
pub mod routes;
pub mod services;
pub mod session;
pub mod stores;
pub mod utils;
pub mod validators;
pub mod views;
