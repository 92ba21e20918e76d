//! Error message constants used throughout the application.

// Authentication errors
pub const ERR_AUTH_REQUIRED: &str = "Authentication required";
pub const ERR_INVALID_SESSION: &str = "Invalid or expired session";
pub const ERR_INVALID_CREDENTIALS: &str = "These credentials do not match our records.";
pub const ERR_EMAIL_TAKEN: &str = "The email has already been taken.";
pub const ERR_PASSWORD_MISMATCH: &str = "The password confirmation does not match.";

// Repository errors
pub const ERR_REPOSITORY_NOT_FOUND: &str = "Repository not found";
pub const ERR_NOT_REPOSITORY_OWNER: &str = "You do not own this repository";
