//! Application error type, rendered entirely at the HTTP boundary.

use std::collections::BTreeMap;
use std::fmt;

use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use log::error;

use crate::constants::LOGIN_PATH;
use crate::session;
use crate::views;

#[derive(Debug)]
pub enum AppError {
    /// No valid session; the browser is sent to the login page.
    Unauthenticated,
    /// Authenticated caller does not own the resource.
    Forbidden(String),
    NotFound(String),
    /// Failed form validation: redirect back to the form with
    /// per-field messages flashed for the next render.
    Validation {
        redirect_to: String,
        errors: BTreeMap<String, Vec<String>>,
    },
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthenticated => write!(f, "Unauthenticated"),
            AppError::Forbidden(message) => write!(f, "Forbidden: {}", message),
            AppError::NotFound(message) => write!(f, "Not Found: {}", message),
            AppError::Validation { errors, .. } => {
                write!(f, "Validation failed: {:?}", errors)
            }
            AppError::Internal(message) => {
                write!(f, "Internal Server Error: {}", message)
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated | AppError::Validation { .. } => StatusCode::FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthenticated => HttpResponse::Found()
                .insert_header((header::LOCATION, LOGIN_PATH))
                .finish(),
            AppError::Forbidden(message) => HttpResponse::Forbidden()
                .content_type("text/html; charset=utf-8")
                .body(views::error_page(403, message)),
            AppError::NotFound(message) => HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(views::error_page(404, message)),
            AppError::Validation {
                redirect_to,
                errors,
            } => HttpResponse::Found()
                .insert_header((header::LOCATION, redirect_to.as_str()))
                .cookie(session::errors_cookie(errors))
                .finish(),
            AppError::Internal(message) => {
                error!("Internal server error: {}", message);
                HttpResponse::InternalServerError()
                    .content_type("text/html; charset=utf-8")
                    .body(views::error_page(500, "Something went wrong"))
            }
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(_: jsonwebtoken::errors::Error) -> Self {
        AppError::Unauthenticated
    }
}
