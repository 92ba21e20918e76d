//! Authentication handlers: login, registration, and logout.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use log::info;
use validator::Validate;

use crate::constants::{LOGIN_PATH, REGISTER_PATH, REPOSITORIES_PATH};
use crate::errors::AppError;
use crate::models::{LoginForm, RegisterForm};
use crate::services::auth_service::generate_token;
use crate::services::AuthService;
use crate::session;
use crate::utils::mask_email;
use crate::validators::{validate_password_match, validation_errors_to_flash};
use crate::views;

const HTML: &str = "text/html; charset=utf-8";

/// Render the login form.
pub async fn login_form(req: HttpRequest) -> HttpResponse {
    let errors = session::flash_errors(&req);
    HttpResponse::Ok()
        .content_type(HTML)
        .cookie(session::forget_errors_cookie())
        .body(views::auth::login(&errors))
}

/// Authenticate and open a session.
pub async fn login(
    auth_service: web::Data<AuthService>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()
        .map_err(|e| validation_errors_to_flash(e, LOGIN_PATH))?;

    let (user, token) = auth_service.login(form.into_inner()).await?;
    info!("Session opened for {}", mask_email(&user.email));

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, REPOSITORIES_PATH))
        .cookie(session::auth_cookie(&token))
        .finish())
}

/// Render the registration form.
pub async fn register_form(req: HttpRequest) -> HttpResponse {
    let errors = session::flash_errors(&req);
    HttpResponse::Ok()
        .content_type(HTML)
        .cookie(session::forget_errors_cookie())
        .body(views::auth::register(&errors))
}

/// Create an account and sign the new user in.
pub async fn register(
    auth_service: web::Data<AuthService>,
    form: web::Form<RegisterForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()
        .map_err(|e| validation_errors_to_flash(e, REGISTER_PATH))?;
    validate_password_match(&form.password, &form.password_confirmation, REGISTER_PATH)?;

    let user = auth_service.register(form.into_inner()).await?;
    let token = generate_token(&user)?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, REPOSITORIES_PATH))
        .cookie(session::auth_cookie(&token))
        .finish())
}

/// Close the session.
pub async fn logout() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, LOGIN_PATH))
        .cookie(session::forget_auth_cookie())
        .finish()
}

/// The root path just forwards to the listing; the auth gate takes it
/// from there.
pub async fn home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, REPOSITORIES_PATH))
        .finish()
}
