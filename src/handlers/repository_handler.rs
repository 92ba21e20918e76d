//! Repository CRUD handlers.
//!
//! Every handler receives the authenticated user's claims explicitly
//! (via request extensions set by the auth middleware) and runs the
//! ownership policy before validating or touching any existing record.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, info, warn};
use validator::Validate;

use crate::constants::{
    repository_edit_path, ERR_AUTH_REQUIRED, ERR_NOT_REPOSITORY_OWNER, MSG_REPOSITORY_CREATED,
    MSG_REPOSITORY_DELETED, MSG_REPOSITORY_UPDATED, REPOSITORIES_PATH, REPOSITORY_CREATE_PATH,
};
use crate::errors::AppError;
use crate::middleware::RequestExt;
use crate::models::{Claims, Repository, RepositoryForm};
use crate::policies::repository_policy;
use crate::services::RepositoryService;
use crate::session;
use crate::validators::validation_errors_to_flash;
use crate::views;

const HTML: &str = "text/html; charset=utf-8";

/// List the current user's repositories.
pub async fn index(
    repository_service: web::Data<RepositoryService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let claims = current_claims(&req)?;
    let owner = claims.user_id()?;

    let repositories = repository_service.list_for_owner(owner).await?;
    debug!(
        "Listing {} repositories for user {}",
        repositories.len(),
        claims.sub
    );

    let status = session::flash_status(&req);
    Ok(HttpResponse::Ok()
        .content_type(HTML)
        .cookie(session::forget_status_cookie())
        .body(views::repositories::index(&repositories, status.as_deref())))
}

/// Render the create form, including any flashed validation errors.
pub async fn create_form(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let errors = session::flash_errors(&req);
    Ok(HttpResponse::Ok()
        .content_type(HTML)
        .cookie(session::forget_errors_cookie())
        .body(views::repositories::create_form(&errors)))
}

/// Persist a new repository owned by the current user.
pub async fn store(
    repository_service: web::Data<RepositoryService>,
    form: web::Form<RepositoryForm>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let claims = current_claims(&req)?;
    let owner = claims.user_id()?;

    form.validate()
        .map_err(|e| validation_errors_to_flash(e, REPOSITORY_CREATE_PATH))?;

    let repository = repository_service.create(owner, form.into_inner()).await?;
    info!(
        "User {} created repository {}",
        claims.sub,
        repository.id_hex()
    );

    Ok(redirect_with_status(REPOSITORIES_PATH, MSG_REPOSITORY_CREATED))
}

/// Show a single repository.
pub async fn show(
    repository_service: web::Data<RepositoryService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let claims = current_claims(&req)?;
    let repository = repository_service.get(&path.into_inner()).await?;
    authorize(&claims, &repository)?;

    Ok(HttpResponse::Ok()
        .content_type(HTML)
        .body(views::repositories::show(&repository)))
}

/// Render the edit form pre-filled with the record's current values.
pub async fn edit_form(
    repository_service: web::Data<RepositoryService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let claims = current_claims(&req)?;
    let repository = repository_service.get(&path.into_inner()).await?;
    authorize(&claims, &repository)?;

    let errors = session::flash_errors(&req);
    Ok(HttpResponse::Ok()
        .content_type(HTML)
        .cookie(session::forget_errors_cookie())
        .body(views::repositories::edit_form(&repository, &errors)))
}

/// Update a repository. Ownership is checked before validation: a
/// non-owner gets a 403 even for an invalid submission.
pub async fn update(
    repository_service: web::Data<RepositoryService>,
    path: web::Path<String>,
    form: web::Form<RepositoryForm>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let claims = current_claims(&req)?;
    let repository = repository_service.get(&path.into_inner()).await?;
    authorize(&claims, &repository)?;

    let edit_path = repository_edit_path(&repository.id_hex());
    form.validate()
        .map_err(|e| validation_errors_to_flash(e, &edit_path))?;

    repository_service
        .update(&repository, form.into_inner())
        .await?;
    info!(
        "User {} updated repository {}",
        claims.sub,
        repository.id_hex()
    );

    Ok(redirect_with_status(&edit_path, MSG_REPOSITORY_UPDATED))
}

/// Delete a repository.
pub async fn destroy(
    repository_service: web::Data<RepositoryService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let claims = current_claims(&req)?;
    let repository = repository_service.get(&path.into_inner()).await?;
    authorize(&claims, &repository)?;

    repository_service.delete(&repository).await?;
    info!(
        "User {} deleted repository {}",
        claims.sub,
        repository.id_hex()
    );

    Ok(redirect_with_status(REPOSITORIES_PATH, MSG_REPOSITORY_DELETED))
}

fn current_claims(req: &HttpRequest) -> Result<Claims, AppError> {
    req.get_claims().ok_or_else(|| {
        warn!("{}", ERR_AUTH_REQUIRED);
        AppError::Unauthenticated
    })
}

/// Ownership gate. Denial carries no field values, so nothing leaks to
/// a non-owner.
fn authorize(claims: &Claims, repository: &Repository) -> Result<(), AppError> {
    let user_id = claims.user_id()?;
    if !repository_policy::can_manage(&user_id, repository) {
        warn!(
            "User {} denied access to repository {}",
            claims.sub,
            repository.id_hex()
        );
        return Err(AppError::Forbidden(ERR_NOT_REPOSITORY_OWNER.to_string()));
    }
    Ok(())
}

fn redirect_with_status(location: &str, status: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .cookie(session::status_cookie(status))
        .finish()
}
