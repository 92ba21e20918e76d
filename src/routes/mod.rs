use actix_web::web;

use crate::handlers;
use crate::middleware::AuthMiddleware;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(health_check))
        .route("/", web::get().to(handlers::home))
        // Account routes (public)
        .route("/login", web::get().to(handlers::login_form))
        .route("/login", web::post().to(handlers::login))
        .route("/register", web::get().to(handlers::register_form))
        .route("/register", web::post().to(handlers::register))
        .route("/logout", web::post().to(handlers::logout))
        // Repository routes (protected)
        .service(
            web::scope("/repositories")
                .wrap(AuthMiddleware)
                // Create form - must be before /{id} to avoid conflict
                .route("/create", web::get().to(handlers::create_form))
                .route("", web::get().to(handlers::index))
                .route("", web::post().to(handlers::store))
                .route("/{id}", web::get().to(handlers::show))
                .route("/{id}/edit", web::get().to(handlers::edit_form))
                .route("/{id}", web::put().to(handlers::update))
                .route("/{id}", web::delete().to(handlers::destroy)),
        );
}

async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": "Server is running"
    }))
}
