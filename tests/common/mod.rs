//! Shared helpers for the HTTP integration tests: in-memory service
//! wiring, record factories, and a session-cookie `acting_as` helper.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::{test, web};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;

use repo_manager::models::{Repository, User};
use repo_manager::services::auth_service::generate_token;
use repo_manager::services::{AuthService, RepositoryService};
use repo_manager::session;
use repo_manager::stores::{
    InMemoryRepositoryStore, InMemoryUserStore, RepositoryStore, UserStore,
};

/// Fresh services over empty in-memory stores, one pair per test.
pub fn test_services() -> (web::Data<AuthService>, web::Data<RepositoryService>) {
    let users: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
    let repositories: Arc<dyn RepositoryStore> = Arc::new(InMemoryRepositoryStore::new());
    (
        web::Data::new(AuthService::with_store(users)),
        web::Data::new(RepositoryService::with_store(repositories)),
    )
}

/// Factory: persist a user. The stored hash is a placeholder; tests
/// that exercise login go through `AuthService::register` instead.
pub async fn create_user(auth: &AuthService, email: &str) -> User {
    let now = DateTime::now();
    let user = User {
        id: None,
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: "not-a-real-hash".to_string(),
        created_at: now,
        updated_at: now,
    };
    let id = auth.store().insert(&user).await.expect("insert user");
    User {
        id: Some(id),
        ..user
    }
}

/// Factory: persist a repository owned by the given user.
pub async fn create_repository(repositories: &RepositoryService, owner: &User) -> Repository {
    let now = DateTime::now();
    let repository = Repository {
        id: None,
        url: format!("https://example.com/{}", ObjectId::new().to_hex()),
        description: "A test repository".to_string(),
        user_id: owner.id.expect("owner must be persisted"),
        created_at: now,
        updated_at: now,
    };
    let id = repositories
        .store()
        .insert(&repository)
        .await
        .expect("insert repository");
    Repository {
        id: Some(id),
        ..repository
    }
}

/// Session cookie for the given user (the acting-as helper).
pub fn acting_as(user: &User) -> Cookie<'static> {
    let token = generate_token(user).expect("generate session token");
    session::auth_cookie(&token)
}

/// The Location header of a redirect response.
pub fn location(resp: &ServiceResponse) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Validation errors flashed on the response, keyed by field.
pub fn flashed_errors(resp: &ServiceResponse) -> BTreeMap<String, Vec<String>> {
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == session::FLASH_ERRORS_COOKIE)
        .map(|cookie| session::decode_errors(cookie.value()))
        .unwrap_or_default()
}

/// Response body as a UTF-8 string.
pub async fn body_string(resp: ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body is valid utf-8")
}
