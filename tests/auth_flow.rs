//! HTTP integration tests for the account flows: login, registration,
//! and logout.

mod common;

use actix_web::http::StatusCode;
use actix_web::{test, App};

use repo_manager::middleware::MethodOverride;
use repo_manager::models::RegisterForm;
use repo_manager::routes;
use repo_manager::session;

use common::{acting_as, body_string, create_user, flashed_errors, location, test_services};

macro_rules! init_app {
    ($auth:expr, $repositories:expr) => {
        test::init_service(
            App::new()
                .wrap(MethodOverride)
                .app_data($auth.clone())
                .app_data($repositories.clone())
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn login_form_renders() {
    let (auth, repositories) = test_services();
    let app = init_app!(auth, repositories);

    let req = test::TestRequest::get().uri("/login").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("name=\"email\""));
    assert!(body.contains("name=\"password\""));
}

#[actix_web::test]
async fn registered_user_can_log_in_and_reach_the_listing() {
    let (auth, repositories) = test_services();
    let app = init_app!(auth, repositories);

    auth.register(RegisterForm {
        name: "Test User".to_string(),
        email: "user@example.com".to_string(),
        password: "secret-password".to_string(),
        password_confirmation: "secret-password".to_string(),
    })
    .await
    .unwrap();

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form(&[
            ("email", "user@example.com"),
            ("password", "secret-password"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/repositories");

    let cookie = resp
        .response()
        .cookies()
        .find(|cookie| cookie.name() == session::SESSION_COOKIE)
        .expect("session cookie is set");

    // The issued session actually opens the listing.
    let req = test::TestRequest::get()
        .uri("/repositories")
        .cookie(cookie.into_owned())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn login_with_wrong_password_bounces_back_with_an_error() {
    let (auth, repositories) = test_services();
    let app = init_app!(auth, repositories);

    auth.register(RegisterForm {
        name: "Test User".to_string(),
        email: "user@example.com".to_string(),
        password: "secret-password".to_string(),
        password_confirmation: "secret-password".to_string(),
    })
    .await
    .unwrap();

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form(&[("email", "user@example.com"), ("password", "wrong")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/login");
    assert!(flashed_errors(&resp).contains_key("email"));
}

#[actix_web::test]
async fn registration_creates_the_account_and_signs_in() {
    let (auth, repositories) = test_services();
    let app = init_app!(auth, repositories);

    let req = test::TestRequest::post()
        .uri("/register")
        .set_form(&[
            ("name", "New User"),
            ("email", "new@example.com"),
            ("password", "secret-password"),
            ("password_confirmation", "secret-password"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/repositories");
    assert!(resp
        .response()
        .cookies()
        .any(|cookie| cookie.name() == session::SESSION_COOKIE));

    let stored = auth.store().find_by_email("new@example.com").await.unwrap();
    assert!(stored.is_some());
}

#[actix_web::test]
async fn registration_rejects_a_mismatched_confirmation() {
    let (auth, repositories) = test_services();
    let app = init_app!(auth, repositories);

    let req = test::TestRequest::post()
        .uri("/register")
        .set_form(&[
            ("name", "New User"),
            ("email", "new@example.com"),
            ("password", "secret-password"),
            ("password_confirmation", "different-password"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/register");
    assert!(flashed_errors(&resp).contains_key("password"));

    let stored = auth.store().find_by_email("new@example.com").await.unwrap();
    assert!(stored.is_none());
}

#[actix_web::test]
async fn registration_rejects_a_duplicate_email() {
    let (auth, repositories) = test_services();
    let app = init_app!(auth, repositories);

    create_user(&auth, "taken@example.com").await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_form(&[
            ("name", "New User"),
            ("email", "taken@example.com"),
            ("password", "secret-password"),
            ("password_confirmation", "secret-password"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/register");
    assert!(flashed_errors(&resp).contains_key("email"));
}

#[actix_web::test]
async fn logout_clears_the_session_and_redirects_to_login() {
    let (auth, repositories) = test_services();
    let app = init_app!(auth, repositories);

    let user = create_user(&auth, "user@example.com").await;
    let req = test::TestRequest::post()
        .uri("/logout")
        .cookie(acting_as(&user))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/login");

    let cleared = resp
        .response()
        .cookies()
        .find(|cookie| cookie.name() == session::SESSION_COOKIE)
        .expect("session cookie is cleared");
    assert_eq!(cleared.value(), "");
}

#[actix_web::test]
async fn root_path_forwards_to_the_listing() {
    let (auth, repositories) = test_services();
    let app = init_app!(auth, repositories);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/repositories");
}
