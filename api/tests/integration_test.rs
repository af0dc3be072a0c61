//! End-to-end tests of the HTTP surface over in-memory repositories

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use serde_json::{json, Value};
use vb_api::{create_app, middleware::create_cors, AppState};
use vb_core::{
    domain::entities::user::{NewUser, Role},
    repositories::{MockUserRepository, MockVacationRepository, UserRepository},
    services::{CredentialHasher, TokenService, TokenServiceConfig},
};
use vb_shared::{Environment, ServerConfig};

const ADMIN_EMAIL: &str = "admin@vacations.test";
const ADMIN_PASSWORD: &str = "Admin1";

type State = AppState<MockUserRepository, MockVacationRepository>;

async fn build_state() -> web::Data<State> {
    let hasher = Arc::new(CredentialHasher::from_salt("integration-salt").unwrap());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new("integration-secret")));

    let users = Arc::new(MockUserRepository::new());
    users
        .insert(NewUser {
            first_name: "Site".to_string(),
            last_name: "Admin".to_string(),
            email: ADMIN_EMAIL.to_string(),
            password_digest: hasher.hash(ADMIN_PASSWORD),
            role: Role::Admin,
        })
        .await
        .unwrap();

    web::Data::new(AppState::new(
        users,
        Arc::new(MockVacationRepository::new()),
        hasher,
        tokens,
        ServerConfig::default(),
    ))
}

macro_rules! init_app {
    () => {{
        let state = build_state().await;
        let cors = create_cors(Environment::Development, &state.server);
        test::init_service(create_app(state, cors)).await
    }};
}

fn vacation_body(destination: &str) -> Value {
    json!({
        "destination": destination,
        "description": "A week of sun and sea",
        "startDate": "2099-07-01",
        "endDate": "2099-07-08",
        "price": 1500.0,
        "imageName": "beach.jpg"
    })
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

#[actix_web::test]
async fn test_health_check() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_register_then_browse_as_regular_user() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "a@b.com",
            "password": "Abcd1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let session: Value = test::read_body_json(resp).await;
    let token = session["token"].as_str().unwrap().to_string();
    assert_eq!(session["user"]["roleId"], 2);
    assert!(session["user"].get("password").is_none());

    let req = test::TestRequest::get()
        .uri("/api/vacations")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));

    let req = test::TestRequest::post()
        .uri("/api/vacations")
        .insert_header(bearer(&token))
        .set_json(vacation_body("Crete"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "You are not authorized.");
}

#[actix_web::test]
async fn test_protected_routes_require_token() {
    let app = init_app!();

    for uri in ["/api/vacations", "/api/vacations-valid", "/api/vacations-not-started", "/api/vacations/1"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[actix_web::test]
async fn test_admin_manages_vacations() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let session: Value = test::read_body_json(resp).await;
    assert_eq!(session["user"]["roleId"], 1);
    let token = session["token"].as_str().unwrap().to_string();

    // add
    let req = test::TestRequest::post()
        .uri("/api/vacations")
        .insert_header(bearer(&token))
        .set_json(vacation_body("Crete"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(
        created["imageUrl"],
        "http://localhost:4000/api/vacations/images/beach.jpg"
    );

    // public read
    let req = test::TestRequest::get()
        .uri(&format!("/api/vacation/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // edit without image keeps the stored one
    let mut edited = vacation_body("Rhodes");
    edited.as_object_mut().unwrap().remove("imageName");
    let req = test::TestRequest::put()
        .uri(&format!("/api/edit-vacation/{}", id))
        .insert_header(bearer(&token))
        .set_json(edited)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["destination"], "Rhodes");
    assert_eq!(body["imageName"], "beach.jpg");

    // toggle like on and off
    for (expected_liked, expected_count) in [(true, 1), (false, 0)] {
        let req = test::TestRequest::patch()
            .uri(&format!("/api/vacations/toggle-like/{}", id))
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["isLiked"], expected_liked);
        assert_eq!(body["likesCount"], expected_count);
    }

    // upcoming list contains it
    let req = test::TestRequest::get()
        .uri("/api/vacations-not-started")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // delete, then it is gone
    let req = test::TestRequest::delete()
        .uri(&format!("/api/vacation/{}", id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/vacation/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], format!("id {} not found.", id));
}

#[actix_web::test]
async fn test_login_failures_share_one_message() {
    let app = init_app!();

    for (email, password) in [(ADMIN_EMAIL, "Wrong1"), ("nobody@vacations.test", ADMIN_PASSWORD)] {
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": email, "password": password }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Incorrect email or password.");
    }
}

#[actix_web::test]
async fn test_register_rejections() {
    let app = init_app!();

    let taken = json!({
        "firstName": "Other",
        "lastName": "Admin",
        "email": ADMIN_EMAIL,
        "password": "Abcd1"
    });
    let req = test::TestRequest::post().uri("/api/register").set_json(taken).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email is already taken");

    let scripted = json!({
        "firstName": "<script>alert(1)</script>",
        "lastName": "Hacker",
        "email": "h@x.com",
        "password": "Abcd1"
    });
    let req = test::TestRequest::post().uri("/api/register").set_json(scripted).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Nice try!");

    let req = test::TestRequest::post()
        .uri("/api/register")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_unknown_route() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/nowhere").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Route /api/nowhere on method GET not exist.");
}
