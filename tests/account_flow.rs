mod common;

use std::sync::atomic::Ordering;

use account_service_backend::routes::configure_all_routes;
use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::{test, App};
use serde_json::{json, Value};

use common::{context, multipart_body, register_body};

#[actix_web::test]
async fn test_health_check() {
    let ctx = context();
    let app = test::init_service(App::new().app_data(ctx.registry.clone()).configure(configure_all_routes)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_register_returns_stripped_user() {
    let ctx = context();
    let app = test::init_service(App::new().app_data(ctx.registry.clone()).configure(configure_all_routes)).await;

    let (content_type, body) = register_body("JohnDoe", "John@Example.com");
    let req = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["statusCode"], 201);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["username"], "johndoe");
    assert_eq!(body["data"]["email"], "john@example.com");
    assert_eq!(body["data"]["fullName"], "John Doe");
    assert!(body["data"]["avatar"].as_str().unwrap().ends_with("avatar.png"));
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("refreshToken").is_none());
}

#[actix_web::test]
async fn test_register_validation_and_conflict() {
    let ctx = context();
    let app = test::init_service(App::new().app_data(ctx.registry.clone()).configure(configure_all_routes)).await;

    let (content_type, body) = register_body("johndoe", "john@example.com");
    let req = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .insert_header((header::CONTENT_TYPE, content_type.clone()))
        .set_payload(body.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    // 같은 사용자명/이메일
    let req = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["statusCode"], 409);
    assert_eq!(body["success"], false);

    // 아바타 누락
    let (content_type, body) = multipart_body(
        &[
            ("fullName", "Jane Doe"),
            ("username", "jane"),
            ("email", "jane@example.com"),
            ("password", "password123"),
        ],
        &[],
    );
    let req = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Avatar is required");

    // 필수 필드 누락
    let (content_type, body) = multipart_body(
        &[("username", "jane"), ("email", "jane@example.com")],
        &[("avatar", "a.png", &b"png"[..])],
    );
    let req = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "All fields are required");
}

#[actix_web::test]
async fn test_register_upload_failure_is_server_error() {
    let ctx = context();
    ctx.uploader.fail.store(true, Ordering::SeqCst);
    let app = test::init_service(App::new().app_data(ctx.registry.clone()).configure(configure_all_routes)).await;

    let (content_type, body) = register_body("johndoe", "john@example.com");
    let req = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(ctx.repo.is_empty());
}

#[actix_web::test]
async fn test_full_session_lifecycle() {
    let ctx = context();
    let app = test::init_service(App::new().app_data(ctx.registry.clone()).configure(configure_all_routes)).await;

    let (content_type, body) = register_body("johndoe", "john@example.com");
    let req = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    // 로그인
    let req = test::TestRequest::post()
        .uri("/api/v1/users/login")
        .set_json(json!({ "username": "johndoe", "password": "password123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookies: Vec<Cookie<'static>> = resp.response().cookies().map(|c| c.into_owned()).collect();
    let access_cookie = cookies.iter().find(|c| c.name() == "accessToken").expect("accessToken cookie");
    assert_eq!(access_cookie.http_only(), Some(true));
    assert!(cookies.iter().any(|c| c.name() == "refreshToken"));

    let body: Value = test::read_body_json(resp).await;
    let access_token = body["data"]["accessToken"].as_str().unwrap().to_string();
    let refresh_token = body["data"]["refreshToken"].as_str().unwrap().to_string();
    assert_eq!(access_cookie.value(), access_token);
    assert!(body["data"]["user"].get("password").is_none());

    // Bearer 헤더로 현재 사용자 조회
    let req = test::TestRequest::get()
        .uri("/api/v1/users/current-user")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["username"], "johndoe");

    // 쿠키로 현재 사용자 조회
    let req = test::TestRequest::get()
        .uri("/api/v1/users/current-user")
        .cookie(Cookie::new("accessToken", access_token.clone()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // 토큰 갱신 (본문)
    let req = test::TestRequest::post()
        .uri("/api/v1/users/refresh-token")
        .set_json(json!({ "refreshToken": refresh_token }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let rotated_refresh = body["data"]["refreshToken"].as_str().unwrap().to_string();
    assert_ne!(rotated_refresh, refresh_token);

    // 사용된 리프레시 토큰 재사용
    let req = test::TestRequest::post()
        .uri("/api/v1/users/refresh-token")
        .set_json(json!({ "refreshToken": refresh_token }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);

    // 쿠키로 토큰 갱신
    let req = test::TestRequest::post()
        .uri("/api/v1/users/refresh-token")
        .cookie(Cookie::new("refreshToken", rotated_refresh.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let latest_refresh = body["data"]["refreshToken"].as_str().unwrap().to_string();

    // 로그아웃
    let req = test::TestRequest::post()
        .uri("/api/v1/users/logout")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cleared: Vec<Cookie<'static>> = resp.response().cookies().map(|c| c.into_owned()).collect();
    assert!(cleared.iter().all(|c| c.value().is_empty()));
    assert_eq!(cleared.len(), 2);

    // 로그아웃 이후 리프레시 불가
    let req = test::TestRequest::post()
        .uri("/api/v1/users/refresh-token")
        .set_json(json!({ "refreshToken": latest_refresh }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_login_errors() {
    let ctx = context();
    let app = test::init_service(App::new().app_data(ctx.registry.clone()).configure(configure_all_routes)).await;

    let (content_type, body) = register_body("johndoe", "john@example.com");
    let req = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    test::call_service(&app, req).await;

    let cases = [
        (json!({ "password": "password123" }), StatusCode::BAD_REQUEST),
        (json!({ "username": "nobody", "password": "password123" }), StatusCode::NOT_FOUND),
        (json!({ "email": "john@example.com", "password": "wrong" }), StatusCode::UNAUTHORIZED),
    ];

    for (payload, expected) in cases {
        let req = test::TestRequest::post()
            .uri("/api/v1/users/login")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }

    // 잘못된 JSON 본문
    let req = test::TestRequest::post()
        .uri("/api/v1/users/login")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_registered_password_keeps_surrounding_whitespace() {
    let ctx = context();
    let app = test::init_service(App::new().app_data(ctx.registry.clone()).configure(configure_all_routes)).await;

    let (content_type, body) = multipart_body(
        &[
            ("fullName", "John Doe"),
            ("username", "johndoe"),
            ("email", "john@example.com"),
            ("password", " pw "),
        ],
        &[("avatar", "avatar.png", &b"avatar"[..])],
    );
    let req = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/users/login")
        .set_json(json!({ "username": "johndoe", "password": "pw" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/v1/users/login")
        .set_json(json!({ "username": "johndoe", "password": " pw " }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}
