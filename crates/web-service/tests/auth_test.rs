mod common;

use axum::http::{Method, StatusCode};
use common::{
    admin_token, date, guest_token, make_test_app, send, MemoryStore, ADMIN_ID, ADMIN_PASSWORD, GUEST_PASSWORD,
};
use serde_json::json;
use web_service::services::auth::seed_accounts;

#[tokio::test]
async fn admin_routes_require_a_token() {
    let (app, _) = make_test_app(MemoryStore::new(), date(2024, 12, 31));

    for uri in [
        "/api/internships",
        "/api/admin/internships/filter",
        "/api/admin/analytics",
        "/api/admin/students",
        "/api/admin/feedbacks",
        "/api/admin/dashboard-stats",
        "/guest/dashboard",
    ] {
        let (status, _, _) = send(&app, Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }

    let (status, _, _) = send(&app, Method::GET, "/api/admin/analytics", Some("not-a-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn guest_token_is_forbidden_on_admin_routes() {
    let (app, state) = make_test_app(MemoryStore::new(), date(2024, 12, 31));
    let token = guest_token(&state);

    let (status, _, _) = send(&app, Method::GET, "/api/admin/analytics", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _, _) = send(&app, Method::GET, "/guest/dashboard", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = send(&app, Method::GET, "/guest/dashboard", Some(&admin_token(&state)), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn seeded_accounts_can_log_in() {
    let (app, state) = make_test_app(MemoryStore::new(), date(2024, 12, 31));
    seed_accounts(&state).await.unwrap();
    // 重复初始化不会报错
    seed_accounts(&state).await.unwrap();

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/admin/login",
        None,
        Some(json!({ "adminId": ADMIN_ID, "password": ADMIN_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "admin");

    let admin = body["token"].as_str().unwrap().to_string();
    let (status, _, _) = send(&app, Method::GET, "/api/admin/dashboard-stats", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/guest/login",
        None,
        Some(json!({ "name": "Guest", "password": GUEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "guest");
}

#[tokio::test]
async fn bad_credentials_are_unauthorized() {
    let (app, state) = make_test_app(MemoryStore::new(), date(2024, 12, 31));
    seed_accounts(&state).await.unwrap();

    let (status, _, wrong_password) = send(
        &app,
        Method::POST,
        "/api/admin/login",
        None,
        Some(json!({ "adminId": ADMIN_ID, "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // 不存在的账号与密码错误的响应完全相同
    let (status, _, unknown_account) = send(
        &app,
        Method::POST,
        "/api/admin/login",
        None,
        Some(json!({ "adminId": "nobody", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_account, wrong_password);

    // 访客账号不能换取管理员token
    let (status, _, _) = send(
        &app,
        Method::POST,
        "/api/admin/login",
        None,
        Some(json!({ "adminId": "Guest", "password": GUEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _, _) = send(
        &app,
        Method::POST,
        "/guest/login",
        None,
        Some(json!({ "name": "nobody", "password": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn guest_dashboard_groups_ongoing_interns() {
    let store = MemoryStore::new();
    store.add_student("S1", Some("CSE"), Some("3-1"), Some("A"));
    store.add_student("S2", None, Some("2-1"), None);
    store.add_internship("S1", "Acme", date(2024, 12, 1), date(2025, 1, 31));
    store.add_internship("S2", "Beta", date(2024, 12, 31), date(2025, 1, 31));
    store.add_internship("S1", "Old Co", date(2023, 1, 1), date(2023, 2, 1));
    let (app, state) = make_test_app(store, date(2024, 12, 31));

    let (status, _, body) = send(&app, Method::GET, "/guest/dashboard", Some(&guest_token(&state)), None).await;
    assert_eq!(status, StatusCode::OK);

    let cse = &body["categorized"]["CSE"]["A"];
    assert_eq!(cse.as_array().unwrap().len(), 1);
    assert_eq!(cse[0]["organizationName"], "Acme");
    assert_eq!(body["categorized"]["Unknown"]["Unknown"][0]["rollNumber"], "S2");
}
