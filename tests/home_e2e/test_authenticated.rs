//! E2E tests: logged-in callers see the welcome page.

use actix_web::http::header;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_root_renders_welcome_for_alice() {
    let app = create_test_app(test_session_settings(), shipped_templates()).await;
    let (status, headers, body) = get_page(&app, "/", Some(session_for("alice"))).await;

    assert_eq!(status, 200);
    assert!(body.contains("alice"), "body should greet alice: {}", body);
    let content_type = headers.get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"), "got {}", content_type);
}

#[actix_rt::test]
async fn test_home_renders_welcome_for_alice() {
    let app = create_test_app(test_session_settings(), shipped_templates()).await;
    let (status, _, body) = get_page(&app, "/home", Some(session_for("alice"))).await;

    assert_eq!(status, 200);
    assert!(body.contains("Welcome, alice!"));
}

#[actix_rt::test]
async fn test_both_paths_render_identically() {
    let app = create_test_app(test_session_settings(), shipped_templates()).await;
    let cookie = session_for("alice");

    let (root_status, _, root_body) = get_page(&app, "/", Some(cookie.clone())).await;
    let (home_status, _, home_body) = get_page(&app, "/home", Some(cookie)).await;

    assert_eq!(root_status, home_status);
    assert_eq!(root_body, home_body);
}

#[actix_rt::test]
async fn test_repeated_requests_render_same_name() {
    let app = create_test_app(test_session_settings(), shipped_templates()).await;
    let cookie = session_for("alice");

    let (_, _, first) = get_page(&app, "/home", Some(cookie.clone())).await;
    let (_, _, second) = get_page(&app, "/home", Some(cookie)).await;

    assert_eq!(first, second);
}

#[actix_rt::test]
async fn test_query_string_is_ignored() {
    let app = create_test_app(test_session_settings(), shipped_templates()).await;
    let (status, _, body) =
        get_page(&app, "/home?name=mallory", Some(session_for("alice"))).await;

    assert_eq!(status, 200);
    assert!(body.contains("alice"));
    assert!(!body.contains("mallory"));
}

#[actix_rt::test]
async fn test_each_session_sees_its_own_name() {
    let app = create_test_app(test_session_settings(), shipped_templates()).await;

    let (_, _, alice) = get_page(&app, "/home", Some(session_for("alice"))).await;
    let (_, _, bob) = get_page(&app, "/home", Some(session_for("bob"))).await;

    assert!(alice.contains("alice") && !alice.contains("bob"));
    assert!(bob.contains("bob") && !bob.contains("alice"));
}

#[actix_rt::test]
async fn test_username_is_html_escaped() {
    let app = create_test_app(test_session_settings(), shipped_templates()).await;
    let (status, _, body) = get_page(
        &app,
        "/home",
        Some(session_for("<script>alert(1)</script>")),
    )
    .await;

    assert_eq!(status, 200);
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;alert(1)"));
}
