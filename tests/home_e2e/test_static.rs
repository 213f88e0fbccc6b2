//! E2E tests: static assets linked from the page layout.

use actix_web::http::header;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_app_js_served_without_session() {
    let app = create_test_app(test_session_settings(), shipped_templates()).await;
    let (status, headers, body) = get_page(&app, "/static/app.js", None).await;

    assert_eq!(status, 200);
    let content_type = headers.get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.contains("javascript"), "got {}", content_type);
    assert!(body.contains("mobile-menu"));
}

#[actix_rt::test]
async fn test_stylesheet_served() {
    let app = create_test_app(test_session_settings(), shipped_templates()).await;
    let (status, _, body) = get_page(&app, "/static/style.css", None).await;

    assert_eq!(status, 200);
    assert!(body.contains(".navbar"));
}

#[actix_rt::test]
async fn test_unknown_asset_is_404() {
    let app = create_test_app(test_session_settings(), shipped_templates()).await;
    let (status, _, _) = get_page(&app, "/static/nope.js", None).await;

    assert_eq!(status, 404);
}

#[actix_rt::test]
async fn test_missing_static_dir_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-dir");
    let app =
        create_test_app_with_static(test_session_settings(), shipped_templates(), missing).await;

    let (status, _, _) = get_page(&app, "/static/app.js", None).await;
    assert_eq!(status, 404);

    let (status, _, body) = get_page(&app, "/home", Some(session_for("alice"))).await;
    assert_eq!(status, 200);
    assert!(body.contains("alice"));
}
