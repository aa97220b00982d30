//! Listing page, listing response mode, static serving and health.

mod common;

use axum::http::StatusCode;
use axum_test::multipart::MultipartForm;
use common::{file_part, single_file_form, spawn_app, summary_names};
use file_depot::domain::config::ResponseMode;
use serde_json::Value;

#[tokio::test]
async fn test_empty_listing() {
    let app = spawn_app(ResponseMode::Summary).await;

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("No files uploaded yet"));
    assert!(!html.contains("file-item"));
    assert!(!html.contains("class=\"message"));
}

#[tokio::test]
async fn test_listing_shows_previews() {
    let app = spawn_app(ResponseMode::Summary).await;
    std::fs::write(app.stored_path("a-notes.txt"), "hello listing").unwrap();
    std::fs::write(app.stored_path("b-shot.PNG"), vec![0u8; 3000]).unwrap();
    std::fs::write(app.stored_path("c-doc.pdf"), b"%PDF").unwrap();

    let html = app.server.get("/").await.text();

    assert!(html.contains("<pre>hello listing...</pre>"));
    assert!(html.contains(r#"<img src="/uploads/b-shot.PNG""#));
    assert!(html.contains("<strong>b-shot.PNG</strong> (3 KB)"));
    assert!(html.contains(r#"href="/delete/c-doc.pdf""#));

    let a = html.find("a-notes.txt").unwrap();
    let b = html.find("b-shot.PNG").unwrap();
    let c = html.find("c-doc.pdf").unwrap();
    assert!(a < b && b < c);
}

#[tokio::test]
async fn test_message_banner_styling() {
    let app = spawn_app(ResponseMode::Summary).await;

    let ok = app
        .server
        .get("/?message=File%20deleted%20successfully")
        .await
        .text();
    assert!(ok.contains(r#"<div class="message success">File deleted successfully</div>"#));

    let err = app
        .server
        .get("/?message=Error%20deleting%20file")
        .await
        .text();
    assert!(err.contains(r#"<div class="message error">Error deleting file</div>"#));
}

#[tokio::test]
async fn test_malformed_query_renders_error_page() {
    let app = spawn_app(ResponseMode::Summary).await;

    let response = app.server.get("/?message=a&message=b").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.header("content-type"), "text/html; charset=utf-8");
    assert!(response.text().contains("Back to upload form"));
}

#[tokio::test]
async fn test_uploaded_file_is_served_inline() {
    let app = spawn_app(ResponseMode::Summary).await;
    let response = app
        .server
        .post("/upload")
        .multipart(single_file_form(vec![9u8; 64], "pic.jpg", "image/jpeg"))
        .await;
    let name = summary_names(&response.text()).remove(0);

    let inline = app.server.get(&format!("/uploads/{}", name)).await;

    assert_eq!(inline.status_code(), StatusCode::OK);
    assert_eq!(inline.as_bytes().as_ref(), vec![9u8; 64].as_slice());
}

#[tokio::test]
async fn test_listing_mode_redirects_after_upload() {
    let app = spawn_app(ResponseMode::Listing).await;
    let form = MultipartForm::new()
        .add_part("files", file_part(b"one".to_vec(), "one.txt", "text/plain"))
        .add_part("files", file_part(vec![0u8; 10], "two.png", "image/png"));

    let response = app.server.post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    let location = response.header("location").to_str().unwrap().to_string();
    assert!(location.starts_with("/?message=2%20file"));
    assert!(location.ends_with("uploaded%20successfully"));
    assert_eq!(app.stored_files().len(), 2);

    let html = app.server.get(&location).await.text();
    assert!(html.contains(r#"class="message success""#));
    assert!(html.contains("2 file(s) uploaded successfully"));
    assert!(html.contains("<pre>one...</pre>"));
    assert!(!html.contains("/upload-multiple"));
}

#[tokio::test]
async fn test_listing_mode_accepts_more_than_five_files() {
    let app = spawn_app(ResponseMode::Listing).await;
    let mut form = MultipartForm::new();
    for i in 0..7 {
        form = form.add_part(
            "files",
            file_part(b"x".to_vec(), &format!("{i}.txt"), "text/plain"),
        );
    }

    let response = app.server.post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(app.stored_files().len(), 7);
}

#[tokio::test]
async fn test_listing_mode_rejection_is_an_error_page() {
    let app = spawn_app(ResponseMode::Listing).await;
    let form = MultipartForm::new().add_part(
        "files",
        file_part(b"MZ".to_vec(), "notes.exe", "application/octet-stream"),
    );

    let response = app.server.post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_health_reports_configuration() {
    let app = spawn_app(ResponseMode::Summary).await;
    app.server
        .post("/upload")
        .multipart(single_file_form(b"hi".to_vec(), "hi.txt", "text/plain"))
        .await;

    let response = app.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storedFiles"], 1);
    assert_eq!(body["config"]["maxSize"], 5_242_880);
    assert_eq!(body["config"]["maxFiles"], 5);
    assert_eq!(body["config"]["responseMode"], "summary");
    assert_eq!(body["config"]["allowedMimeTypes"].as_array().unwrap().len(), 4);
}
