//! HTTP API integration tests for the enhancement endpoint.

use std::io::Cursor;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use clearx::{build_router, EnhanceOptions, ServerConfig};
use http_body_util::BodyExt;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "clearx-test-boundary";

fn sample_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| Rgb([(x * 9) as u8, (y * 13) as u8, 200]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img).write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

fn multipart_body(field: &str, file_name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn enhance_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/enhance")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn app_with(config: ServerConfig) -> Router {
    build_router(&config)
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_scale() {
    let app = app_with(ServerConfig::default());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "clearx");
    assert_eq!(json["scale"], 4);
}

#[tokio::test]
async fn enhance_returns_png_four_times_larger() {
    let app = app_with(ServerConfig::default());
    let body = multipart_body("file", "tile.png", "image/png", &sample_png(12, 8));

    let response = app.oneshot(enhance_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    assert!(response.headers().contains_key("x-request-id"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (48, 32));
}

#[tokio::test]
async fn enhance_honours_configured_scale() {
    let mut config = ServerConfig::default();
    config.enhance.scale = 2;
    let app = app_with(config);
    let body = multipart_body("file", "tile.png", "image/png", &sample_png(10, 10));

    let response = app.oneshot(enhance_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (20, 20));
}

#[tokio::test]
async fn missing_file_field_is_bad_request() {
    let app = app_with(ServerConfig::default());
    let body = multipart_body("image", "tile.png", "image/png", &sample_png(4, 4));

    let response = app.oneshot(enhance_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["error"], "Invalid request: No file provided");
    assert!(json["requestId"].is_string());
}

#[tokio::test]
async fn non_multipart_body_is_bad_request_json() {
    let app = app_with(ServerConfig::default());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/enhance")
                .header(header::CONTENT_TYPE, "application/octet-stream")
                .body(Body::from(sample_png(4, 4)))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/json"));
    let json = json_body(response).await;
    assert_eq!(json["status"], "error");
    assert!(json["requestId"].is_string());
    assert!(json["error"].as_str().unwrap().starts_with("Invalid request:"));
}

#[tokio::test]
async fn undecodable_upload_is_unprocessable() {
    let app = app_with(ServerConfig::default());
    let body = multipart_body("file", "notes.png", "image/png", b"this is not a png");

    let response = app.oneshot(enhance_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = json_body(response).await;
    assert!(json["error"].as_str().unwrap().contains("decode"));
}

#[tokio::test]
async fn output_over_pixel_budget_is_rejected() {
    let config = ServerConfig {
        enhance: EnhanceOptions {
            max_output_pixels: 100,
            ..EnhanceOptions::default()
        },
        ..ServerConfig::default()
    };
    let app = app_with(config);
    let body = multipart_body("file", "tile.png", "image/png", &sample_png(8, 8));

    let response = app.oneshot(enhance_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn upload_over_body_limit_is_rejected() {
    let config = ServerConfig {
        max_upload_bytes: 64,
        ..ServerConfig::default()
    };
    let app = app_with(config);
    let body = multipart_body("file", "tile.png", "image/png", &sample_png(32, 32));

    let response = app.oneshot(enhance_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn cors_preflight_allows_post() {
    let app = app_with(ServerConfig::default());

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/enhance")
                .header(header::ORIGIN, "http://localhost:8080")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
