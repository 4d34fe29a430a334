// tests/support/builders.rs
use axum::body::Body;
use axum::http::{Request, header::CONTENT_TYPE};
use serde_json::{Value, json};

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub fn json_request(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

/// Payload for `POST /api/v1/articles` with the common fields filled in.
pub fn article_payload(language: &str, title: &str, slug: &str) -> Value {
    json!({
        "language": language,
        "title": title,
        "content": format!("Content of {title}"),
        "slug": slug,
        "publish": true,
    })
}

pub fn translation_payload(title: &str, slug: &str) -> Value {
    json!({
        "title": title,
        "content": format!("Content of {title}"),
        "slug": slug,
    })
}
