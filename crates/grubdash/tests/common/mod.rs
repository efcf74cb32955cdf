#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use grubdash::api::{self, AppState};
use grubdash::lifecycle::GrubDashSystem;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

pub fn app() -> (Router, GrubDashSystem) {
    let system = GrubDashSystem::new(16);
    (api::router(AppState::from(&system)), system)
}

async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Sends a request, wrapping `data` in the `{ "data": ... }` envelope when given.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    data: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match data {
        Some(data) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "data": data }).to_string())),
        None => builder.body(Body::empty()),
    };
    dispatch(app, request.unwrap()).await
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();
    dispatch(app, request).await
}

pub fn error(status: StatusCode, message: &str) -> Value {
    json!({ "status": status.as_u16(), "message": message })
}

pub fn falafel() -> Value {
    json!({
        "name": "Falafel",
        "description": "Crispy chickpea balls with tahini",
        "price": 8,
        "image_url": "https://images.example.com/falafel.jpg"
    })
}

pub fn order() -> Value {
    json!({
        "deliverTo": "123 Main",
        "mobileNumber": "555-0100",
        "dishes": [{ "dishId": 1, "quantity": 2 }]
    })
}

/// `base` with `field` set to `value`, or removed when `value` is `None`.
pub fn with(base: Value, field: &str, value: Option<Value>) -> Value {
    let mut base = base;
    let fields = base.as_object_mut().unwrap();
    match value {
        Some(value) => fields.insert(field.to_string(), value),
        None => fields.remove(field),
    };
    base
}
