mod common;

use axum::http::{Method, StatusCode};
use common::{app, error, falafel, send, send_raw, with};
use serde_json::{json, Value};

const PRICE: &str = "Dish must have a price that is an integer greater than 0";

async fn create(app: &axum::Router, dish: Value) -> Value {
    let (status, body) = send(app, Method::POST, "/dishes", Some(dish)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"].clone()
}

#[tokio::test]
async fn create_then_read_round_trips() {
    let (app, system) = app();

    let created = create(&app, falafel()).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(with(created.clone(), "id", None), falafel());

    let (status, body) = send(&app, Method::GET, &format!("/dishes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": created.clone() }));

    let (status, body) = send(&app, Method::GET, "/dishes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [created] }));

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn create_requires_every_field() {
    let (app, _system) = app();

    for field in ["name", "description", "image_url"] {
        let expected = format!("Dish must include a {field}");
        for value in [None, Some(json!("")), Some(json!(42))] {
            let dish = with(falafel(), field, value);
            let (status, body) = send(&app, Method::POST, "/dishes", Some(dish)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, error(StatusCode::BAD_REQUEST, &expected));
        }
    }

    let (_, body) = send(&app, Method::GET, "/dishes", None).await;
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn price_must_be_a_positive_integer() {
    let (app, _system) = app();

    for price in [None, Some(json!(0)), Some(json!(-1)), Some(json!("19")), Some(json!(2.5))] {
        let dish = with(falafel(), "price", price);
        let (status, body) = send(&app, Method::POST, "/dishes", Some(dish)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, error(StatusCode::BAD_REQUEST, PRICE));
    }

    // Checked before image_url.
    let dish = with(with(falafel(), "price", Some(json!(0))), "image_url", None);
    let (_, body) = send(&app, Method::POST, "/dishes", Some(dish)).await;
    assert_eq!(body["message"], PRICE);

    let (_, body) = send(&app, Method::GET, "/dishes", None).await;
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn large_prices_are_accepted() {
    let (app, _system) = app();

    let created = create(&app, with(falafel(), "price", Some(json!(5_000_000_000u64)))).await;
    assert_eq!(created["price"], json!(5_000_000_000u64));

    // 2^53 cannot be told apart from its neighbours by a JSON client.
    let dish = with(falafel(), "price", Some(json!(1u64 << 53)));
    let (status, body) = send(&app, Method::POST, "/dishes", Some(dish)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], PRICE);
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_the_id() {
    let (app, _system) = app();
    let created = create(&app, falafel()).await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("/dishes/{id}");

    let changes = json!({
        "name": "Baked falafel",
        "description": "Oven baked",
        "price": 9,
        "image_url": "https://images.example.com/baked.jpg"
    });
    let (status, body) = send(&app, Method::PUT, &uri, Some(changes.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], with(changes.clone(), "id", Some(json!(id))));

    let (_, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(body["data"]["id"], json!(id));
    assert_eq!(body["data"]["name"], json!("Baked falafel"));

    // An empty body id defers to the route.
    let changes = with(changes, "id", Some(json!("")));
    let (status, _) = send(&app, Method::PUT, &uri, Some(changes)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn update_rejects_a_mismatched_id() {
    let (app, _system) = app();
    let created = create(&app, falafel()).await;
    let id = created["id"].as_str().unwrap();

    let dish = with(falafel(), "id", Some(json!("other")));
    let (status, body) = send(&app, Method::PUT, &format!("/dishes/{id}"), Some(dish)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!(format!("Dish id does not match route id. Dish: other, Route: {id}"))
    );

    let (_, body) = send(&app, Method::GET, &format!("/dishes/{id}"), None).await;
    assert_eq!(body["data"], created);
}

#[tokio::test]
async fn update_validates_fields() {
    let (app, _system) = app();
    let created = create(&app, falafel()).await;
    let uri = format!("/dishes/{}", created["id"].as_str().unwrap());

    let dish = with(falafel(), "price", Some(json!(-3)));
    let (status, body) = send(&app, Method::PUT, &uri, Some(dish)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], PRICE);

    let dish = with(falafel(), "description", None);
    let (status, body) = send(&app, Method::PUT, &uri, Some(dish)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Dish must include a description");
}

#[tokio::test]
async fn unknown_dishes_are_not_found() {
    let (app, _system) = app();

    let (status, body) = send(&app, Method::GET, "/dishes/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, error(StatusCode::NOT_FOUND, "Dish does not exist: nope."));

    let (status, body) = send(&app, Method::PUT, "/dishes/nope", Some(falafel())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Dish does not exist: nope.");
}

#[tokio::test]
async fn dishes_cannot_be_deleted() {
    let (app, _system) = app();
    let created = create(&app, falafel()).await;
    let uri = format!("/dishes/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body,
        error(StatusCode::METHOD_NOT_ALLOWED, &format!("DELETE not allowed for {uri}"))
    );

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_bodies_and_unknown_paths() {
    let (app, _system) = app();

    let (status, body) = send_raw(&app, Method::POST, "/dishes", "{ not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let (status, body) = send_raw(&app, Method::POST, "/dishes", r#"{ "data": null }"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Dish must include a name");

    for raw in [r#"{ "data": "x" }"#, r#"{ "data": [1] }"#] {
        let (status, body) = send_raw(&app, Method::POST, "/dishes", raw).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, error(StatusCode::BAD_REQUEST, "Dish must include a name"));
    }

    let (status, body) = send(&app, Method::GET, "/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, error(StatusCode::NOT_FOUND, "Path not found: /nowhere"));
}
