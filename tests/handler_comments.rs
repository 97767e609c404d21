mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use chicken_ranker::api::handlers::add_comment_handler;
use chicken_ranker::domain::repositories::CommentRepository;
use serde_json::{Value, json};

fn app(state: chicken_ranker::AppState) -> TestServer {
    let router = Router::new()
        .route("/api/restaurants/{id}/comments", post(add_comment_handler))
        .with_state(state);

    TestServer::new(router).unwrap()
}

#[tokio::test]
async fn test_add_comment_appends_exactly_one_entry() {
    let (state, catalog) = common::create_test_state();
    let r = common::seed_restaurant(&catalog, "Dave's Hot Chicken").await;

    let response = app(state)
        .post(&format!("/api/restaurants/{}/comments", r.id))
        .json(&json!({ "text": "Best tenders in town", "author": "Sam" }))
        .await;

    response.assert_status_ok();

    let comment = response.json::<Value>();
    assert_eq!(comment["text"], "Best tenders in town");
    assert_eq!(comment["author"], "Sam");
    assert_eq!(comment["restaurantId"], r.id);
    assert!(comment.get("createdAt").is_some());

    let stored = catalog.list_for_restaurant(r.id).await.unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn test_add_comment_defaults_author_to_anonymous() {
    let (state, catalog) = common::create_test_state();
    let r = common::seed_restaurant(&catalog, "Dave's Hot Chicken").await;

    let response = app(state)
        .post(&format!("/api/restaurants/{}/comments", r.id))
        .json(&json!({ "text": "Came back twice in one week" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["author"], "Anonymous");
}

#[tokio::test]
async fn test_add_comment_trims_text() {
    let (state, catalog) = common::create_test_state();
    let r = common::seed_restaurant(&catalog, "Dave's Hot Chicken").await;

    let response = app(state)
        .post(&format!("/api/restaurants/{}/comments", r.id))
        .json(&json!({ "text": "  spicy!  " }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["text"], "spicy!");
}

#[tokio::test]
async fn test_empty_comment_is_rejected() {
    let (state, catalog) = common::create_test_state();
    let r = common::seed_restaurant(&catalog, "Dave's Hot Chicken").await;
    let server = app(state);

    let response = server
        .post(&format!("/api/restaurants/{}/comments", r.id))
        .json(&json!({ "text": "" }))
        .await;
    response.assert_status_bad_request();

    // Whitespace-only text survives DTO validation but not trimming.
    let response = server
        .post(&format!("/api/restaurants/{}/comments", r.id))
        .json(&json!({ "text": "   \t " }))
        .await;
    response.assert_status_bad_request();

    // Body without a text field at all.
    let response = server
        .post(&format!("/api/restaurants/{}/comments", r.id))
        .json(&json!({ "author": "Sam" }))
        .await;
    response.assert_status_bad_request();

    assert!(catalog.list_for_restaurant(r.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_comment_on_unknown_restaurant_is_404() {
    let (state, _catalog) = common::create_test_state();

    let response = app(state)
        .post("/api/restaurants/999/comments")
        .json(&json!({ "text": "hello" }))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}
