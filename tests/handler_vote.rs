mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use chicken_ranker::api::handlers::{downvote_handler, upvote_handler, vote_handler};
use serde_json::{Value, json};

fn app(state: chicken_ranker::AppState) -> TestServer {
    let router = Router::new()
        .route("/api/restaurants/{id}/vote", post(vote_handler))
        .route("/api/restaurants/{id}/upvote", post(upvote_handler))
        .route("/api/restaurants/{id}/downvote", post(downvote_handler))
        .with_state(state);

    TestServer::new(router).unwrap()
}

fn assert_tally(json: &Value, upvotes: i64, downvotes: i64, score: i64) {
    assert_eq!(json["upvotes"], upvotes);
    assert_eq!(json["downvotes"], downvotes);
    assert_eq!(json["score"], score);
    assert_eq!(
        json["score"].as_i64().unwrap(),
        json["upvotes"].as_i64().unwrap() - json["downvotes"].as_i64().unwrap()
    );
}

#[tokio::test]
async fn test_fresh_upvote() {
    let (state, catalog) = common::create_test_state();
    let r = common::seed_restaurant(&catalog, "Dave's Hot Chicken").await;

    let response = app(state)
        .post(&format!("/api/restaurants/{}/vote", r.id))
        .json(&json!({ "action": "upvote", "previousAction": null }))
        .await;

    response.assert_status_ok();
    assert_tally(&response.json::<Value>(), 1, 0, 1);
}

#[tokio::test]
async fn test_fresh_downvote() {
    let (state, catalog) = common::create_test_state();
    let r = common::seed_restaurant(&catalog, "Dave's Hot Chicken").await;

    let response = app(state)
        .post(&format!("/api/restaurants/{}/vote", r.id))
        .json(&json!({ "action": "downvote" }))
        .await;

    response.assert_status_ok();
    assert_tally(&response.json::<Value>(), 0, 1, -1);
}

#[tokio::test]
async fn test_repeated_vote_is_noop() {
    let (state, catalog) = common::create_test_state();
    let r = common::seed_restaurant(&catalog, "Dave's Hot Chicken").await;
    let server = app(state);

    server
        .post(&format!("/api/restaurants/{}/vote", r.id))
        .json(&json!({ "action": "upvote", "previousAction": null }))
        .await
        .assert_status_ok();

    // Same vote again: counters unchanged.
    let response = server
        .post(&format!("/api/restaurants/{}/vote", r.id))
        .json(&json!({ "action": "upvote", "previousAction": "upvote" }))
        .await;

    response.assert_status_ok();
    assert_tally(&response.json::<Value>(), 1, 0, 1);
}

#[tokio::test]
async fn test_vote_switch_moves_score_by_two() {
    let (state, catalog) = common::create_test_state();
    let r = common::seed_restaurant(&catalog, "Dave's Hot Chicken").await;
    let server = app(state);

    server
        .post(&format!("/api/restaurants/{}/vote", r.id))
        .json(&json!({ "action": "upvote", "previousAction": null }))
        .await
        .assert_status_ok();

    let response = server
        .post(&format!("/api/restaurants/{}/vote", r.id))
        .json(&json!({ "action": "downvote", "previousAction": "upvote" }))
        .await;

    response.assert_status_ok();
    let after_switch = response.json::<Value>();
    assert_tally(&after_switch, 0, 1, -1);

    // And back: +2 from -1 to +1.
    let response = server
        .post(&format!("/api/restaurants/{}/vote", r.id))
        .json(&json!({ "action": "upvote", "previousAction": "downvote" }))
        .await;

    response.assert_status_ok();
    assert_tally(&response.json::<Value>(), 1, 0, 1);
}

#[tokio::test]
async fn test_score_identity_holds_across_mixed_sequence() {
    let (state, catalog) = common::create_test_state();
    let r = common::seed_restaurant(&catalog, "Dave's Hot Chicken").await;
    let server = app(state);

    // Several clients with different histories voting in turn.
    let steps = [
        json!({ "action": "upvote", "previousAction": null }),
        json!({ "action": "upvote", "previousAction": null }),
        json!({ "action": "downvote", "previousAction": null }),
        json!({ "action": "downvote", "previousAction": "upvote" }),
        json!({ "action": "upvote", "previousAction": "downvote" }),
        json!({ "action": "downvote", "previousAction": "downvote" }),
    ];

    for step in steps {
        let response = server
            .post(&format!("/api/restaurants/{}/vote", r.id))
            .json(&step)
            .await;
        response.assert_status_ok();

        let json = response.json::<Value>();
        assert_eq!(
            json["score"].as_i64().unwrap(),
            json["upvotes"].as_i64().unwrap() - json["downvotes"].as_i64().unwrap()
        );
    }
}

#[tokio::test]
async fn test_vote_unknown_id_is_404_and_catalog_unchanged() {
    let (state, catalog) = common::create_test_state();
    let r = common::seed_restaurant(&catalog, "Dave's Hot Chicken").await;

    let response = app(state)
        .post("/api/restaurants/999/vote")
        .json(&json!({ "action": "upvote", "previousAction": null }))
        .await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");

    use chicken_ranker::domain::repositories::RestaurantRepository;
    let untouched = catalog.find_by_id(r.id).await.unwrap().unwrap();
    assert_eq!(untouched.upvotes, 0);
    assert_eq!(untouched.score, 0);
}

#[tokio::test]
async fn test_invalid_action_is_rejected() {
    let (state, catalog) = common::create_test_state();
    let r = common::seed_restaurant(&catalog, "Dave's Hot Chicken").await;

    let response = app(state)
        .post(&format!("/api/restaurants/{}/vote", r.id))
        .json(&json!({ "action": "sideways" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_legacy_upvote_and_downvote_endpoints() {
    let (state, catalog) = common::create_test_state();
    let r = common::seed_restaurant(&catalog, "Dave's Hot Chicken").await;
    let server = app(state);

    let response = server
        .post(&format!("/api/restaurants/{}/upvote", r.id))
        .await;
    response.assert_status_ok();
    assert_tally(&response.json::<Value>(), 1, 0, 1);

    let response = server
        .post(&format!("/api/restaurants/{}/downvote", r.id))
        .await;
    response.assert_status_ok();
    assert_tally(&response.json::<Value>(), 1, 1, 0);
}
