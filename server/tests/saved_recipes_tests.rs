mod common;

use axum::http::StatusCode;
use common::{recipe_detail, TestApp};
use larder_core::MockRecipeApi;

fn api() -> MockRecipeApi {
    MockRecipeApi::new()
        .with_recipe(recipe_detail(1, "Chicken Curry"))
        .with_recipe(recipe_detail(2, "Grilled Chicken"))
}

#[tokio::test]
async fn test_save_recipe() {
    let app = TestApp::with_api(api());
    let (_, token) = app.register("testuser", "test@example.com").await;

    let (status, body) = app.post_empty("/save_recipe/1", Some(&token)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Recipe saved!");
    assert_eq!(body["recipe_id"], 1);

    let (status, body) = app.get("/saved_recipes", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let saved = body["saved_recipes"].as_array().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0]["title"], "Chicken Curry");
    assert_eq!(saved[0]["ingredients"], "Chicken, Salt");
}

#[tokio::test]
async fn test_save_recipe_twice() {
    let app = TestApp::with_api(api());
    let (_, token) = app.register("testuser", "test@example.com").await;

    let (status, _) = app.get("/save_recipe/1", Some(&token)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.post_empty("/save_recipe/1", Some(&token)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Recipe already saved!");

    let (_, body) = app.get("/saved_recipes", Some(&token)).await;
    assert_eq!(body["saved_recipes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_two_users_share_one_recipe_row() {
    let app = TestApp::with_api(api());
    let (_, alice) = app.register("alice", "alice@example.com").await;
    let (_, bob) = app.register("bob", "bob@example.com").await;

    let (status, _) = app.post_empty("/save_recipe/1", Some(&alice)).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = app.post_empty("/save_recipe/1", Some(&bob)).await;
    assert_eq!(status, StatusCode::CREATED);

    // Second save is served from the stored row.
    assert_eq!(app.api.recipe_calls(), 1);
}

#[tokio::test]
async fn test_save_unknown_recipe() {
    let app = TestApp::with_api(api());
    let (_, token) = app.register("testuser", "test@example.com").await;

    let (status, _) = app.post_empty("/save_recipe/404", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.get("/saved_recipes", Some(&token)).await;
    assert!(body["saved_recipes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_saved_list_is_newest_first() {
    let app = TestApp::with_api(api());
    let (_, token) = app.register("testuser", "test@example.com").await;

    app.post_empty("/save_recipe/1", Some(&token)).await;
    app.post_empty("/save_recipe/2", Some(&token)).await;

    let (_, body) = app.get("/saved_recipes", Some(&token)).await;
    let ids: Vec<i64> = body["saved_recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["recipe_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_delete_saved_recipe() {
    let app = TestApp::with_api(api());
    let (_, token) = app.register("testuser", "test@example.com").await;

    let (_, body) = app.post_empty("/save_recipe/1", Some(&token)).await;
    let saved_id = body["id"].as_i64().unwrap();

    let (status, body) = app
        .post_empty(&format!("/delete_saved_recipe/{}", saved_id), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Recipe removed from your saved list!");

    let (_, body) = app.get("/saved_recipes", Some(&token)).await;
    assert!(body["saved_recipes"].as_array().unwrap().is_empty());

    // Can be saved again once removed.
    let (status, _) = app.post_empty("/save_recipe/1", Some(&token)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_delete_other_users_saved_recipe() {
    let app = TestApp::with_api(api());
    let (_, alice) = app.register("alice", "alice@example.com").await;
    let (_, bob) = app.register("bob", "bob@example.com").await;

    let (_, body) = app.post_empty("/save_recipe/1", Some(&alice)).await;
    let saved_id = body["id"].as_i64().unwrap();

    let (status, body) = app
        .post_empty(&format!("/delete_saved_recipe/{}", saved_id), Some(&bob))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "You do not have permission to delete this recipe."
    );

    let (_, body) = app.get("/saved_recipes", Some(&alice)).await;
    assert_eq!(body["saved_recipes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_missing_saved_recipe() {
    let app = TestApp::with_api(api());
    let (_, token) = app.register("testuser", "test@example.com").await;

    let (status, _) = app
        .request(
            axum::http::Method::DELETE,
            "/delete_saved_recipe/12345",
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
