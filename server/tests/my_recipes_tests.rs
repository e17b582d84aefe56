mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_create_recipe() {
    let app = TestApp::new();
    let (_, token) = app.register("testuser", "test@example.com").await;

    let (status, body) = app
        .post(
            "/create_recipe",
            Some(&token),
            json!({
                "title": "My New Recipe",
                "ingredients": "Eggs, Milk, Salt",
                "instructions": "Mix it all",
                "image_url": "https://example.com/recipe_image.jpg"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Your recipe has been created!");

    let (status, body) = app.get("/my_recipes", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let recipes = body["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["title"], "My New Recipe");
    assert_eq!(recipes[0]["image_url"], "https://example.com/recipe_image.jpg");
}

#[tokio::test]
async fn test_create_recipe_requires_image_url() {
    let app = TestApp::new();
    let (_, token) = app.register("testuser", "test@example.com").await;

    for body in [
        json!({"title": "Toast", "ingredients": "Bread", "instructions": "Toast it"}),
        json!({"title": "Toast", "ingredients": "Bread", "instructions": "Toast it", "image_url": ""}),
    ] {
        let (status, body) = app.post("/create_recipe", Some(&token), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please enter a valid image URL.");
        assert_eq!(body["errors"][0]["field"], "image_url");
    }

    let (_, body) = app.get("/my_recipes", Some(&token)).await;
    assert!(body["recipes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_recipe_validation() {
    let app = TestApp::new();
    let (_, token) = app.register("testuser", "test@example.com").await;

    let (status, body) = app
        .post(
            "/create_recipe",
            Some(&token),
            json!({
                "title": "",
                "ingredients": "Eggs",
                "instructions": "Mix",
                "image_url": "not-a-url"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["title", "image_url"]);

    let (_, body) = app.get("/my_recipes", Some(&token)).await;
    assert!(body["recipes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_my_recipes_only_lists_own() {
    let app = TestApp::new();
    let (_, alice) = app.register("alice", "alice@example.com").await;
    let (_, bob) = app.register("bob", "bob@example.com").await;

    app.create_recipe(&alice, "Alice Pie").await;
    app.create_recipe(&alice, "Alice Soup").await;
    app.create_recipe(&bob, "Bob Stew").await;

    let (_, body) = app.get("/my_recipes", Some(&alice)).await;
    let titles: Vec<&str> = body["recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Alice Soup", "Alice Pie"]);
}

#[tokio::test]
async fn test_view_my_recipe() {
    let app = TestApp::new();
    let (_, alice) = app.register("alice", "alice@example.com").await;
    let (_, bob) = app.register("bob", "bob@example.com").await;
    let id = app.create_recipe(&alice, "Alice Pie").await;

    let (status, body) = app.get(&format!("/my_recipe/{}", id), Some(&alice)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ingredients"], "Eggs, Milk, Salt");

    let (status, body) = app.get(&format!("/my_recipe/{}", id), Some(&bob)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "You do not have permission to view this recipe.");

    let (status, _) = app.get("/my_recipe/9999", Some(&alice)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_my_recipe() {
    let app = TestApp::new();
    let (_, token) = app.register("testuser", "test@example.com").await;
    let id = app.create_recipe(&token, "Pancakes").await;

    let (status, body) = app
        .post_empty(&format!("/delete_my_recipe/{}", id), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Your recipe has been deleted!");

    let (status, _) = app.get(&format!("/my_recipe/{}", id), Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_other_users_recipe() {
    let app = TestApp::new();
    let (_, alice) = app.register("alice", "alice@example.com").await;
    let (_, bob) = app.register("bob", "bob@example.com").await;
    let id = app.create_recipe(&alice, "Alice Pie").await;

    let (status, body) = app
        .post_empty(&format!("/delete_my_recipe/{}", id), Some(&bob))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "You do not have permission to delete this recipe."
    );

    let (status, _) = app.get(&format!("/my_recipe/{}", id), Some(&alice)).await;
    assert_eq!(status, StatusCode::OK);
}
