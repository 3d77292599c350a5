//! Integration tests for the catalog browsing endpoints

mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_list_exercises_by_category() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/v1/catalog/exercises?category=HIIT").await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Jumping Jacks", "Mountain Climbers", "Burpees"]);
}

#[tokio::test]
async fn test_list_exercises_by_muscle_group_and_difficulty() {
    let app = common::TestApp::new();

    let (status, body) = app
        .get("/api/v1/catalog/exercises?muscleGroup=Back&difficulty=Advanced")
        .await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Pull-ups");
}

#[tokio::test]
async fn test_list_foods_with_limit() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/v1/catalog/foods?category=Protein&limit=2").await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["name"], "Eggs");
}

#[tokio::test]
async fn test_inactive_items_hidden() {
    let mut foods = common::test_foods();
    foods[0].is_active = false;
    let app = common::TestApp::with_catalog(vec![], foods);

    let (_, body) = app.get("/api/v1/catalog/foods?category=Protein").await;
    let body: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(body[0]["name"], "Chicken Breast");
}
