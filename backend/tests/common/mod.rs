//! Common test utilities for integration tests
//!
//! The router runs against in-memory stores seeded with a small catalog,
//! so these tests need no database.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use fitness_platform_backend::{
    config::AppConfig,
    repositories::{InMemoryCatalogStore, InMemoryPlanStore},
    routes,
    state::AppState,
};
use fitness_platform_shared::{Difficulty, Exercise, Food, Nutrition};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub plans: Arc<InMemoryPlanStore>,
}

impl TestApp {
    /// App over the standard test catalog
    pub fn new() -> Self {
        Self::with_catalog(test_exercises(), test_foods())
    }

    pub fn with_catalog(exercises: Vec<Exercise>, foods: Vec<Food>) -> Self {
        let plans = Arc::new(InMemoryPlanStore::new());
        let state = AppState::with_stores(
            test_config(),
            Arc::new(InMemoryCatalogStore::new(exercises, foods)),
            plans.clone(),
        );
        let app = routes::create_router(state.clone());

        Self { app, state, plans }
    }

    /// Access token for a fresh user
    pub fn token_for(&self, user_id: Uuid) -> String {
        self.state.jwt().issue_access_token(user_id).unwrap()
    }

    pub fn new_user_token(&self) -> String {
        self.token_for(Uuid::new_v4())
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_auth(&self, path: &str, body: &str, token: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.port = 0;
    config.jwt.secret = "test-secret-key-for-testing-only-32chars".to_string();
    config
}

pub fn exercise(
    name: &str,
    category: &str,
    muscle_group: &str,
    met_value: f64,
    difficulty: Difficulty,
) -> Exercise {
    Exercise {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: category.to_string(),
        muscle_group: muscle_group.to_string(),
        met_value,
        difficulty,
        equipment: None,
        is_active: true,
    }
}

pub fn food(name: &str, category: &str, calories: f64) -> Food {
    Food {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: category.to_string(),
        nutrition: Nutrition {
            calories,
            ..Default::default()
        },
        is_active: true,
    }
}

pub fn test_exercises() -> Vec<Exercise> {
    use Difficulty::*;
    vec![
        exercise("Brisk Walking", "Cardio", "Legs", 4.3, Beginner),
        exercise("Stationary Cycling", "Cardio", "Legs", 6.8, Beginner),
        exercise("Elliptical Trainer", "Cardio", "Legs", 5.0, Beginner),
        exercise("Step-ups", "Cardio", "Legs", 6.0, Beginner),
        exercise("Light Rowing", "Cardio", "Back", 4.8, Beginner),
        exercise("Jogging", "Cardio", "Legs", 7.0, Intermediate),
        exercise("Jump Rope", "Cardio", "Legs", 11.8, Advanced),
        exercise("Jumping Jacks", "HIIT", "Legs", 8.0, Beginner),
        exercise("Mountain Climbers", "HIIT", "Core", 8.0, Intermediate),
        exercise("Burpees", "HIIT", "Legs", 8.0, Advanced),
        exercise("Push-ups", "Strength", "Chest", 3.8, Beginner),
        exercise("Incline Push-ups", "Strength", "Chest", 3.5, Beginner),
        exercise("Bench Press", "Strength", "Chest", 5.0, Intermediate),
        exercise("Band Rows", "Strength", "Back", 3.5, Beginner),
        exercise("Lat Pulldown", "Strength", "Back", 4.0, Beginner),
        exercise("Pull-ups", "Strength", "Back", 8.0, Advanced),
        exercise("Bodyweight Squats", "Strength", "Legs", 5.0, Beginner),
        exercise("Lunges", "Strength", "Legs", 4.0, Beginner),
        exercise("Bicep Curls", "Strength", "Arms", 3.5, Beginner),
        exercise("Plank", "Strength", "Core", 3.8, Beginner),
        exercise("Dead Bug", "Strength", "Core", 3.0, Beginner),
        exercise("Full Body Stretch", "Flexibility", "Core", 2.3, Beginner),
        exercise("Yoga Flow", "Flexibility", "Core", 3.0, Intermediate),
    ]
}

pub fn test_foods() -> Vec<Food> {
    vec![
        food("Eggs", "Protein", 155.0),
        food("Chicken Breast", "Protein", 165.0),
        food("Greek Yogurt", "Protein", 59.0),
        food("Salmon", "Protein", 208.0),
        food("Tofu", "Protein", 76.0),
        food("Oatmeal", "Carbohydrate", 389.0),
        food("Brown Rice", "Carbohydrate", 111.0),
        food("Sweet Potato", "Carbohydrate", 86.0),
        food("Broccoli", "Vegetable", 34.0),
        food("Spinach", "Vegetable", 23.0),
        food("Carrots", "Vegetable", 41.0),
        food("Banana", "Fruit", 89.0),
        food("Apple", "Fruit", 52.0),
        food("Blueberries", "Fruit", 57.0),
        food("Almonds", "Fat", 579.0),
        food("Avocado", "Fat", 160.0),
        food("Milk", "Dairy", 42.0),
    ]
}
