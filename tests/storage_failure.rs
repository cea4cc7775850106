mod common;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use review_report::db::{ReviewFilter, ReviewStore};
use review_report::models;
use serde_json::{json, Value};
use std::sync::Arc;

struct UnreachableStore;

#[async_trait]
impl ReviewStore for UnreachableStore {
    async fn insert(&self, _review: &models::Review) -> Result<ObjectId, String> {
        Err("connection refused".to_string())
    }

    async fn find(&self, _filter: ReviewFilter) -> Result<Vec<models::Review>, String> {
        Err("connection refused".to_string())
    }

    async fn update(&self, _id: &ObjectId, _review: &str, _rating: i32) -> Result<bool, String> {
        Err("connection refused".to_string())
    }

    async fn delete(&self, _id: &ObjectId) -> Result<bool, String> {
        Err("connection refused".to_string())
    }

    async fn ping(&self) -> Result<(), String> {
        Err("connection refused".to_string())
    }
}

async fn assert_storage_failure(response: reqwest::Response) {
    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"success": false, "message": "Storage failure"}));
}

#[tokio::test]
async fn storage_errors_answer_500_without_driver_details() {
    let address = common::spawn_app_with_store(Arc::new(UnreachableStore)).await;
    let client = reqwest::Client::new();
    let item = format!("{}/reviews/65a1f0c2e4b0a1b2c3d4e5f6", &address);

    let response = client
        .post(&format!("{}/reviews", &address))
        .json(&json!({"product_id": 1, "user_id": 7, "review": "Great", "rating": 5}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_storage_failure(response).await;

    for url in [format!("{}/reviews", &address), format!("{}/reviews/product/1", &address), item.clone()] {
        let response = client.get(&url).send().await.expect("Failed to execute request.");
        assert_storage_failure(response).await;
    }

    let response = client
        .put(&item)
        .json(&json!({"review": "Edited", "rating": 3}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_storage_failure(response).await;

    let response = client.delete(&item).send().await.expect("Failed to execute request.");
    assert_storage_failure(response).await;
}

#[tokio::test]
async fn invalid_input_is_rejected_before_storage() {
    let address = common::spawn_app_with_store(Arc::new(UnreachableStore)).await;

    let response = reqwest::Client::new()
        .post(&format!("{}/reviews", &address))
        .json(&json!({"product_id": 1, "user_id": 7, "review": "Bad", "rating": 0}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 400);
}
