//! Handler tests for the catalog domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response envelope serialization
//! - HTTP status codes
//! - Error responses
//!
//! The repository is an in-memory double implementing the same contract as
//! the MongoDB implementation, so the full handler → service → repository
//! path runs without a database.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_catalog::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use tower::ServiceExt; // For oneshot()

/// In-memory stand-in for the MongoDB repository.
///
/// Mirrors the store contract: ids are minted on insert, lookups miss with
/// `None`/`false`, update replaces by name, delete removes by id.
#[derive(Default)]
struct InMemoryRepository {
    products: Mutex<HashMap<String, Product>>,
    next_id: AtomicU32,
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn get_products(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.lock().unwrap().values().cloned().collect())
    }

    async fn get_product(&self, id: &str) -> CatalogResult<Option<Product>> {
        Ok(self.products.lock().unwrap().get(id).cloned())
    }

    async fn get_products_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn product_exists(&self, name: &str) -> CatalogResult<bool> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .values()
            .any(|p| p.name == name))
    }

    async fn create_product(&self, mut product: Product) -> CatalogResult<Product> {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        product.id = format!("{:024x}", n);
        self.products
            .lock()
            .unwrap()
            .insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn update_product(&self, product: Product) -> CatalogResult<bool> {
        let mut products = self.products.lock().unwrap();
        let existing_id = products
            .values()
            .find(|p| p.name == product.name)
            .map(|p| p.id.clone());

        match existing_id {
            Some(id) => {
                let mut replacement = product;
                replacement.id = id.clone();
                products.insert(id, replacement);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_product(&self, id: &str) -> CatalogResult<bool> {
        Ok(self.products.lock().unwrap().remove(id).is_some())
    }
}

fn app() -> Router {
    let service = CatalogService::new(InMemoryRepository::default());
    handlers::router(service)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn nike_shoe() -> Value {
    json!({
        "name": "Nike Shoe",
        "category": "Shoes",
        "summary": "Running",
        "price": 100
    })
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_product_returns_201_with_envelope() {
    let app = app();

    let response = app.oneshot(post_json("/", nike_shoe())).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], true);
    assert_eq!(body["data"]["name"], "Nike Shoe");
    assert_eq!(body["message"], "Product successfully created");
    assert_eq!(body["data"]["_id"].as_str().unwrap().len(), 24);
}

#[tokio::test]
async fn test_create_then_get_round_trips_the_entity() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/", nike_shoe()))
        .await
        .unwrap();
    let created = json_body(response.into_body()).await;
    let id = created["data"]["_id"].as_str().unwrap().to_string();

    let response = app.oneshot(get(&format!("/{}", id))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], true);
    assert_eq!(body["message"], "Product data found");
    assert_eq!(body["data"], created["data"]);
}

#[tokio::test]
async fn test_duplicate_create_returns_422_and_keeps_count() {
    let app = app();

    let first = app
        .clone()
        .oneshot(post_json("/", nike_shoe()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .clone()
        .oneshot(post_json("/", nike_shoe()))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_body(second.into_body()).await;
    assert_eq!(body["status"], false);
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["message"], "Product Nike Shoe already exists");

    // The stored count is unchanged
    let list = app.oneshot(get("/")).await.unwrap();
    let body = json_body(list.into_body()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_unknown_id_returns_404_with_null_data() {
    let app = app();
    let missing = "602d2149e773f2a3990b47f5";

    let response = app.oneshot(get(&format!("/{}", missing))).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], false);
    assert_eq!(body["data"], Value::Null);
    assert_eq!(
        body["message"],
        format!("Product with id: {}, not found", missing)
    );
}

#[tokio::test]
async fn test_get_malformed_id_is_a_route_miss() {
    let app = app();

    // Too short to be a document id; rejected before the handler
    let response = app.oneshot(get("/not-a-valid-id")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], false);
    assert_eq!(body["message"], "The requested resource was not found");
}

#[tokio::test]
async fn test_list_products_returns_empty_list() {
    let app = app();

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], true);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["message"], Value::Null);
}

#[tokio::test]
async fn test_category_with_no_matches_is_ok_and_empty() {
    let app = app();

    let created = app
        .clone()
        .oneshot(post_json("/", nike_shoe()))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let response = app
        .oneshot(get("/GetProductByCategory/Laptops"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], true);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_category_match_is_case_sensitive() {
    let app = app();

    app.clone()
        .oneshot(post_json("/", nike_shoe()))
        .await
        .unwrap();

    let miss = app
        .clone()
        .oneshot(get("/GetProductByCategory/shoes"))
        .await
        .unwrap();
    let body = json_body(miss.into_body()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    let hit = app.oneshot(get("/GetProductByCategory/Shoes")).await.unwrap();
    let body = json_body(hit.into_body()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_unknown_name_returns_404() {
    let app = app();

    let response = app.oneshot(put_json("/", nike_shoe())).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], false);
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["message"], "Product Nike Shoe does not exist");
}

#[tokio::test]
async fn test_update_existing_returns_null_data_and_persists() {
    let app = app();

    let created = app
        .clone()
        .oneshot(post_json("/", nike_shoe()))
        .await
        .unwrap();
    let created = json_body(created.into_body()).await;
    let id = created["data"]["_id"].as_str().unwrap().to_string();

    let mut updated = nike_shoe();
    updated["price"] = json!(150);
    updated["summary"] = json!("Trail running");

    let response = app.clone().oneshot(put_json("/", updated)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], true);
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["message"], "Product Nike Shoe updated successfully!");

    // A re-fetch reflects the new field values
    let fetched = app.oneshot(get(&format!("/{}", id))).await.unwrap();
    let body = json_body(fetched.into_body()).await;
    assert_eq!(body["data"]["price"], 150.0);
    assert_eq!(body["data"]["summary"], "Trail running");
}

#[tokio::test]
async fn test_delete_existing_then_get_returns_404() {
    let app = app();

    let created = app
        .clone()
        .oneshot(post_json("/", nike_shoe()))
        .await
        .unwrap();
    let created = json_body(created.into_body()).await;
    let id = created["data"]["_id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(delete(&format!("/{}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], true);
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["message"], "Product Nike Shoe deleted successfully!");

    let fetched = app.oneshot(get(&format!("/{}", id))).await.unwrap();
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_uses_requested_id_in_message() {
    let app = app();
    let missing = "602d2149e773f2a3990b47f5";

    let response = app.oneshot(delete(&format!("/{}", missing))).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], false);
    assert_eq!(body["message"], format!("Product, {} not found", missing));
}

#[tokio::test]
async fn test_validation_rejects_empty_summary_before_the_store() {
    let app = app();

    let mut body = nike_shoe();
    body["summary"] = json!("");

    let response = app.clone().oneshot(post_json("/", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], false);
    assert_eq!(body["data"], json!({}));
    let errors = body["message"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["Error"], "'Summary' must not be empty.");

    // Nothing reached the store
    let list = app.oneshot(get("/")).await.unwrap();
    let body = json_body(list.into_body()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_validation_lists_each_failing_field_once() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/",
            json!({ "name": "", "category": "", "summary": "ok", "price": 0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    let errors: Vec<String> = body["message"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["Error"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(errors.len(), 3);
    assert!(errors.contains(&"'Name' must not be empty.".to_string()));
    assert!(errors.contains(&"'Category' must not be empty.".to_string()));
    assert!(errors.contains(&"'Price' must not be empty.".to_string()));
}
