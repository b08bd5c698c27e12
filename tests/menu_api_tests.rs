//! End-to-end HTTP tests for the menu service
//!
//! These tests exercise the full stack: routing, extraction, validation,
//! the query pipeline and the in-memory store, through a real axum router.

use axum_test::TestServer;
use menu_rs::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;

fn create_test_server(config: ServiceConfig) -> TestServer {
    let config = Arc::new(config);
    let store: Arc<dyn MenuStore> = Arc::new(InMemoryMenuStore::with_items(config.seed.clone()));
    let app = build_router(AppState::new(store, config));
    TestServer::new(app)
}

fn seeded_server() -> TestServer {
    create_test_server(ServiceConfig::default())
}

// =============================================================================
// Health Check Tests
// =============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = seeded_server();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_healthz_endpoint() {
        let server = seeded_server();

        let response = server.get("/healthz").await;
        response.assert_status_ok();
    }
}

// =============================================================================
// List Tests
// =============================================================================

mod list_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_returns_seed_in_insertion_order() {
        let server = seeded_server();

        let response = server.get("/menu").await;
        response.assert_status_ok();

        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0]["order_code"], "bakmie");
        assert_eq!(body[1]["order_code"], "bakso");
    }

    #[tokio::test]
    async fn test_sort_by_price_ascending() {
        let server = seeded_server();

        let response = server
            .get("/menu")
            .add_query_param("sort_by", "price")
            .add_query_param("order", "asc")
            .await;
        response.assert_status_ok();

        let body: Vec<Value> = response.json();
        assert_eq!(body[0]["order_code"], "bakso");
        assert_eq!(body[0]["price"], 8000);
        assert_eq!(body[1]["order_code"], "bakmie");
        assert_eq!(body[1]["price"], 12000);
    }

    #[tokio::test]
    async fn test_sort_by_price_descending() {
        let server = seeded_server();

        let response = server
            .get("/menu")
            .add_query_param("sort_by", "price")
            .add_query_param("order", "desc")
            .await;

        let body: Vec<Value> = response.json();
        assert_eq!(body[0]["order_code"], "bakmie");
        assert_eq!(body[1]["order_code"], "bakso");
    }

    #[tokio::test]
    async fn test_filter_with_limit_returns_first_match() {
        let server = seeded_server();

        let response = server
            .get("/menu")
            .add_query_param("q", "bak")
            .add_query_param("limit", "1")
            .await;
        response.assert_status_ok();

        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["order_code"], "bakmie");
    }

    #[tokio::test]
    async fn test_filter_with_no_match_is_empty() {
        let server = seeded_server();

        let response = server.get("/menu").add_query_param("q", "rendang").await;

        let body: Vec<Value> = response.json();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_unrecognized_sort_field_keeps_stored_order() {
        let server = seeded_server();

        let response = server
            .get("/menu")
            .add_query_param("sort_by", "calories")
            .await;
        response.assert_status_ok();

        let body: Vec<Value> = response.json();
        assert_eq!(body[0]["order_code"], "bakmie");
    }

    #[tokio::test]
    async fn test_non_numeric_limit_is_rejected() {
        let server = seeded_server();

        let response = server.get("/menu").add_query_param("limit", "abc").await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_LIMIT");
    }

    #[tokio::test]
    async fn test_negative_limit_is_rejected() {
        let server = seeded_server();

        let response = server.get("/menu").add_query_param("limit", "-1").await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_LIMIT");
    }

    #[tokio::test]
    async fn test_zero_limit_yields_empty_page() {
        let server = seeded_server();

        let response = server.get("/menu").add_query_param("limit", "0").await;
        response.assert_status_ok();

        let body: Vec<Value> = response.json();
        assert!(body.is_empty());
    }
}

// =============================================================================
// Create Tests
// =============================================================================

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_created_item() {
        let server = seeded_server();

        let response = server
            .post("/menu")
            .json(&json!({
                "name": "soto ayam",
                "order_code": "soto",
                "price": 10000
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body: Value = response.json();
        assert_eq!(body["name"], "soto ayam");
        assert_eq!(body["order_code"], "soto");
        assert_eq!(body["price"], 10000);
    }

    #[tokio::test]
    async fn test_create_then_filter_round_trip() {
        let server = seeded_server();

        server
            .post("/menu")
            .json(&json!({
                "name": "rendang",
                "order_code": "rendang-01",
                "price": 25000
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        let response = server.get("/menu").add_query_param("q", "rendang").await;
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["name"], "rendang");
        assert_eq!(body[0]["price"], 25000);
    }

    #[tokio::test]
    async fn test_create_with_empty_name_is_rejected() {
        let server = seeded_server();

        let response = server
            .post("/menu")
            .json(&json!({
                "name": "",
                "order_code": "x",
                "price": 1
            }))
            .await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_create_with_malformed_body_is_rejected() {
        let server = seeded_server();

        let response = server.post("/menu").text("{not json").await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["code"], "MALFORMED_REQUEST");
    }

    #[tokio::test]
    async fn test_create_accepts_localized_field_names() {
        let server = seeded_server();

        let response = server
            .post("/menu")
            .json(&json!({
                "nama": "es teh",
                "kode_pesanan": "es-teh",
                "harga": 3000
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        // Output always uses the canonical names
        let body: Value = response.json();
        assert_eq!(body["order_code"], "es-teh");
        assert_eq!(body["price"], 3000);
    }

    #[tokio::test]
    async fn test_strict_rules_reject_non_positive_price() {
        let server = create_test_server(ServiceConfig {
            validation: ValidationRules::strict(),
            ..Default::default()
        });

        let response = server
            .post("/menu")
            .json(&json!({
                "name": "gratis",
                "order_code": "gratis",
                "price": 0
            }))
            .await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_INPUT");
    }
}

// =============================================================================
// Update Tests
// =============================================================================

mod update_tests {
    use super::*;

    #[tokio::test]
    async fn test_partial_update_keeps_absent_fields() {
        let server = seeded_server();

        let response = server
            .put("/menu/bakso")
            .json(&json!({ "price": 9000 }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["name"], "bakso");
        assert_eq!(body["order_code"], "bakso");
        assert_eq!(body["price"], 9000);

        // The stored item reflects the merge
        let list: Vec<Value> = server
            .get("/menu")
            .add_query_param("q", "bakso")
            .await
            .json();
        assert_eq!(list[0]["price"], 9000);
    }

    #[tokio::test]
    async fn test_update_unknown_code_is_not_found() {
        let server = seeded_server();

        let response = server
            .put("/menu/unknown")
            .json(&json!({ "price": 9000 }))
            .await;
        response.assert_status_not_found();

        let body: Value = response.json();
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_update_to_empty_name_is_rejected() {
        let server = seeded_server();

        let response = server.put("/menu/bakso").json(&json!({ "name": "" })).await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_INPUT");

        // The stored item is untouched
        let list: Vec<Value> = server
            .get("/menu")
            .add_query_param("q", "bakso")
            .await
            .json();
        assert_eq!(list[0]["name"], "bakso");
    }

    #[tokio::test]
    async fn test_update_with_malformed_body_is_rejected() {
        let server = seeded_server();

        let response = server.put("/menu/bakso").text("{not json").await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["code"], "MALFORMED_REQUEST");
    }
}

// =============================================================================
// Delete Tests
// =============================================================================

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_returns_removed_item() {
        let server = seeded_server();

        let response = server.delete("/menu/bakmie").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["order_code"], "bakmie");

        let list: Vec<Value> = server.get("/menu").await.json();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["order_code"], "bakso");
    }

    #[tokio::test]
    async fn test_delete_unknown_code_is_not_found() {
        let server = seeded_server();

        let response = server.delete("/menu/unknown").await;
        response.assert_status_not_found();

        let body: Value = response.json();
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found_without_further_mutation() {
        let server = seeded_server();

        server.delete("/menu/bakso").await.assert_status_ok();
        server.delete("/menu/bakso").await.assert_status_not_found();

        let list: Vec<Value> = server.get("/menu").await.json();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["order_code"], "bakmie");
    }
}
