//! API integration tests
//!
//! These run against a live server with a reachable database.
//! Run with: cargo test -- --ignored

use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5000";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "OK");
    assert_eq!(body["database"], "connected");
    assert!(body["uptime"].is_number());
    assert!(body["port"].is_number());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_list_products() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/products", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_product_lifecycle() {
    let client = Client::new();

    // Create with minimal fields, the rest is defaulted
    let response = client
        .post(format!("{}/api/products", BASE_URL))
        .json(&json!({
            "name": "Test Castle",
            "description": "Integration test unit",
            "category": "Bounce House"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_str().expect("No product id").to_string();
    let product_id = body["productId"].as_i64().expect("No productId");
    assert_eq!(body["status"], "Available");
    assert_eq!(body["image"], "");

    // Fetch by the numeric business key
    let response = client
        .get(format!("{}/api/products/{}", BASE_URL, product_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"].as_str(), Some(id.as_str()));

    // Partial update leaves the other fields alone
    let response = client
        .put(format!("{}/api/products/{}", BASE_URL, id))
        .json(&json!({ "status": "Maintenance" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Maintenance");
    assert_eq!(body["name"], "Test Castle");

    // Delete
    let response = client
        .delete(format!("{}/api/products/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Product removed");

    // Gone now
    let response = client
        .get(format!("{}/api/products/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_product_invalid_category() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/products", BASE_URL))
        .json(&json!({
            "name": "Test",
            "description": "Test",
            "category": "Petting Zoo"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_booking_lifecycle() {
    let client = Client::new();

    let booking_ref = format!("BK-TEST-{}", Utc::now().timestamp_millis());
    let response = client
        .post(format!("{}/api/bookings", BASE_URL))
        .json(&json!({
            "bookingId": booking_ref,
            "customer": {
                "name": "Ama Mensah",
                "phone": "+233201234567",
                "email": "ama@example.com"
            },
            "product": { "id": 1001, "name": "Test Castle" },
            "date": Utc::now().to_rfc3339(),
            "totalAmount": 300.0
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_str().expect("No booking id").to_string();
    assert_eq!(body["status"], "Pending");
    assert_eq!(body["time"], "10:00");
    assert_eq!(body["duration"]["id"], "4-hours");

    // Status-only update keeps the customer snapshot
    let response = client
        .put(format!("{}/api/bookings/{}", BASE_URL, id))
        .json(&json!({ "status": "Confirmed" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Confirmed");
    assert_eq!(body["customer"]["name"], "Ama Mensah");

    let response = client
        .delete(format!("{}/api/bookings/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Booking removed");
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_booking_is_404() {
    let client = Client::new();

    let response = client
        .delete(format!(
            "{}/api/bookings/00000000-0000-0000-0000-000000000000",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_revenue_report_weekly() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/reports/revenue?period=weekly", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["type"], "revenue");
    assert_eq!(body["period"], "weekly");
    assert!(body["value"].as_f64().expect("No value") >= 0.0);
    assert_eq!(body["metadata"]["currency"], "GHS");
    assert!(body["metadata"]["bookingCount"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_generate_reports_inserts_fresh_rows() {
    let client = Client::new();

    let generate = || async {
        let response = client
            .post(format!("{}/api/reports/generate", BASE_URL))
            .json(&json!({ "period": "daily" }))
            .send()
            .await
            .expect("Failed to send request");
        assert!(response.status().is_success());
        let body: Value = response.json().await.expect("Failed to parse response");
        let reports = body.as_array().expect("Not an array").clone();
        assert_eq!(reports.len(), 3);
        reports
    };

    // Repeated generation produces distinct rows, not upserts
    let first = generate().await;
    let second = generate().await;

    let first_ids: Vec<&str> = first.iter().filter_map(|r| r["id"].as_str()).collect();
    let second_ids: Vec<&str> = second.iter().filter_map(|r| r["id"].as_str()).collect();
    assert!(first_ids.iter().all(|id| !second_ids.contains(id)));
}

#[tokio::test]
#[ignore]
async fn test_equipment_utilization_report() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/api/reports/equipment-utilization?period=monthly",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["type"], "equipment-utilization");
    let value = body["value"].as_f64().expect("No value");
    assert!((0.0..=100.0).contains(&value));
    assert!(body["metadata"]["totalProducts"].is_number());
    assert!(body["metadata"]["inUseProducts"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_activity_feed() {
    let client = Client::new();

    // Append an entry without ipAddress, the server fills it in
    let response = client
        .post(format!("{}/api/activities", BASE_URL))
        .json(&json!({
            "action": "Integration test ping",
            "user": "tester",
            "details": { "source": "api_tests" }
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_str().expect("No activity id").to_string();
    assert_eq!(body["user"], "tester");
    assert!(body["time"].as_str().expect("No time").ends_with("ago"));

    // Feed respects the limit parameter
    let response = client
        .get(format!("{}/api/activities?limit=5", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let feed = body.as_array().expect("Not an array");
    assert!(feed.len() <= 5);

    // Detail view carries the context and the captured peer address
    let response = client
        .get(format!("{}/api/activities/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["details"]["source"], "api_tests");
    assert!(body["ipAddress"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_list_reports_filtered() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/reports?type=revenue&period=weekly", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let reports = body.as_array().expect("Not an array");
    assert!(reports.len() <= 50);
    for report in reports {
        assert_eq!(report["type"], "revenue");
        assert_eq!(report["period"], "weekly");
    }
}
