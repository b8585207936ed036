// HTTP collaborator tests against in-process mock servers.
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;

use khata_billing::catalog::CatalogCache;
use khata_billing::clients::{
    BillPersistence, CatalogService, HttpBillPersistence, HttpCatalogService,
};
use khata_billing::dtos::bill::SaveBillRequest;
use khata_billing::models::row::{Row, Selection};
use khata_billing::rows::{RowCollection, RowEdit};
use khata_billing::submit::submit_bill;

async fn spawn_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn catalog_fetch_round_trips() {
    let app = Router::new().route(
        "/api/items",
        get(|| async {
            Json(json!([
                {"id": 1, "name": "Rice", "unit": "kg", "price": 50.0},
                {"id": 2, "name": "Dal", "unit": "kg", "price": 95.5},
            ]))
        }),
    );
    let base_url = spawn_server(app).await;

    let service = HttpCatalogService::new(reqwest::Client::new(), &base_url);
    let items = service.fetch_items().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Rice");
    assert_eq!(items[1].price, 95.5);

    let cache = CatalogCache::load(&service).await;
    assert_eq!(cache.lookup(2).unwrap().unit, "kg");
}

#[tokio::test]
async fn failed_catalog_fetch_leaves_the_cache_empty() {
    let app = Router::new().route(
        "/api/items",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base_url = spawn_server(app).await;

    let service = HttpCatalogService::new(reqwest::Client::new(), &base_url);
    let cache = CatalogCache::load(&service).await;
    assert!(cache.is_empty());
}

#[tokio::test]
async fn non_array_catalog_payload_is_an_error() {
    let app = Router::new().route(
        "/api/items",
        get(|| async { Json(json!({"error": "not logged in"})) }),
    );
    let base_url = spawn_server(app).await;

    let service = HttpCatalogService::new(reqwest::Client::new(), &base_url);
    assert!(service.fetch_items().await.is_err());
}

#[tokio::test]
async fn save_bill_posts_the_payload_and_returns_the_id() {
    let captured: Arc<Mutex<Option<SaveBillRequest>>> = Arc::new(Mutex::new(None));
    let captured_in = captured.clone();
    let app = Router::new().route(
        "/save_bill",
        post(move |Json(request): Json<SaveBillRequest>| {
            let captured = captured_in.clone();
            async move {
                *captured.lock().unwrap() = Some(request);
                Json(json!({"status": "ok", "bill_id": 42}))
            }
        }),
    );
    let base_url = spawn_server(app).await;

    let catalog = CatalogCache::from_items(vec![khata_billing::models::item::Item {
        id: 1,
        name: "Rice".to_string(),
        unit: "kg".to_string(),
        price: 50.0,
    }]);
    let mut rows = RowCollection::new();
    let first = rows.id_at(0).unwrap();
    rows.edit(first, RowEdit::Select(Selection::CatalogItem(1)), &catalog)
        .unwrap();
    rows.edit(first, RowEdit::Quantity("3".to_string()), &catalog)
        .unwrap();

    let persistence = HttpBillPersistence::new(reqwest::Client::new(), &base_url);
    let mut prompt = |_: &Row| -> Option<String> { None };
    let bill_id = submit_bill(&rows, &catalog, "Cash", &mut prompt, &persistence)
        .await
        .unwrap();
    assert_eq!(bill_id, 42);

    let sent = captured.lock().unwrap().take().unwrap();
    assert_eq!(sent.items.len(), 1);
    assert_eq!(sent.items[0].name, "Rice");
    assert_eq!(sent.items[0].qty, 3.0);
    assert_eq!(sent.items[0].subtotal, 150.0);
    assert_eq!(sent.total, 150.0);
    assert_eq!(sent.payment_method, "Cash");
}

#[tokio::test]
async fn rejection_body_without_status_fails_the_save() {
    let app = Router::new().route(
        "/save_bill",
        post(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"error": "not logged in"}))) }),
    );
    let base_url = spawn_server(app).await;

    let persistence = HttpBillPersistence::new(reqwest::Client::new(), &base_url);
    let request = SaveBillRequest {
        items: Vec::new(),
        total: 0.0,
        payment_method: "Cash".to_string(),
    };
    assert!(persistence.save_bill(&request).await.is_err());
}

#[tokio::test]
async fn non_ok_status_in_the_response_is_a_failed_save() {
    let app = Router::new().route(
        "/save_bill",
        post(|| async { Json(json!({"status": "error"})) }),
    );
    let base_url = spawn_server(app).await;

    let catalog = CatalogCache::from_items(Vec::new());
    let mut rows = RowCollection::new();
    let first = rows.id_at(0).unwrap();
    rows.edit(first, RowEdit::Select(Selection::Custom), &catalog)
        .unwrap();
    rows.edit(first, RowEdit::Price("10".to_string()), &catalog)
        .unwrap();

    let persistence = HttpBillPersistence::new(reqwest::Client::new(), &base_url);
    let mut prompt = |_: &Row| Some("Tea".to_string());
    let err = submit_bill(&rows, &catalog, "Cash", &mut prompt, &persistence)
        .await
        .unwrap_err();
    assert!(matches!(err, khata_billing::error::BillingError::SaveFailed));
}
