// src/clients/http.rs
use async_trait::async_trait;
use reqwest::Client;

use crate::clients::{BillPersistence, CatalogService};
use crate::dtos::bill::{SaveBillRequest, SaveBillResponse};
use crate::dtos::catalog::CatalogItemDto;
use crate::error::BillingError;
use crate::models::item::Item;

fn normalize(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// `GET {base}/api/items` against the catalog service.
pub struct HttpCatalogService {
    client: Client,
    base_url: String,
}

impl HttpCatalogService {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize(base_url),
        }
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn fetch_items(&self) -> Result<Vec<Item>, BillingError> {
        let response = self
            .client
            .get(format!("{}/api/items", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(BillingError::malformed(format!(
                "catalog endpoint returned {}",
                response.status()
            )));
        }
        let items: Vec<CatalogItemDto> = response.json().await?;
        Ok(items.into_iter().map(Item::from).collect())
    }
}

/// `POST {base}/save_bill` against the persistence service.
pub struct HttpBillPersistence {
    client: Client,
    base_url: String,
}

impl HttpBillPersistence {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize(base_url),
        }
    }
}

#[async_trait]
impl BillPersistence for HttpBillPersistence {
    async fn save_bill(&self, request: &SaveBillRequest) -> Result<SaveBillResponse, BillingError> {
        let response = self
            .client
            .post(format!("{}/save_bill", self.base_url))
            .json(request)
            .send()
            .await?;
        // The body is decoded whatever the status; a non-"ok" payload is the
        // caller's signal that the save failed.
        let decoded = response.json().await?;
        Ok(decoded)
    }
}
