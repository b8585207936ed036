pub mod http;

pub use http::{HttpBillPersistence, HttpCatalogService};

use async_trait::async_trait;

use crate::dtos::bill::{SaveBillRequest, SaveBillResponse};
use crate::error::BillingError;
use crate::models::item::Item;

/// Read-only source of purchasable items.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn fetch_items(&self) -> Result<Vec<Item>, BillingError>;
}

/// Accepts a finished bill and hands back the stored identifier.
#[async_trait]
pub trait BillPersistence: Send + Sync {
    async fn save_bill(&self, request: &SaveBillRequest) -> Result<SaveBillResponse, BillingError>;
}
