// src/dtos/catalog.rs
use serde::{Deserialize, Serialize};

use crate::models::item::{Item, ItemId};

/// Wire shape of one entry in the `GET /api/items` array.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogItemDto {
    pub id: ItemId,
    pub name: String,
    pub unit: String,
    pub price: f64,
}

// Convert from wire DTO to domain model
impl From<CatalogItemDto> for Item {
    fn from(dto: CatalogItemDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            unit: dto.unit,
            price: dto.price,
        }
    }
}
