use serde::{Deserialize, Serialize};

pub type ItemId = i64;

/// One purchasable good from the catalog. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub unit: String,
    pub price: f64,
}
