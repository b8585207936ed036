// src/dtos/bill.rs
use serde::{Deserialize, Serialize};

use crate::models::bill::{Bill, BillLine};

/// Body of `POST /save_bill`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveBillRequest {
    pub items: Vec<BillItemPayload>,
    pub total: f64,
    pub payment_method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillItemPayload {
    pub name: String,
    pub unit: String,
    pub price: f64,
    pub qty: f64,
    pub subtotal: f64,
}

/// Persistence service answer. Anything other than `status == "ok"` with a
/// bill id present is treated as a failed save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveBillResponse {
    pub status: String,
    #[serde(default)]
    pub bill_id: Option<i64>,
}

impl From<BillLine> for BillItemPayload {
    fn from(line: BillLine) -> Self {
        Self {
            name: line.name,
            unit: line.unit,
            price: line.price,
            qty: line.quantity,
            subtotal: line.subtotal,
        }
    }
}

impl From<Bill> for SaveBillRequest {
    fn from(bill: Bill) -> Self {
        Self {
            items: bill.lines.into_iter().map(BillItemPayload::from).collect(),
            total: bill.total,
            payment_method: bill.payment_method,
        }
    }
}
