// src/models/bill.rs

/// Finalized snapshot of one eligible row at submission time.
#[derive(Debug, Clone, PartialEq)]
pub struct BillLine {
    pub name: String,
    pub unit: String,
    pub price: f64,
    pub quantity: f64,
    pub subtotal: f64,
}

/// The finished bill. Built transiently inside the save action, sent once,
/// then discarded; never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub lines: Vec<BillLine>,
    pub total: f64,
    pub payment_method: String,
}
