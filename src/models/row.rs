// src/models/row.rs
use crate::catalog::CatalogCache;
use crate::models::item::ItemId;
use crate::numeric::parse_or_zero;

/// What a row is bound to. Transitions happen only through explicit
/// selection changes, never as a side effect of other edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Empty,
    CatalogItem(ItemId),
    Custom,
}

/// One editable bill line. The subtotal is always derived, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub selection: Selection,
    pub unit: String,
    pub price: f64,
    pub quantity: f64,
}

impl Default for Row {
    fn default() -> Self {
        Self {
            selection: Selection::Empty,
            unit: String::new(),
            price: 0.0,
            quantity: 1.0,
        }
    }
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a selection change. Catalog rows copy the item's unit and price
    /// and lock the unit field; custom rows clear both and unlock the unit;
    /// blank resets and relocks. Quantity is left alone in every case.
    pub fn set_selection(&mut self, selection: Selection, catalog: &CatalogCache) {
        match selection {
            Selection::Empty | Selection::Custom => {
                self.unit.clear();
                self.price = 0.0;
            }
            Selection::CatalogItem(id) => match catalog.lookup(id) {
                Some(item) => {
                    self.unit = item.unit.clone();
                    self.price = item.price;
                }
                // Selection is still taken; prior fields are left as-is.
                None => tracing::warn!(item_id = id, "selected item missing from catalog"),
            },
        }
        self.selection = selection;
    }

    /// Always permitted, even for catalog-bound rows.
    pub fn set_price(&mut self, raw: &str) {
        self.price = parse_or_zero(raw);
    }

    pub fn set_quantity(&mut self, raw: &str) {
        self.quantity = parse_or_zero(raw);
    }

    /// Unit is free text only for custom rows; edits are dropped otherwise.
    pub fn set_unit(&mut self, raw: &str) {
        if self.unit_editable() {
            self.unit = raw.trim().to_string();
        }
    }

    pub fn unit_editable(&self) -> bool {
        matches!(self.selection, Selection::Custom)
    }

    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity
    }
}
