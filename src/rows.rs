// src/rows.rs
use crate::catalog::CatalogCache;
use crate::error::BillingError;
use crate::models::row::{Row, Selection};

/// Stable handle to a row, valid until the row is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(u64);

/// Edit command dispatched to a single row. Numeric fields carry the raw
/// input text and are coerced through parse-or-zero inside the row.
#[derive(Debug, Clone)]
pub enum RowEdit {
    Select(Selection),
    Price(String),
    Quantity(String),
    Unit(String),
}

struct RowEntry {
    id: RowId,
    row: Row,
}

/// Ordered, mutable set of bill rows. Every mutation, structural or
/// field-level, synchronously refreshes the aggregate total, so the total
/// read back is always consistent with the current rows.
pub struct RowCollection {
    entries: Vec<RowEntry>,
    next_id: u64,
    total: f64,
}

impl RowCollection {
    /// Starts with a single empty row, matching the billing page at load.
    pub fn new() -> Self {
        let mut collection = Self {
            entries: Vec::new(),
            next_id: 0,
            total: 0.0,
        };
        collection.add_row();
        collection
    }

    pub fn add_row(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.entries.push(RowEntry { id, row: Row::new() });
        self.recompute();
        id
    }

    pub fn remove_row(&mut self, id: RowId) -> Result<(), BillingError> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            return Err(BillingError::RowNotFound);
        }
        self.recompute();
        Ok(())
    }

    pub fn edit(
        &mut self,
        id: RowId,
        edit: RowEdit,
        catalog: &CatalogCache,
    ) -> Result<(), BillingError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(BillingError::RowNotFound)?;
        match edit {
            RowEdit::Select(selection) => entry.row.set_selection(selection, catalog),
            RowEdit::Price(raw) => entry.row.set_price(&raw),
            RowEdit::Quantity(raw) => entry.row.set_quantity(&raw),
            RowEdit::Unit(raw) => entry.row.set_unit(&raw),
        }
        self.recompute();
        Ok(())
    }

    /// Drop every row and seed a fresh empty one (the Clear action).
    pub fn clear_and_seed(&mut self) {
        self.entries.clear();
        self.add_row();
    }

    pub fn rows(&self) -> impl Iterator<Item = (RowId, &Row)> + '_ {
        self.entries.iter().map(|entry| (entry.id, &entry.row))
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.row)
    }

    /// Handle of the row at a display position.
    pub fn id_at(&self, position: usize) -> Option<RowId> {
        self.entries.get(position).map(|entry| entry.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregate kept in lockstep with the rows.
    pub fn total(&self) -> f64 {
        self.total
    }

    fn recompute(&mut self) {
        self.total = bill_total(self.entries.iter().map(|entry| &entry.row));
        tracing::debug!(total = self.total, rows = self.entries.len(), "total recomputed");
    }
}

impl Default for RowCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure aggregate over row subtotals.
pub fn bill_total<'a>(rows: impl Iterator<Item = &'a Row>) -> f64 {
    rows.map(Row::subtotal).sum()
}
