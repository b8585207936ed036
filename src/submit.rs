// src/submit.rs
use crate::catalog::CatalogCache;
use crate::clients::BillPersistence;
use crate::dtos::bill::SaveBillRequest;
use crate::error::BillingError;
use crate::models::bill::{Bill, BillLine};
use crate::models::row::{Row, Selection};
use crate::rows::RowCollection;

pub type BillId = i64;

const DEFAULT_CUSTOM_NAME: &str = "Custom";

/// Supplies a human label for custom rows at commit time. The interactive
/// binary blocks on stdin; tests inject canned names.
pub trait CustomNamePrompt {
    fn name_for(&mut self, row: &Row) -> Option<String>;
}

impl<F> CustomNamePrompt for F
where
    F: FnMut(&Row) -> Option<String>,
{
    fn name_for(&mut self, row: &Row) -> Option<String> {
        self(row)
    }
}

/// Assemble the bill candidate from the current rows.
///
/// Names are resolved for every row first, then rows are filtered: a row is
/// included only when `quantity > 0` and `price >= 0`. Rows failing the
/// filter are dropped silently. An empty result aborts before any network
/// activity.
pub fn build_bill(
    rows: &RowCollection,
    catalog: &CatalogCache,
    payment_method: &str,
    prompt: &mut dyn CustomNamePrompt,
) -> Result<Bill, BillingError> {
    let mut lines = Vec::new();
    for (_, row) in rows.rows() {
        let name = resolve_name(row, catalog, prompt);
        if row.quantity > 0.0 && row.price >= 0.0 {
            lines.push(BillLine {
                name,
                unit: row.unit.clone(),
                price: row.price,
                quantity: row.quantity,
                subtotal: row.subtotal(),
            });
        }
    }
    if lines.is_empty() {
        return Err(BillingError::EmptyBill);
    }
    let total = lines.iter().map(|line| line.subtotal).sum();
    Ok(Bill {
        lines,
        total,
        payment_method: payment_method.to_string(),
    })
}

fn resolve_name(row: &Row, catalog: &CatalogCache, prompt: &mut dyn CustomNamePrompt) -> String {
    match &row.selection {
        Selection::Custom => match prompt.name_for(row) {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => DEFAULT_CUSTOM_NAME.to_string(),
        },
        // Falls back to the raw id when the catalog no longer knows it.
        Selection::CatalogItem(id) => match catalog.lookup(*id) {
            Some(item) => item.name.clone(),
            None => id.to_string(),
        },
        Selection::Empty => String::new(),
    }
}

/// Build, validate, and persist the bill. Returns the identifier assigned by
/// the persistence service. Failures are terminal; nothing is retried.
pub async fn submit_bill(
    rows: &RowCollection,
    catalog: &CatalogCache,
    payment_method: &str,
    prompt: &mut dyn CustomNamePrompt,
    persistence: &dyn BillPersistence,
) -> Result<BillId, BillingError> {
    let bill = build_bill(rows, catalog, payment_method, prompt)?;
    tracing::info!(lines = bill.lines.len(), total = bill.total, "submitting bill");

    let response = persistence.save_bill(&SaveBillRequest::from(bill)).await?;
    if response.status == "ok" {
        if let Some(bill_id) = response.bill_id {
            tracing::info!(bill_id, "bill saved");
            return Ok(bill_id);
        }
    }
    tracing::error!(status = %response.status, "persistence rejected the bill");
    Err(BillingError::SaveFailed)
}
