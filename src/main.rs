// src/main.rs
use std::io::{self, BufRead, Write};

use dotenvy::dotenv;
use tracing_subscriber::fmt::init as tracing_init;

use khata_billing::catalog::CatalogCache;
use khata_billing::clients::{HttpBillPersistence, HttpCatalogService};
use khata_billing::error::BillingError;
use khata_billing::models::row::{Row, Selection};
use khata_billing::numeric::format_currency;
use khata_billing::rows::{RowCollection, RowEdit, RowId};
use khata_billing::submit::submit_bill;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    let base_url =
        std::env::var("KHATA_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
    let default_payment =
        std::env::var("KHATA_PAYMENT_METHOD").unwrap_or_else(|_| "Cash".to_string());

    let client = reqwest::Client::new();
    let catalog_service = HttpCatalogService::new(client.clone(), &base_url);
    let persistence = HttpBillPersistence::new(client, &base_url);

    // The catalog load gates first-row creation; an empty cache just means
    // rows degrade to custom-only entry.
    let catalog = CatalogCache::load(&catalog_service).await;
    if catalog.is_empty() {
        println!("No catalog items available; rows can still be filled as custom entries.");
    }
    let mut rows = RowCollection::new();

    println!("khata billing - type 'help' for commands");
    loop {
        print!("> ");
        io::stdout().flush().ok();
        let Some(line) = read_line() else { break };
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["help"] => print_help(),
            ["items"] => {
                for item in catalog.all() {
                    println!(
                        "  {}  {} ({}) - {}",
                        item.id,
                        item.name,
                        item.unit,
                        format_currency(item.price)
                    );
                }
            }
            ["add"] => {
                rows.add_row();
                print_table(&rows, &catalog);
            }
            ["rm", n] => {
                match row_id(&rows, n) {
                    Some(id) => match rows.remove_row(id) {
                        Ok(()) => print_table(&rows, &catalog),
                        Err(err) => println!("{err}"),
                    },
                    None => println!("no such row"),
                };
            }
            ["pick", n, item] => {
                let Ok(item_id) = item.parse::<i64>() else {
                    println!("item id must be a number");
                    continue;
                };
                edit(&mut rows, n, RowEdit::Select(Selection::CatalogItem(item_id)), &catalog);
            }
            ["custom", n] => edit(&mut rows, n, RowEdit::Select(Selection::Custom), &catalog),
            ["blank", n] => edit(&mut rows, n, RowEdit::Select(Selection::Empty), &catalog),
            ["price", n, value] => edit(&mut rows, n, RowEdit::Price(value.to_string()), &catalog),
            ["qty", n, value] => edit(&mut rows, n, RowEdit::Quantity(value.to_string()), &catalog),
            ["unit", n, rest @ ..] => {
                edit(&mut rows, n, RowEdit::Unit(rest.join(" ")), &catalog)
            }
            ["show"] => print_table(&rows, &catalog),
            ["clear"] => {
                rows.clear_and_seed();
                print_table(&rows, &catalog);
            }
            ["save", rest @ ..] => {
                let method = if rest.is_empty() {
                    default_payment.clone()
                } else {
                    rest.join(" ")
                };
                // Blocks on stdin for each custom row label.
                let mut prompt = |_: &Row| -> Option<String> {
                    print!("Enter custom item name: ");
                    io::stdout().flush().ok();
                    read_line()
                };
                match submit_bill(&rows, &catalog, &method, &mut prompt, &persistence).await {
                    Ok(bill_id) => {
                        println!("Bill saved (id: {bill_id})");
                        println!("View it at {base_url}/bill/{bill_id}");
                        rows.clear_and_seed();
                    }
                    Err(BillingError::EmptyBill) => println!("Add items before saving."),
                    Err(err) => {
                        tracing::error!(error = %err, "bill submission failed");
                        println!("Error saving bill.");
                    }
                }
            }
            ["quit"] | ["exit"] => break,
            _ => println!("unknown command, type 'help'"),
        }
    }
}

fn read_line() -> Option<String> {
    let mut buf = String::new();
    match io::stdin().lock().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim_end_matches(['\r', '\n']).to_string()),
        Err(_) => None,
    }
}

fn row_id(rows: &RowCollection, n: &str) -> Option<RowId> {
    let position = n.parse::<usize>().ok()?.checked_sub(1)?;
    rows.id_at(position)
}

fn edit(rows: &mut RowCollection, n: &str, change: RowEdit, catalog: &CatalogCache) {
    match row_id(rows, n) {
        Some(id) => match rows.edit(id, change, catalog) {
            Ok(()) => print_table(rows, catalog),
            Err(err) => println!("{err}"),
        },
        None => println!("no such row"),
    }
}

fn selection_label(row: &Row, catalog: &CatalogCache) -> String {
    match &row.selection {
        Selection::Empty => "-".to_string(),
        Selection::Custom => "custom".to_string(),
        Selection::CatalogItem(id) => catalog
            .lookup(*id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| id.to_string()),
    }
}

fn print_table(rows: &RowCollection, catalog: &CatalogCache) {
    println!("  #  item             unit     price        qty      subtotal");
    for (position, (_, row)) in rows.rows().enumerate() {
        println!(
            "  {:<2} {:<16} {:<8} {:<12} {:<8} {}",
            position + 1,
            selection_label(row, catalog),
            row.unit,
            format_currency(row.price),
            row.quantity,
            format_currency(row.subtotal())
        );
    }
    println!("  Total: {}", format_currency(rows.total()));
}

fn print_help() {
    println!("  items            list catalog items");
    println!("  add              append an empty row");
    println!("  rm <row>         remove a row");
    println!("  pick <row> <id>  bind a row to a catalog item");
    println!("  custom <row>     switch a row to a custom entry");
    println!("  blank <row>      reset a row");
    println!("  price <row> <v>  set unit price");
    println!("  qty <row> <v>    set quantity");
    println!("  unit <row> <u>   set unit text (custom rows only)");
    println!("  show             print the bill table");
    println!("  clear            drop all rows and start over");
    println!("  save [method]    save the bill (default payment: Cash)");
    println!("  quit             exit");
}
