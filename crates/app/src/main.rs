//! `bookstore` — replays a small ordering session against the in-memory store.
//!
//! Pass `--json` to print the invoice listing as JSON.

use anyhow::Context;
use chrono::NaiveDate;

use bookstore_app::{Bookstore, BookstoreConfig, CustomerInput, StockInput};

fn main() -> anyhow::Result<()> {
    bookstore_observability::init();

    let json = std::env::args().any(|a| a == "--json");
    let mut store = Bookstore::new(BookstoreConfig::from_env());

    let customers = [
        ("Alice", "1234567890", "alice@example.com"),
        ("Bob", "9876543210", "bob@example.com"),
        ("Charlie", "5555555555", "charlie@example.com"),
    ];
    for (name, phone, email) in customers {
        store
            .register_customer(CustomerInput {
                name: name.to_string(),
                phone: phone.to_string(),
                email: email.to_string(),
            })
            .with_context(|| format!("registering customer {name}"))?;
    }

    let books = [
        ("1984", "George Orwell", "8.99"),
        ("To Kill a Mockingbird", "Harper Lee", "12.99"),
        ("The Catcher in the Rye", "J.D. Salinger", "9.99"),
    ];
    for (name, author, price) in books {
        store
            .add_stock(StockInput {
                name: name.to_string(),
                author: author.to_string(),
                price: price.to_string(),
            })
            .with_context(|| format!("adding book {name}"))?;
    }

    let orders = [
        ("Alice", "1984", false, 15),
        ("Bob", "To Kill a Mockingbird", true, 16),
        ("Charlie", "The Catcher in the Rye", false, 17),
    ];
    for (customer, book, is_urgent, day) in orders {
        let ship_date = NaiveDate::from_ymd_opt(2025, 1, day).context("invalid ship date")?;
        store
            .place_order(customer, book, is_urgent, ship_date)
            .with_context(|| format!("placing order for {customer}"))?;
    }

    let summaries = store.invoice_summaries();
    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        println!("Number of invoices: {}", summaries.len());
        for summary in &summaries {
            println!("{summary}");
        }
        println!("Urgent shipments: {}", store.urgent_shipments());
    }

    for nbr in ["INV0002", "INV0004"] {
        match store.search_invoice(nbr) {
            Some(invoice) => println!(
                "Found invoice {}, total {}",
                invoice.invoice_nbr(),
                invoice.calculate_total()
            ),
            None => println!("Invoice {nbr} not found"),
        }
    }

    Ok(())
}
