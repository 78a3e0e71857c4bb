use bookstore_app::{Bookstore, BookstoreConfig, CustomerInput, StockInput};
use bookstore_core::{DomainError, Money};
use bookstore_invoicing::{InMemoryInvoiceRepository, Invoice, InvoiceRepository};
use bookstore_parties::Customer;
use bookstore_products::Stock;
use bookstore_sales::{Order, Shipping, ShippingRates, ShippingStats};
use chrono::NaiveDate;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
}

fn build_invoice(
    nbr: &str,
    customer: Customer,
    stock: Stock,
    is_urgent: bool,
    stats: &ShippingStats,
) -> Invoice {
    let mut shipping = Shipping::new(Order::new(customer, stock.clone()), date(15));
    let cost = shipping.calc_ship_cost(is_urgent, &ShippingRates::default(), stats);
    shipping.set_ship_cost(cost);
    Invoice::new(nbr, stock, shipping)
}

#[test]
fn domain_walkthrough_matches_worked_examples() {
    let stats = ShippingStats::new();
    let repo = InMemoryInvoiceRepository::new();

    let alice = Customer::new("Alice", "1234567890", "alice@example.com").unwrap();
    let bob = Customer::new("Bob", "9876543210", "bob@example.com").unwrap();
    let charlie = Customer::new("Charlie", "5555555555", "charlie@example.com").unwrap();

    let orwell = Stock::new("1984", "George Orwell", Money::from_cents(899)).unwrap();
    let lee = Stock::new("To Kill a Mockingbird", "Harper Lee", Money::from_cents(1299)).unwrap();
    let salinger =
        Stock::new("The Catcher in the Rye", "J.D. Salinger", Money::from_cents(999)).unwrap();

    let mut first = build_invoice("INV0001", alice.clone(), orwell.clone(), false, &stats);
    let mut second = build_invoice("INV0002", bob, lee, true, &stats);
    let mut third = build_invoice("INV0003", charlie, salinger, false, &stats);

    assert_eq!(first.invoice(), Money::from_cents(1294));
    assert_eq!(second.invoice(), Money::from_cents(1844));
    assert_eq!(third.invoice(), Money::from_cents(1394));
    assert_eq!(stats.urgent_count(), 1);

    repo.add(first);
    repo.add(second.clone());
    repo.add(third);
    assert_eq!(repo.len(), 3);

    assert_eq!(repo.search("INV0002"), Some(second));
    assert_eq!(repo.search("INV0099"), None);

    let mut urgent = build_invoice("INV0004", alice, orwell, true, &stats);
    assert_eq!(urgent.invoice(), Money::from_cents(1444));
    assert_eq!(stats.urgent_count(), 2);
}

#[test]
fn store_session_end_to_end() {
    let mut store = Bookstore::new(BookstoreConfig::default());

    for (name, phone, email) in [
        ("Alice", "1234567890", "alice@example.com"),
        ("Bob", "9876543210", "bob@example.com"),
    ] {
        store
            .register_customer(CustomerInput {
                name: name.into(),
                phone: phone.into(),
                email: email.into(),
            })
            .unwrap();
    }
    store
        .add_stock(StockInput {
            name: "1984".into(),
            author: "George Orwell".into(),
            price: "8.99".into(),
        })
        .unwrap();

    store.place_order("Alice", "1984", false, date(15)).unwrap();
    store.place_order("Bob", "1984", true, date(16)).unwrap();
    store.place_order("Alice", "1984", false, date(17)).unwrap();

    let second = store.search_invoice("INV0002").unwrap();
    assert_eq!(second.shipping().order().customer().name(), "Bob");
    assert_eq!(second.total_cost(), Some(Money::from_cents(1444)));
    assert_eq!(second.shipping().ship_date(), date(16));

    assert!(store.search_invoice("INV0099").is_none());
    assert_eq!(store.urgent_shipments(), 1);

    let listing: Vec<String> = store
        .invoice_summaries()
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(
        listing,
        vec!["INV0001: 12.94", "INV0002: 14.44", "INV0003: 12.94"]
    );
}

#[test]
fn price_beyond_decimal_range_is_rejected_not_panicking() {
    let mut store = Bookstore::new(BookstoreConfig::default());
    store
        .register_customer(CustomerInput {
            name: "A".into(),
            phone: "1".into(),
            email: "a@b".into(),
        })
        .unwrap();

    let err = store
        .add_stock(StockInput {
            name: "B".into(),
            author: "C".into(),
            price: "79228162514264337593543950335".into(),
        })
        .unwrap_err();
    assert_eq!(err, DomainError::validation("price must not exceed 1000000000.00"));

    assert!(store.place_order("A", "B", false, date(15)).is_err());
    assert!(store.list_invoices().is_empty());
}

#[test]
fn validation_errors_reach_the_caller_with_reason() {
    let mut store = Bookstore::new(BookstoreConfig::default());

    let err = store
        .add_stock(StockInput {
            name: "1984".into(),
            author: "   ".into(),
            price: "8.99".into(),
        })
        .unwrap_err();
    assert_eq!(err, DomainError::validation("author cannot be empty"));
    assert_eq!(err.reason(), "author cannot be empty");
}
