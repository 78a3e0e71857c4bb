//! Bookstore application service.

use chrono::NaiveDate;
use tracing::{debug, info};

use bookstore_core::{DomainError, DomainResult};
use bookstore_invoicing::{InMemoryInvoiceRepository, Invoice, InvoiceNumber, InvoiceRepository};
use bookstore_parties::Customer;
use bookstore_products::{Stock, parse_price};
use bookstore_sales::{Order, Shipping, ShippingStats};

use crate::config::BookstoreConfig;
use crate::dto::{CustomerInput, InvoiceSummary, StockInput, require_all_fields};

/// Customers, books and invoices of one store, plus its shipping statistics.
///
/// Registries are plain vectors in insertion order; lookups by name return the
/// first match. Invoices go through an [`InvoiceRepository`].
#[derive(Debug)]
pub struct Bookstore<R = InMemoryInvoiceRepository> {
    config: BookstoreConfig,
    customers: Vec<Customer>,
    stocks: Vec<Stock>,
    invoices: R,
    shipping_stats: ShippingStats,
}

impl Bookstore<InMemoryInvoiceRepository> {
    pub fn new(config: BookstoreConfig) -> Self {
        Self::with_repository(config, InMemoryInvoiceRepository::new())
    }
}

impl Default for Bookstore<InMemoryInvoiceRepository> {
    fn default() -> Self {
        Self::new(BookstoreConfig::default())
    }
}

impl<R: InvoiceRepository> Bookstore<R> {
    pub fn with_repository(config: BookstoreConfig, invoices: R) -> Self {
        Self {
            config,
            customers: Vec::new(),
            stocks: Vec::new(),
            invoices,
            shipping_stats: ShippingStats::new(),
        }
    }

    pub fn register_customer(&mut self, input: CustomerInput) -> DomainResult<Customer> {
        require_all_fields(&[&input.name, &input.phone, &input.email])?;
        let customer = Customer::new(input.name, input.phone, input.email)?;

        info!(customer = customer.name(), "customer registered");
        self.customers.push(customer.clone());
        Ok(customer)
    }

    pub fn add_stock(&mut self, input: StockInput) -> DomainResult<Stock> {
        require_all_fields(&[&input.name, &input.author, &input.price])?;
        let price = parse_price(&input.price)?;
        let stock = Stock::new(input.name, input.author, price)?;

        info!(book = stock.name(), price = %stock.price(), "book added to stock");
        self.stocks.push(stock.clone());
        Ok(stock)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    pub fn find_customer(&self, name: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.name() == name)
    }

    pub fn find_stock(&self, name: &str) -> Option<&Stock> {
        self.stocks.iter().find(|s| s.name() == name)
    }

    /// Order a registered book for a registered customer and invoice it.
    ///
    /// The shipping cost is computed exactly once, the invoice is numbered after
    /// the current invoice count, totalled and stored.
    pub fn place_order(
        &mut self,
        customer_name: &str,
        book_name: &str,
        is_urgent: bool,
        ship_date: NaiveDate,
    ) -> DomainResult<Invoice> {
        if customer_name.is_empty() || book_name.is_empty() {
            return Err(DomainError::validation("select both a customer and a book"));
        }

        let customer = self
            .find_customer(customer_name)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("customer '{customer_name}'")))?;
        let stock = self
            .find_stock(book_name)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("book '{book_name}'")))?;

        let mut shipping = Shipping::new(Order::new(customer, stock.clone()), ship_date);
        shipping.calc_ship_cost(is_urgent, &self.config.rates, &self.shipping_stats);

        let invoice_nbr = self.next_invoice_number();
        let mut invoice = Invoice::new(invoice_nbr, stock, shipping);
        let total = invoice.invoice();

        info!(
            invoice = %invoice.invoice_nbr(),
            customer = customer_name,
            book = book_name,
            urgent = is_urgent,
            total = %total,
            "order placed"
        );
        self.invoices.add(invoice.clone());
        Ok(invoice)
    }

    pub fn search_invoice(&self, invoice_nbr: &str) -> Option<Invoice> {
        let found = self.invoices.search(invoice_nbr);
        if found.is_none() {
            debug!(invoice = invoice_nbr, "invoice not found");
        }
        found
    }

    pub fn list_invoices(&self) -> Vec<Invoice> {
        self.invoices.list()
    }

    pub fn invoice_summaries(&self) -> Vec<InvoiceSummary> {
        self.invoices
            .list()
            .iter()
            .map(InvoiceSummary::from)
            .collect()
    }

    /// Urgent shipments priced by this store so far.
    pub fn urgent_shipments(&self) -> u64 {
        self.shipping_stats.urgent_count()
    }

    fn next_invoice_number(&self) -> InvoiceNumber {
        let index = self.invoices.len() as u64 + 1;
        InvoiceNumber::sequential(
            &self.config.invoice_prefix,
            self.config.invoice_number_width,
            index,
        )
    }
}
