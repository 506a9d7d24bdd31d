use chrono::NaiveDate;

use super::{CustomerInfo, Order, PaymentMethod};
use crate::summary::{format_amount, format_quantity};

pub const CONFIRMATION_SUBJECT: &str = "Potwierdzenie złożenia zamówienia";

/// A submitted order, identified by its `NNN-NNN` number.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub number: String,
    pub order: Order,
    pub customer: CustomerInfo,
    pub payment_method: PaymentMethod,
    pub delivery_date: NaiveDate,
}

/// Payload for storing a new order; the number is assigned by the store.
#[derive(Debug, Clone)]
pub struct PlacedOrderCreate {
    pub order: Order,
    pub customer: CustomerInfo,
    pub payment_method: PaymentMethod,
    pub delivery_date: NaiveDate,
}

impl PlacedOrder {
    pub fn new(number: String, params: PlacedOrderCreate) -> Self {
        Self {
            number,
            order: params.order,
            customer: params.customer,
            payment_method: params.payment_method,
            delivery_date: params.delivery_date,
        }
    }

    pub fn delivery_date_label(&self) -> String {
        self.delivery_date.format("%d.%m.%Y").to_string()
    }

    /// Message to the customer, shown on the confirmation page and mailed
    /// when they left an address.
    pub fn confirmation_message(&self) -> String {
        format!(
            "Dziękujemy za złożenie zamówienia numer {}.\n\n\
             Poniżej znajdziesz listę zamówionych artykułów:\n{}\n\
             Razem: {} zł.\n\n{}",
            self.number,
            self.item_lines(),
            format_amount(self.order.grand_total()),
            self.details(),
        )
    }

    /// `"Nowe zamówienie - Poznań"`
    pub fn new_order_subject(&self) -> String {
        format!("Nowe zamówienie - {}", self.customer.city)
    }

    /// Notification for the shop.
    pub fn new_order_message(&self) -> String {
        format!(
            "Złożono nowe zamówienie numer {}.\n\n\
             Lista artykułów:\n{}\n\
             Suma: {} zł.\n\n{}",
            self.number,
            self.item_lines(),
            format_amount(self.order.grand_total()),
            self.details(),
        )
    }

    fn item_lines(&self) -> String {
        self.order
            .items()
            .iter()
            .map(|item| {
                format!(
                    "- {}: {} = {} zł\n",
                    item.display_name,
                    format_quantity(item.quantity, &item.unit),
                    format_amount(item.line_total)
                )
            })
            .collect()
    }

    /// Payment, delivery date, address and the comments if there are any.
    fn details(&self) -> String {
        let mut details = format!(
            "Forma płatności: {}\n\nTermin dostawy: {}\n\nAdres dostawy:\n{}\n{}\nTel. {}",
            self.payment_method,
            self.delivery_date_label(),
            self.customer.street_line(),
            self.customer.city,
            self.customer.phone,
        );
        if !self.customer.comments.is_empty() {
            details.push_str("\n\nUwagi:\n");
            details.push_str(&self.customer.comments);
        }
        details
    }
}
