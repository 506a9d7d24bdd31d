//! # Order summary
//!
//! Turns an [`Order`] into the rows shown on the checkout page: one tile per
//! item in order, then a single total row. Items are tagged same-day or
//! next-day, and any next-day item raises the [`Banner::NextDayNotice`].

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::Order;
use crate::filter::TileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryTag {
    SameDay,
    NextDay,
}

impl DeliveryTag {
    pub fn css_class(self) -> &'static str {
        match self {
            DeliveryTag::SameDay => "same-day",
            DeliveryTag::NextDay => "next-day",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    NextDayNotice,
}

impl Banner {
    pub fn message(self) -> &'static str {
        match self {
            Banner::NextDayNotice => {
                "Część produktów w koszyku zostanie dostarczona następnego dnia roboczego. \
                 Zostały one wyróżnione poniżej: możesz je usunąć z koszyka \
                 lub złożyć na nie osobne zamówienie."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub tile: TileId,
    pub name: String,
    pub photo_url: Option<String>,
    /// `"3.50 zł / kg"`
    pub price: String,
    /// `"2 kg"`
    pub quantity: String,
    /// `"Razem: 7.00 zł"`
    pub line_total: String,
    pub tag: DeliveryTag,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryRow {
    Item(ItemRow),
    /// `"11.20 zł"`
    Total { amount: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub rows: Vec<SummaryRow>,
    pub banner: Option<Banner>,
}

impl OrderSummary {
    /// Tile ids of the item rows; the total row has none.
    pub fn tiles(&self) -> impl Iterator<Item = &TileId> {
        self.rows.iter().filter_map(|row| match row {
            SummaryRow::Item(item) => Some(&item.tile),
            SummaryRow::Total { .. } => None,
        })
    }
}

pub fn summarize(order: &Order) -> OrderSummary {
    let mut rows: Vec<SummaryRow> = order
        .items()
        .iter()
        .map(|item| {
            SummaryRow::Item(ItemRow {
                tile: item.tile_id(),
                name: item.display_name.clone(),
                photo_url: item.photo_url.clone(),
                price: format!("{} / {}", format_money(item.unit_price), item.unit),
                quantity: format_quantity(item.quantity, &item.unit),
                line_total: format!("Razem: {}", format_money(item.line_total)),
                tag: if item.is_next_day_delivery {
                    DeliveryTag::NextDay
                } else {
                    DeliveryTag::SameDay
                },
            })
        })
        .collect();

    let banner = rows
        .iter()
        .any(|row| matches!(row, SummaryRow::Item(item) if item.tag == DeliveryTag::NextDay))
        .then_some(Banner::NextDayNotice);

    rows.push(SummaryRow::Total {
        amount: format_money(order.grand_total()),
    });

    OrderSummary { rows, banner }
}

/// Exactly two decimals, cut toward zero: `11.2` → `"11.20"`, `4.199` → `"4.19"`.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", value.round_dp_with_strategy(2, RoundingStrategy::ToZero))
}

pub fn format_money(value: Decimal) -> String {
    format!("{} zł", format_amount(value))
}

/// Quantity without trailing zeros followed by the unit: `"1.5 kg"`.
pub fn format_quantity(quantity: Decimal, unit: &str) -> String {
    format!("{} {}", quantity.normalize(), unit)
}
