use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::{tile_id, TileId};

/// One line of a computed order, as supplied by the order service.
///
/// `line_total` is expected to equal `unit_price * quantity`; it is taken as
/// given and never recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub display_name: String,
    pub unit_price: Decimal,
    pub unit: String,
    pub quantity: Decimal,
    pub line_total: Decimal,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub is_next_day_delivery: bool,
}

impl OrderItem {
    pub fn tile_id(&self) -> TileId {
        tile_id(&self.display_name)
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Item name is blank")]
    BlankName,
    #[error("Duplicate item: {0}")]
    DuplicateItem(String),
    #[error("Items {first:?} and {second:?} share the tile id {tile}")]
    TileCollision { first: String, second: String, tile: TileId },
}

/// A computed order ready for checkout: items in insertion order plus the
/// grand total.
///
/// Validated once on construction. The grand total is trusted as supplied
/// and not checked against the line totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrderDraft")]
pub struct Order {
    items: Vec<OrderItem>,
    grand_total: Decimal,
}

/// Wire shape of an [`Order`] before validation.
#[derive(Deserialize)]
struct OrderDraft {
    items: Vec<OrderItem>,
    grand_total: Decimal,
}

impl TryFrom<OrderDraft> for Order {
    type Error = OrderError;

    fn try_from(draft: OrderDraft) -> Result<Self, Self::Error> {
        Order::new(draft.items, draft.grand_total)
    }
}

impl Order {
    pub fn new(items: Vec<OrderItem>, grand_total: Decimal) -> Result<Self, OrderError> {
        let mut names = HashSet::new();
        let mut tiles: HashMap<TileId, &str> = HashMap::new();

        for item in &items {
            let tile = item.tile_id();
            if tile.as_str().is_empty() {
                return Err(OrderError::BlankName);
            }
            if !names.insert(item.display_name.as_str()) {
                return Err(OrderError::DuplicateItem(item.display_name.clone()));
            }
            if let Some(first) = tiles.insert(tile.clone(), &item.display_name) {
                return Err(OrderError::TileCollision {
                    first: first.to_string(),
                    second: item.display_name.clone(),
                    tile,
                });
            }
        }

        Ok(Self { items, grand_total })
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn grand_total(&self) -> Decimal {
        self.grand_total
    }

    pub fn has_next_day_items(&self) -> bool {
        self.items.iter().any(|item| item.is_next_day_delivery)
    }
}
