use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Closed set of menu categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Main,
    Side,
    Dessert,
    Drink,
}

/// A purchasable catalog entry with price and stock.
///
/// `available_quantity` is the sole field mutated outside admin edits —
/// and only through `CatalogStore::try_reserve` / `release`. Orders
/// snapshot `price` at reservation time, so later edits never affect
/// already-placed orders.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub available_quantity: u32,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating or replacing a menu item.
#[derive(Clone, Debug, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub available_quantity: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewMenuItem {
    /// Check display strings are non-empty and the price is non-negative.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty");
        }
        if self.description.trim().is_empty() {
            return Err("description must not be empty");
        }
        if self.price.is_sign_negative() {
            return Err("price must not be negative");
        }
        Ok(())
    }
}
