//! Menu recommendations from order history.
//!
//! Anonymous callers, and customers who have never ordered, see the items
//! most often ordered across the whole cafe. Customers with history see
//! items from the categories they order from most, skipping anything they
//! already bought, topped up with the newest remaining items.

use std::collections::{HashMap, HashSet};

use crate::catalog::{CatalogStore, Category, MenuItem};
use crate::error::StoreError;
use crate::orders::OrderStore;

pub const RECOMMENDATION_LIMIT: usize = 6;

/// Up to [`RECOMMENDATION_LIMIT`] suggested items for `owner_id`
/// (or for an anonymous caller when `None`).
pub fn recommend(
    catalog: &CatalogStore,
    orders: &OrderStore,
    owner_id: Option<&str>,
) -> Result<Vec<MenuItem>, StoreError> {
    let items = catalog.list()?;

    let history = match owner_id {
        Some(owner) => orders.list_by_owner(owner)?,
        None => Vec::new(),
    };
    if history.is_empty() {
        return popular(&items, orders);
    }

    let by_id: HashMap<&str, &MenuItem> =
        items.iter().map(|item| (item.id.as_str(), item)).collect();

    // Rank categories by how often they show up in the customer's lines.
    let mut category_counts: HashMap<Category, usize> = HashMap::new();
    let mut already_ordered: HashSet<&str> = HashSet::new();
    for order in &history {
        for line in &order.lines {
            already_ordered.insert(line.item_id.as_str());
            if let Some(item) = by_id.get(line.item_id.as_str()) {
                *category_counts.entry(item.category).or_insert(0) += 1;
            }
        }
    }
    let mut preferred: Vec<(Category, usize)> = category_counts.into_iter().collect();
    preferred.sort_by(|a, b| b.1.cmp(&a.1));
    let preferred: Vec<Category> = preferred.into_iter().map(|(c, _)| c).collect();

    let mut picks: Vec<MenuItem> = Vec::new();
    for category in &preferred {
        for item in &items {
            if picks.len() == RECOMMENDATION_LIMIT {
                return Ok(picks);
            }
            if item.category == *category && !already_ordered.contains(item.id.as_str()) {
                picks.push(item.clone());
            }
        }
    }

    // Not enough category matches: fill with the newest remaining items.
    if picks.len() < RECOMMENDATION_LIMIT {
        let picked: HashSet<&str> = picks.iter().map(|i| i.id.as_str()).collect();
        let mut rest: Vec<&MenuItem> = items
            .iter()
            .filter(|item| {
                !picked.contains(item.id.as_str()) && !already_ordered.contains(item.id.as_str())
            })
            .collect();
        rest.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        for item in rest {
            if picks.len() == RECOMMENDATION_LIMIT {
                break;
            }
            picks.push(item.clone());
        }
    }

    Ok(picks)
}

/// Items ranked by the number of orders that contain them.
fn popular(items: &[MenuItem], orders: &OrderStore) -> Result<Vec<MenuItem>, StoreError> {
    let all_orders = orders.list_all(None)?;

    let mut order_counts: HashMap<&str, usize> = HashMap::new();
    for order in &all_orders {
        let mut seen: HashSet<&str> = HashSet::new();
        for line in &order.lines {
            if seen.insert(line.item_id.as_str()) {
                *order_counts.entry(line.item_id.as_str()).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<&MenuItem> = items.iter().collect();
    ranked.sort_by(|a, b| {
        let ca = order_counts.get(a.id.as_str()).copied().unwrap_or(0);
        let cb = order_counts.get(b.id.as_str()).copied().unwrap_or(0);
        cb.cmp(&ca).then_with(|| a.name.cmp(&b.name))
    });
    Ok(ranked
        .into_iter()
        .take(RECOMMENDATION_LIMIT)
        .cloned()
        .collect())
}
