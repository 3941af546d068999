//! Cart summary for display

use serde::Serialize;

use crate::cart::{Cart, CartEntry, EntryId};
use crate::config::StorefrontConfig;
use crate::preview::{format_price, thumbnail_placeholder_url};
use crate::resolver::resolve_asset_path;
use crate::tables::Price;

#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    pub id: EntryId,
    pub title: String,
    pub subtitle: String,
    pub text: String,
    pub price_label: String,
    pub thumbnail: String,
    pub thumbnail_fallback: String,
}

impl CartLine {
    pub fn of(entry: &CartEntry, config: &StorefrontConfig) -> Self {
        let d = &entry.design;
        Self {
            id: entry.id,
            title: format!("{} {}", d.shape, d.pattern),
            subtitle: format!("{} - Tamaño {}", d.color, d.size),
            text: d.text.clone(),
            price_label: format_price(entry.price, config),
            thumbnail: resolve_asset_path(entry),
            thumbnail_fallback: thumbnail_placeholder_url(entry, config),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CartSummary {
    pub item_count: usize,
    pub lines: Vec<CartLine>,
    pub total: Price,
    pub total_label: String,
}

impl CartSummary {
    pub fn of(cart: &Cart, config: &StorefrontConfig) -> Self {
        Self {
            item_count: cart.len(),
            lines: cart.entries().iter().map(|e| CartLine::of(e, config)).collect(),
            total: cart.total(),
            total_label: format_price(cart.total(), config),
        }
    }
}
