//! Cart Ledger
//!
//! Ordered entries, each a by-value snapshot of a selection plus the price
//! captured when it was added. Identifiers come from a per-cart counter and
//! are never handed out twice, even after removals.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{Color, Pattern, Shape, Size};
use crate::hashing;
use crate::resolver::resolve_price;
use crate::selection::{Selection, TagDesign};
use crate::tables::Price;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: EntryId,
    #[serde(flatten)]
    pub design: Selection,
    pub price: Price,
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    /// Hash of the committed design and price. Stable for the entry's lifetime.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        hashing::fingerprint(&(&self.design, self.price))
    }
}

impl TagDesign for CartEntry {
    fn shape(&self) -> Shape { self.design.shape }
    fn color(&self) -> Color { self.design.color }
    fn pattern(&self) -> Pattern { self.design.pattern }
    fn size(&self) -> Size { self.design.size }
    fn text(&self) -> &str { &self.design.text }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
    #[serde(skip)]
    next_id: u64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `selection` at its current price and append it.
    ///
    /// Does not check the engraved text; callers run the validator first.
    pub fn add(&mut self, selection: &Selection) -> CartEntry {
        self.next_id += 1;
        let entry = CartEntry {
            id: EntryId(self.next_id),
            design: selection.clone(),
            price: resolve_price(selection),
            added_at: Utc::now(),
        };
        info!(id = %entry.id, price = entry.price, text = %entry.design.text, "cart entry added");
        self.entries.push(entry.clone());
        entry
    }

    /// Remove the entry with `id`. Unknown ids leave the cart untouched.
    pub fn remove(&mut self, id: EntryId) -> Option<CartEntry> {
        match self.entries.iter().position(|e| e.id == id) {
            Some(idx) => {
                let removed = self.entries.remove(idx);
                info!(id = %id, "cart entry removed");
                Some(removed)
            }
            None => {
                debug!(id = %id, "remove ignored, no such entry");
                None
            }
        }
    }

    pub fn total(&self) -> Price {
        self.entries.iter().map(|e| e.price).sum()
    }

    pub fn get(&self, id: EntryId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hash over every entry in order, for comparing two cart states.
    pub fn manifest_hash(&self) -> Result<String, serde_json::Error> {
        let designs: Vec<_> = self.entries.iter().map(|e| (e.id, &e.design, e.price)).collect();
        hashing::fingerprint(&designs)
    }
}
