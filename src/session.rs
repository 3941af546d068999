//! Configurator Session - Single Owner of UI State
//!
//! Holds the live selection, the cart and the cart panel flag for one
//! shopper. `add_to_cart` ALWAYS runs the validator first. No bypass.

use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::cart::{Cart, CartEntry, EntryId};
use crate::config::StorefrontConfig;
use crate::preview::Preview;
use crate::selection::{Selection, SelectionChange};
use crate::summary::CartSummary;
use crate::tables::Price;
use crate::validation::{ValidationResult, Validator};

/// Counts guard runs across all sessions, so tests can see that no add
/// path skips the validator.
#[cfg(feature = "test-hooks")]
pub mod guard_hook {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static GUARD_RUNS: AtomicUsize = AtomicUsize::new(0);

    pub(crate) fn record() {
        GUARD_RUNS.fetch_add(1, Ordering::SeqCst);
    }

    pub fn guard_runs() -> usize {
        GUARD_RUNS.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

pub struct Session {
    id: Uuid,
    config: StorefrontConfig,
    validator: Validator,
    selection: Selection,
    cart: Cart,
    cart_open: bool,
}

impl Session {
    pub fn new(config: StorefrontConfig) -> Self {
        let validator = Validator::with_max_text_len(config.max_text_length);
        let id = Uuid::new_v4();
        debug!(session = %id, "session started");
        Self {
            id,
            config,
            validator,
            selection: Selection::default(),
            cart: Cart::new(),
            cart_open: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Apply one control edit to the live selection. Text longer than the
    /// configured maximum is cut, as the name field does.
    pub fn update(&mut self, change: SelectionChange) {
        let change = match change {
            SelectionChange::Text(text) => SelectionChange::Text(self.bounded_text(&text)),
            other => other,
        };
        debug!(session = %self.id, ?change, "selection changed");
        self.selection.apply(change);
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.update(SelectionChange::Text(text.into()));
    }

    /// Replace the whole live selection, e.g. when restoring a design.
    /// The text goes through the same length cut as a typed edit.
    pub fn replace_selection(&mut self, selection: Selection) {
        let text = self.bounded_text(&selection.text);
        self.selection = Selection { text, ..selection };
    }

    fn bounded_text(&self, text: &str) -> String {
        text.chars().take(self.config.max_text_length).collect()
    }

    pub fn preview(&self) -> Preview {
        Preview::of(&self.selection, &self.config)
    }

    pub fn validate(&self) -> ValidationResult {
        #[cfg(feature = "test-hooks")]
        guard_hook::record();

        self.validator.validate(&self.selection)
    }

    /// Commit the live selection to the cart and open the cart panel.
    ///
    /// CRITICAL: the guard runs on every call. A rejected add creates no entry.
    pub fn add_to_cart(&mut self) -> Result<CartEntry, SessionError> {
        let validation = self.validate();
        if !validation.valid {
            let message = validation.error_message();
            warn!(session = %self.id, %message, "add to cart rejected");
            return Err(SessionError::ValidationFailed(message));
        }

        self.cart_open = true;
        Ok(self.cart.add(&self.selection))
    }

    pub fn remove_from_cart(&mut self, id: EntryId) -> Option<CartEntry> {
        self.cart.remove(id)
    }

    pub fn total(&self) -> Price {
        self.cart.total()
    }

    pub fn item_count(&self) -> usize {
        self.cart.len()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::of(&self.cart, &self.config)
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Color, Size};

    #[test]
    fn test_rejected_add_leaves_cart_closed_and_empty() {
        let mut session = Session::default();
        let err = session.add_to_cart().unwrap_err();
        assert!(err.to_string().contains("Por favor escribe el nombre"));
        assert!(session.cart().is_empty());
        assert!(!session.is_cart_open());
    }

    #[test]
    fn test_successful_add_opens_cart() {
        let mut session = Session::default();
        session.set_text("LUNA");
        session.add_to_cart().unwrap();
        assert!(session.is_cart_open());
        session.close_cart();
        assert!(!session.is_cart_open());
        assert_eq!(session.item_count(), 1);
    }

    #[test]
    fn test_text_is_cut_to_max() {
        let mut session = Session::default();
        session.set_text("MAXIMILIANO");
        assert_eq!(session.selection().text, "MAXIMILIA");
        assert!(session.add_to_cart().is_ok());
    }

    #[test]
    fn test_replaced_selection_text_is_cut() {
        let mut session = Session::default();
        session.replace_selection(Selection {
            text: "MAXIMILIANO".into(),
            color: Color::Blue,
            ..Selection::default()
        });
        assert_eq!(session.selection().text, "MAXIMILIA");
        assert_eq!(session.selection().color, Color::Blue);
        assert!(session.preview().display_text.chars().count() <= 9);
    }

    #[test]
    fn test_replaced_blank_selection_still_validated() {
        let mut session = Session::default();
        session.replace_selection(Selection { text: "  ".into(), ..Selection::default() });
        assert!(session.add_to_cart().is_err());
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_preview_tracks_updates() {
        let mut session = Session::default();
        session.update(SelectionChange::Color(Color::White));
        session.update(SelectionChange::Size(Size::S));
        let preview = session.preview();
        assert_eq!(preview.asset_path, "img/huesito_blanco_puntitos.png");
        assert_eq!(preview.price, 1200);
        assert_eq!(preview.scale, 0.8);
    }

    #[cfg(feature = "test-hooks")]
    #[test]
    fn test_add_always_validates() {
        let mut session = Session::default();
        let before = guard_hook::guard_runs();
        let _ = session.add_to_cart();
        session.set_text("LUNA");
        let _ = session.add_to_cart();
        assert!(guard_hook::guard_runs() >= before + 2);
    }
}
