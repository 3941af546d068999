//! Pet Tag Configurator - Core
//!
//! # Ground Rules
//! 1. Options Are Closed Sets
//! 2. Derivations Are Pure Table Lookups
//! 3. Asset Paths Are a Naming Convention, Not a Promise
//! 4. Committed Prices Never Change
//! 5. The Guard Runs Before Every Add

pub mod catalog;
pub mod tables;
pub mod selection;
pub mod resolver;
pub mod validation;
pub mod hashing;
pub mod cart;
pub mod config;
pub mod preview;
pub mod summary;
pub mod session;

pub use catalog::{Catalog, CatalogOption, Color, OptionItem, Pattern, Shape, Size};
pub use tables::Price;
pub use selection::{Selection, SelectionChange, TagDesign};
pub use resolver::{resolve_asset_path, resolve_price};
pub use validation::{ValidationResult, ValidationViolation, Validator};
pub use cart::{Cart, CartEntry, EntryId};
pub use config::{ConfigError, StorefrontConfig};
pub use preview::{AssetStore, DirAssetStore, DisplayImage, Preview};
pub use summary::{CartLine, CartSummary};
pub use session::{Session, SessionError};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
