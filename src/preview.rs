//! Preview - what the configurator shows for the live selection
//!
//! The resolver only names assets. Deciding whether the named asset is
//! available, and substituting a placeholder when it is not, happens here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::warn;

use crate::config::StorefrontConfig;
use crate::resolver::{resolve_asset_path, resolve_price};
use crate::selection::TagDesign;
use crate::tables::{self, Price};

/// Lookup of pre-rendered tag images.
pub trait AssetStore {
    fn contains(&self, path: &str) -> bool;
}

/// Assets served from a directory; paths are resolved against `root`.
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetStore for DirAssetStore {
    fn contains(&self, path: &str) -> bool {
        self.root.join(path).is_file()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayImage {
    Asset { path: String },
    Placeholder { url: String, notice: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub asset_path: String,
    pub price: Price,
    pub price_label: String,
    pub scale: f64,
    pub swatch: &'static str,
    pub display_text: String,
}

impl Preview {
    pub fn of(design: &impl TagDesign, config: &StorefrontConfig) -> Self {
        let price = resolve_price(design);
        let display_text = if design.text().is_empty() {
            config.empty_text_label.clone()
        } else {
            design.text().to_string()
        };
        Self {
            asset_path: resolve_asset_path(design),
            price,
            price_label: format_price(price, config),
            scale: tables::scale(design.size()),
            swatch: tables::swatch(design.color()),
            display_text,
        }
    }
}

pub fn format_price(price: Price, config: &StorefrontConfig) -> String {
    format!("{}{}", config.currency_symbol, price)
}

/// Large placeholder labelled with the shape and color names.
pub fn placeholder_url(design: &impl TagDesign, config: &StorefrontConfig) -> String {
    let p = &config.placeholder;
    let label = format!("{}\n{}", design.shape(), design.color());
    format!(
        "{}/{}/{}/{}?text={}",
        p.base_url, p.preview_size, p.background, p.foreground, urlencoding::encode(&label)
    )
}

/// Small placeholder for cart thumbnails, labelled with the shape only.
pub fn thumbnail_placeholder_url(design: &impl TagDesign, config: &StorefrontConfig) -> String {
    let p = &config.placeholder;
    let label = design.shape().to_string();
    format!("{}/{}?text={}", p.base_url, p.thumbnail_size, urlencoding::encode(&label))
}

pub fn missing_asset_notice(path: &str) -> String {
    format!("No se encontró: {}", path)
}

/// The image to show for `design`, falling back to a placeholder when
/// `store` does not have the resolved asset.
pub fn display_image(
    design: &impl TagDesign,
    store: &impl AssetStore,
    config: &StorefrontConfig,
) -> DisplayImage {
    let path = resolve_asset_path(design);
    if store.contains(&path) {
        return DisplayImage::Asset { path };
    }
    warn!(path = %path, "tag image missing, using placeholder");
    DisplayImage::Placeholder {
        url: placeholder_url(design, config),
        notice: missing_asset_notice(&path),
    }
}
