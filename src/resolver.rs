//! Config Resolver
//!
//! Pure naming and pricing derivations. The asset path is a naming
//! convention only; nothing here checks that the file exists.

use crate::selection::TagDesign;
use crate::tables::{self, Fragment, Price};

pub const ASSET_DIR: &str = "img";
pub const ASSET_EXT: &str = "png";
const FRAGMENT_SEPARATOR: &str = "_";

/// `img/<shape>_<color>_<pattern>.png`
pub fn resolve_asset_path(design: &impl TagDesign) -> String {
    let parts = [
        design.shape().fragment(),
        design.color().fragment(),
        design.pattern().fragment(),
    ];
    format!("{}/{}.{}", ASSET_DIR, parts.join(FRAGMENT_SEPARATOR), ASSET_EXT)
}

pub fn resolve_price(design: &impl TagDesign) -> Price {
    tables::unit_price(design.size())
}
