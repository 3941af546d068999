//! Derivation Tables
//!
//! Total lookups from a catalog value to a display attribute. Every value
//! has an entry; there is no unset case.

use crate::catalog::{Color, Pattern, Shape, Size};

/// Price in whole currency units.
pub type Price = u64;

/// Swatch shown on color choice controls.
pub fn swatch(color: Color) -> &'static str {
    match color {
        Color::Pink => "#FFC0CB",
        Color::White => "#FFFFFF",
        // sky blue, matches the product photos
        Color::Blue => "#87CEEB",
    }
}

/// Visual scale applied to the preview.
pub fn scale(size: Size) -> f64 {
    match size {
        Size::S => 0.8,
        Size::M => 1.0,
        Size::L => 1.2,
    }
}

pub fn unit_price(size: Size) -> Price {
    match size {
        Size::S => 1200,
        Size::M => 1500,
        Size::L => 1800,
    }
}

/// Token used for a value inside an asset filename.
pub trait Fragment: Copy {
    fn fragment(self) -> &'static str;
}

impl Fragment for Shape {
    fn fragment(self) -> &'static str {
        match self {
            Shape::Bone => "huesito",
            Shape::Heart => "corazon",
            Shape::Circle => "circulo",
        }
    }
}

impl Fragment for Color {
    fn fragment(self) -> &'static str {
        match self {
            Color::Pink => "rosa",
            Color::White => "blanco",
            Color::Blue => "celeste",
        }
    }
}

impl Fragment for Pattern {
    fn fragment(self) -> &'static str {
        match self {
            Pattern::Solid => "liso",
            Pattern::Dots => "puntitos",
            Pattern::Stripes => "rayado",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_price_table_pinned() {
        assert_eq!(unit_price(Size::S), 1200);
        assert_eq!(unit_price(Size::M), 1500);
        assert_eq!(unit_price(Size::L), 1800);
    }

    #[test]
    fn test_price_and_scale_monotonic() {
        let sizes: Vec<Size> = Size::iter().collect();
        for pair in sizes.windows(2) {
            assert!(unit_price(pair[0]) <= unit_price(pair[1]));
            assert!(scale(pair[0]) < scale(pair[1]));
        }
    }

    #[test]
    fn test_fragments_distinct_and_lowercase() {
        let mut seen = HashSet::new();
        let all = Shape::iter()
            .map(Fragment::fragment)
            .chain(Color::iter().map(Fragment::fragment))
            .chain(Pattern::iter().map(Fragment::fragment));
        for frag in all {
            assert_eq!(frag, frag.to_lowercase());
            assert!(!frag.contains('_'));
            assert!(seen.insert(frag), "duplicate fragment {frag}");
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_swatches() {
        assert_eq!(swatch(Color::Pink), "#FFC0CB");
        assert_eq!(swatch(Color::White), "#FFFFFF");
        assert_eq!(swatch(Color::Blue), "#87CEEB");
    }
}
