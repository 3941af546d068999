//! Option Catalog - Closed Domains
//!
//! Every configurable field of a tag is drawn from a fixed, ordered set.
//! Lists are ordered the way choice controls present them.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
    strum_macros::EnumIter, strum_macros::EnumString, strum_macros::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Shape {
    Bone,
    Heart,
    Circle,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
    strum_macros::EnumIter, strum_macros::EnumString, strum_macros::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Color {
    Pink,
    White,
    Blue,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
    strum_macros::EnumIter, strum_macros::EnumString, strum_macros::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Pattern {
    Solid,
    Dots,
    Stripes,
}

/// Ordered S < M < L; derived `Ord` follows declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    strum_macros::EnumIter, strum_macros::EnumString, strum_macros::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Size {
    S,
    M,
    L,
}

/// A choice paired with the label shown to the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionItem<T> {
    pub value: T,
    pub label: &'static str,
}

/// Shared behaviour of the four option domains.
pub trait CatalogOption: Copy + IntoEnumIterator + 'static {
    fn label(self) -> &'static str;

    /// All values of the domain, in display order.
    fn options() -> Vec<OptionItem<Self>> {
        Self::iter()
            .map(|value| OptionItem { value, label: value.label() })
            .collect()
    }
}

impl CatalogOption for Shape {
    fn label(self) -> &'static str {
        match self {
            Shape::Bone => "Hueso",
            Shape::Heart => "Corazón",
            Shape::Circle => "Círculo",
        }
    }
}

impl CatalogOption for Color {
    fn label(self) -> &'static str {
        match self {
            Color::Pink => "Rosa",
            Color::White => "Blanco",
            Color::Blue => "Azul",
        }
    }
}

impl CatalogOption for Pattern {
    fn label(self) -> &'static str {
        match self {
            Pattern::Solid => "Liso",
            Pattern::Dots => "Puntitos",
            Pattern::Stripes => "Rayado",
        }
    }
}

impl CatalogOption for Size {
    fn label(self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
        }
    }
}

/// The whole catalog, as served to choice controls.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub shapes: Vec<OptionItem<Shape>>,
    pub colors: Vec<OptionItem<Color>>,
    pub patterns: Vec<OptionItem<Pattern>>,
    pub sizes: Vec<OptionItem<Size>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            shapes: Shape::options(),
            colors: Color::options(),
            patterns: Pattern::options(),
            sizes: Size::options(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_option_order_and_labels() {
        let shapes: Vec<_> = Shape::options().into_iter().map(|o| (o.value, o.label)).collect();
        assert_eq!(
            shapes,
            vec![(Shape::Bone, "Hueso"), (Shape::Heart, "Corazón"), (Shape::Circle, "Círculo")]
        );

        let colors: Vec<_> = Color::options().into_iter().map(|o| o.label).collect();
        assert_eq!(colors, vec!["Rosa", "Blanco", "Azul"]);

        let patterns: Vec<_> = Pattern::options().into_iter().map(|o| o.label).collect();
        assert_eq!(patterns, vec!["Liso", "Puntitos", "Rayado"]);

        let sizes: Vec<_> = Size::options().into_iter().map(|o| o.value).collect();
        assert_eq!(sizes, vec![Size::S, Size::M, Size::L]);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Shape::from_str("heart").unwrap(), Shape::Heart);
        assert_eq!(Color::from_str("BLUE").unwrap(), Color::Blue);
        assert_eq!(Size::from_str("l").unwrap(), Size::L);
        assert!(Pattern::from_str("plaid").is_err());
    }

    #[test]
    fn test_serialized_names_match_display() {
        assert_eq!(serde_json::to_string(&Shape::Circle).unwrap(), r#""Circle""#);
        assert_eq!(Shape::Circle.to_string(), "Circle");
        assert_eq!(Size::M.to_string(), "M");
    }

    #[test]
    fn test_size_ordering() {
        assert!(Size::S < Size::M && Size::M < Size::L);
    }
}
