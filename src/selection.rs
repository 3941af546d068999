//! Selection - the design currently being edited

use serde::{Deserialize, Serialize};

use crate::catalog::{Color, Pattern, Shape, Size};

/// Anything that describes a tag design well enough to resolve its asset.
pub trait TagDesign {
    fn shape(&self) -> Shape;
    fn color(&self) -> Color;
    fn pattern(&self) -> Pattern;
    fn size(&self) -> Size;
    fn text(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub shape: Shape,
    pub color: Color,
    pub pattern: Pattern,
    pub size: Size,
    #[serde(default)]
    pub text: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            shape: Shape::Bone,
            color: Color::Pink,
            pattern: Pattern::Dots,
            size: Size::M,
            text: String::new(),
        }
    }
}

/// A single field edit coming from a choice control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum SelectionChange {
    Shape(Shape),
    Color(Color),
    Pattern(Pattern),
    Size(Size),
    Text(String),
}

impl Selection {
    pub fn new(shape: Shape, color: Color, pattern: Pattern, size: Size, text: impl Into<String>) -> Self {
        Self { shape, color, pattern, size, text: text.into() }
    }

    /// Apply one edit in place. Text is stored verbatim here; length
    /// bounding happens where the input is accepted.
    pub fn apply(&mut self, change: SelectionChange) {
        match change {
            SelectionChange::Shape(s) => self.shape = s,
            SelectionChange::Color(c) => self.color = c,
            SelectionChange::Pattern(p) => self.pattern = p,
            SelectionChange::Size(s) => self.size = s,
            SelectionChange::Text(t) => self.text = t,
        }
    }
}

impl TagDesign for Selection {
    fn shape(&self) -> Shape { self.shape }
    fn color(&self) -> Color { self.color }
    fn pattern(&self) -> Pattern { self.pattern }
    fn size(&self) -> Size { self.size }
    fn text(&self) -> &str { &self.text }
}
