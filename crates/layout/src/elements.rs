//! The element model produced by layout and consumed by render backends.
//!
//! Positions are absolute page coordinates with `y` measured downward from
//! the top edge; the backend flips into PDF coordinate space.

use facture_style::TextStyle;
use facture_types::Color;

#[derive(Debug, Clone)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

#[derive(Debug, Clone)]
pub enum LayoutElement {
    Text(TextElement),
    Rect(RectElement),
    Image(ImageElement),
}

#[derive(Debug, Clone)]
pub struct TextElement {
    pub content: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// A rectangle with an optional fill and an optional stroked outline.
#[derive(Debug, Clone, Default)]
pub struct RectElement {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

/// A placed raster, referencing a resource key registered with the backend.
#[derive(Debug, Clone)]
pub struct ImageElement {
    pub src: String,
}

impl PositionedElement {
    pub fn text(x: f32, y: f32, width: f32, content: String, style: TextStyle) -> Self {
        let height = style.line_height();
        Self { x, y, width, height, element: LayoutElement::Text(TextElement { content, style }) }
    }

    pub fn filled_rect(x: f32, y: f32, width: f32, height: f32, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            element: LayoutElement::Rect(RectElement { fill: Some(fill), stroke: None }),
        }
    }

    pub fn stroked_rect(x: f32, y: f32, width: f32, height: f32, stroke: Stroke) -> Self {
        Self {
            x,
            y,
            width,
            height,
            element: LayoutElement::Rect(RectElement { fill: None, stroke: Some(stroke) }),
        }
    }
}
