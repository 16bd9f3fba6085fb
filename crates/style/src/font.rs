use facture_types::Color;
use serde::{de, Deserialize, Deserializer, Serialize};

/// The builtin Type1 faces the render backend knows how to map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum FontFamily {
    #[default]
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl FontFamily {
    /// The PostScript base font name written into the PDF font dictionary.
    pub fn postscript_name(&self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::HelveticaBold => "Helvetica-Bold",
            FontFamily::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "helvetica" | "regular" | "normal" => Ok(FontFamily::Helvetica),
            "helvetica-bold" | "bold" => Ok(FontFamily::HelveticaBold),
            "helvetica-oblique" | "oblique" | "italic" => Ok(FontFamily::HelveticaOblique),
            _ => Err(format!("Unknown font family: '{}'", s)),
        }
    }
}

impl<'de> Deserialize<'de> for FontFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A resolved text style: face, size, and fill color.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub family: FontFamily,
    pub size: f32,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { family: FontFamily::Helvetica, size: 10.0, color: Color::default() }
    }
}

impl TextStyle {
    pub fn new(family: FontFamily, size: f32, color: Color) -> Self {
        Self { family, size, color }
    }

    /// Vertical advance of one wrapped line.
    pub fn line_height(&self) -> f32 {
        self.size * 1.4
    }
}
