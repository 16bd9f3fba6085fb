use crate::font::{FontFamily, TextStyle};
use crate::page::PageGeometry;
use crate::table::TableSpec;
use facture_types::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("table spec has no columns")]
    NoColumns,
    #[error("table columns end at {table_right:.2}, past the printable right edge {printable_right:.2}")]
    ColumnsOverflow { table_right: f32, printable_right: f32 },
    #[error("theme parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The invoice color palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub accent: Color,
    pub header_fill: Color,
    pub header_text: Color,
    pub row_alt_fill: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Color::rgb(0x2d, 0x3e, 0x50),
            header_fill: Color::rgb(0x2d, 0x3e, 0x50),
            header_text: Color::white(),
            row_alt_fill: Color::rgb(0xf4, 0xf6, 0xf8),
            border: Color::rgb(0xd0, 0xd5, 0xda),
            text: Color::rgb(0x1f, 0x29, 0x33),
            muted: Color::rgb(0x6b, 0x72, 0x80),
        }
    }
}

/// Monetary presentation. The prefix is an ASCII abbreviation rather than a
/// currency symbol so the WinAnsi text path never sees it mangled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyStyle {
    pub prefix: String,
}

impl Default for CurrencyStyle {
    fn default() -> Self {
        Self { prefix: "Rs.".to_string() }
    }
}

impl CurrencyStyle {
    /// Exactly two fraction digits, always.
    pub fn format(&self, value: f64) -> String {
        format!("{} {:.2}", self.prefix, value)
    }
}

/// Fixed copy drawn on every invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Strings {
    pub title: String,
    pub number_label: String,
    pub date_label: String,
    pub bill_to: String,
    pub thank_you: String,
    pub disclaimer: String,
    pub signature: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            title: "INVOICE".to_string(),
            number_label: "Invoice No:".to_string(),
            date_label: "Date:".to_string(),
            bill_to: "Bill To".to_string(),
            thank_you: "Thank you for shopping with us!".to_string(),
            disclaimer: "This is a computer generated invoice and does not require a signature."
                .to_string(),
            signature: "Storefront Team".to_string(),
        }
    }
}

/// Everything the layout engine needs to draw an invoice, as one immutable
/// value. Renderers hold a validated copy; nothing here changes per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub page: PageGeometry,
    pub table: TableSpec,
    pub palette: Palette,
    pub currency: CurrencyStyle,
    pub strings: Strings,

    pub title_style: TextStyle,
    pub meta_style: TextStyle,
    pub heading_style: TextStyle,
    pub body_style: TextStyle,
    pub table_header_style: TextStyle,
    pub total_style: TextStyle,
    pub footnote_style: TextStyle,
    pub signature_style: TextStyle,

    /// The billing box keeps this height no matter how few lines it holds.
    pub billing_box_height: f32,
    /// Vertical band at the page bottom that table rows never enter.
    pub footer_reserve: f32,
    pub logo_height: f32,
}

impl Default for Theme {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            page: PageGeometry::a4(),
            table: TableSpec::default(),
            currency: CurrencyStyle::default(),
            strings: Strings::default(),
            title_style: TextStyle::new(FontFamily::HelveticaBold, 20.0, palette.accent),
            meta_style: TextStyle::new(FontFamily::Helvetica, 11.0, palette.text),
            heading_style: TextStyle::new(FontFamily::HelveticaBold, 12.0, palette.text),
            body_style: TextStyle::new(FontFamily::Helvetica, 10.0, palette.text),
            table_header_style: TextStyle::new(FontFamily::HelveticaBold, 10.0, palette.header_text),
            total_style: TextStyle::new(FontFamily::HelveticaBold, 13.0, palette.accent),
            footnote_style: TextStyle::new(FontFamily::Helvetica, 9.0, palette.muted.with_alpha(0.55)),
            signature_style: TextStyle::new(FontFamily::HelveticaOblique, 11.0, palette.text),
            billing_box_height: 92.0,
            footer_reserve: 120.0,
            logo_height: 40.0,
            palette,
        }
    }
}

impl Theme {
    /// Load a theme override from JSON. Missing fields fall back to the
    /// defaults, so a theme file only states what it changes.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        self.table.validate(&self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_valid() {
        Theme::default().validate().unwrap();
    }

    #[test]
    fn currency_always_renders_two_fraction_digits() {
        let currency = CurrencyStyle::default();
        assert_eq!(currency.format(0.0), "Rs. 0.00");
        assert_eq!(currency.format(1234.5), "Rs. 1234.50");
        assert_eq!(currency.format(99.999), "Rs. 100.00");
    }

    #[test]
    fn theme_json_overrides_merge_with_defaults() {
        let theme = Theme::from_json(r#"{"currency": {"prefix": "INR"}}"#).unwrap();
        assert_eq!(theme.currency.format(10.0), "INR 10.00");
        // Untouched fields keep their defaults.
        assert_eq!(theme.strings.title, "INVOICE");
    }

    #[test]
    fn invalid_theme_json_fails_validation() {
        let json = r#"{"table": {"columns": [{"label": "Item", "width": 900.0}]}}"#;
        assert!(Theme::from_json(json).is_err());
    }
}
