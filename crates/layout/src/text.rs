//! Approximate text measurement and greedy word wrapping.

use facture_style::TextStyle;

/// Measures the width of a text string based on its style.
/// This is a simple approximation. A real implementation would use a font metrics library.
pub fn measure_text_width(text: &str, style: &TextStyle) -> f32 {
    let char_width = style.size * 0.6; // Approximation
    text.chars().count() as f32 * char_width
}

/// Greedy word wrap against a fixed width. A single word wider than
/// `max_width` gets its own line and is clipped by the column, never split.
pub fn wrap_text(text: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if measure_text_width(&candidate, style) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use facture_style::{FontFamily, TextStyle};
    use facture_types::Color;

    fn style(size: f32) -> TextStyle {
        TextStyle::new(FontFamily::Helvetica, size, Color::default())
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_text("Socks", &style(10.0), 140.0);
        assert_eq!(lines, vec!["Socks"]);
    }

    #[test]
    fn long_text_wraps_into_multiple_lines() {
        // 10pt -> 6pt per char; 140pt fits ~23 chars per line.
        let lines = wrap_text(
            "Premium organic cotton crew neck t-shirt with print",
            &style(10.0),
            140.0,
        );
        assert!(lines.len() >= 2, "expected a wrap, got {:?}", lines);
        for line in &lines {
            assert!(measure_text_width(line, &style(10.0)) <= 140.0 + 0.01);
        }
    }

    #[test]
    fn oversized_single_word_is_not_split() {
        let lines = wrap_text("Supercalifragilisticexpialidocious", &style(10.0), 60.0);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn empty_text_yields_one_empty_line() {
        assert_eq!(wrap_text("", &style(10.0), 100.0), vec![String::new()]);
    }

    #[test]
    fn measurement_scales_with_font_size() {
        let narrow = measure_text_width("Invoice", &style(10.0));
        let wide = measure_text_width("Invoice", &style(20.0));
        assert!((wide - 2.0 * narrow).abs() < 0.01);
    }
}
