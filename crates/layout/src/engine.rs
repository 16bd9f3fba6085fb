//! The invoice layout engine.
//!
//! One pass over the document, top to bottom, threading an explicit vertical
//! cursor through the section functions. Each section takes the cursor it
//! starts at and returns the cursor below what it drew, so sections can be
//! exercised independently in tests.

use crate::document::{BillTo, InvoiceDoc, LineRow, Totals};
use crate::elements::{ImageElement, LayoutElement, PositionedElement, Stroke};
use crate::output::LaidOutInvoice;
use crate::text::{measure_text_width, wrap_text};
use crate::LayoutError;
use facture_style::{TextAlign, TextStyle, Theme};
use facture_types::ImageResource;
use std::collections::HashMap;

/// Resource key under which the brand logo raster is registered.
pub const LOGO_RESOURCE: &str = "brand-logo";

/// Width of the right-aligned value column in the totals block.
const TOTALS_VALUE_WIDTH: f32 = 120.0;
/// Width of the separator rule above the grand total.
const TOTALS_RULE_WIDTH: f32 = 220.0;

/// Collects elements page by page. `break_page` seals the current page and
/// starts the next one.
struct PageBuilder {
    pages: Vec<Vec<PositionedElement>>,
    current: Vec<PositionedElement>,
}

impl PageBuilder {
    fn new() -> Self {
        Self { pages: Vec::new(), current: Vec::new() }
    }

    fn page(&mut self) -> &mut Vec<PositionedElement> {
        &mut self.current
    }

    fn break_page(&mut self) {
        let sealed = std::mem::take(&mut self.current);
        self.pages.push(sealed);
    }

    fn finish(mut self) -> Vec<Vec<PositionedElement>> {
        self.pages.push(self.current);
        self.pages
    }
}

pub struct InvoiceLayout {
    theme: Theme,
    column_offsets: Vec<f32>,
    table_right: f32,
}

impl InvoiceLayout {
    /// Validates the theme up front. The column-geometry invariant is
    /// enforced here once, never re-checked per render.
    pub fn new(theme: Theme) -> Result<Self, LayoutError> {
        theme.validate()?;
        let column_offsets = theme.table.offsets(&theme.page);
        let last = theme.table.columns.len() - 1;
        let table_right = column_offsets[last] + theme.table.columns[last].width;
        Ok(Self { theme, column_offsets, table_right })
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Lays out the whole invoice into pages.
    pub fn paginate(&self, doc: &InvoiceDoc, logo: Option<&ImageResource>) -> LaidOutInvoice {
        let page = &self.theme.page;
        let threshold = page.height - self.theme.footer_reserve;
        let mut builder = PageBuilder::new();

        let mut y = page.margin;
        y = self.header(builder.page(), y, &doc.number, &doc.issued_on, logo);
        y = self.billing(builder.page(), y, &doc.bill_to);
        y = self.table_header(builder.page(), y);

        for (index, row) in doc.rows.iter().enumerate() {
            // A row never splits across pages: if it would cross into the
            // reserved band, seal the page and redraw the table header.
            if y + self.row_height(row) > threshold {
                builder.break_page();
                y = self.table_header(builder.page(), page.margin);
            }
            y = self.row(builder.page(), y, row, index);
        }

        if y + self.totals_height(&doc.totals) > threshold {
            builder.break_page();
            y = page.margin;
        }
        self.totals(builder.page(), y, &doc.totals);
        self.footer(builder.page());

        let mut resources = HashMap::new();
        if let Some(img) = logo {
            resources.insert(LOGO_RESOURCE.to_string(), img.clone());
        }
        LaidOutInvoice { pages: builder.finish(), resources }
    }

    /// Brand logo in the top-right corner, then centered title, invoice
    /// number, and issue date.
    pub fn header(
        &self,
        out: &mut Vec<PositionedElement>,
        y: f32,
        number: &str,
        issued_on: &str,
        logo: Option<&ImageResource>,
    ) -> f32 {
        let page = &self.theme.page;
        let strings = &self.theme.strings;

        if let Some(img) = logo {
            let height = self.theme.logo_height;
            let width = height * img.aspect_ratio();
            out.push(PositionedElement {
                x: page.content_right() - width,
                y,
                width,
                height,
                element: LayoutElement::Image(ImageElement { src: LOGO_RESOURCE.to_string() }),
            });
        }

        let mut y = y + 6.0;
        y = self.centered(out, y, &strings.title, &self.theme.title_style);
        y += 4.0;
        let number_line = format!("{} {}", strings.number_label, number);
        y = self.centered(out, y, &number_line, &self.theme.meta_style);
        let date_line = format!("{} {}", strings.date_label, issued_on);
        y = self.centered(out, y, &date_line, &self.theme.meta_style);
        y + 10.0
    }

    /// Bordered box of fixed height. Lines that are empty are skipped;
    /// whatever space they would have used stays blank, and overflowing
    /// content clips against the box rather than reflowing it.
    pub fn billing(&self, out: &mut Vec<PositionedElement>, y: f32, bill: &BillTo) -> f32 {
        let page = &self.theme.page;
        let box_height = self.theme.billing_box_height;
        out.push(PositionedElement::stroked_rect(
            page.margin,
            y,
            page.content_width(),
            box_height,
            Stroke { color: self.theme.palette.border, width: 1.0 },
        ));

        let pad = 10.0;
        let x = page.margin + pad;
        let mut line_y = y + pad;
        line_y = self.left_text(out, x, line_y, &self.theme.strings.bill_to, &self.theme.heading_style);

        let body = &self.theme.body_style;
        let mut lines: Vec<&str> = Vec::new();
        if !bill.name.is_empty() {
            lines.push(&bill.name);
        }
        if let Some(address) = bill.address.as_deref() {
            if !address.is_empty() {
                lines.push(address);
            }
        }
        if !bill.mobile.is_empty() {
            lines.push(&bill.mobile);
        }
        if !bill.email.is_empty() {
            lines.push(&bill.email);
        }
        for line in lines {
            line_y = self.left_text(out, x, line_y, line, body);
        }

        y + box_height + 14.0
    }

    /// The solid-fill column header row. Redrawn at the top of every
    /// continuation page.
    pub fn table_header(&self, out: &mut Vec<PositionedElement>, y: f32) -> f32 {
        let table = &self.theme.table;
        let height = table.header_height;
        out.push(PositionedElement::filled_rect(
            self.theme.page.margin,
            y,
            self.table_width(),
            height,
            self.theme.palette.header_fill,
        ));

        let style = &self.theme.table_header_style;
        let text_y = y + (height - style.line_height()) / 2.0;
        for index in 0..table.columns.len() {
            let label = self.theme.table.columns[index].label.clone();
            self.cell_text(out, index, text_y, &label, style);
        }
        y + height
    }

    /// Row height grows with the wrapped item name but never shrinks below
    /// the minimum.
    pub fn row_height(&self, row: &LineRow) -> f32 {
        let table = &self.theme.table;
        let body = &self.theme.body_style;
        let name_width = table.columns[0].width - 2.0 * table.cell_padding;
        let lines = wrap_text(&row.name, body, name_width).len() as f32;
        (lines * body.line_height() + 2.0 * table.cell_padding).max(table.min_row_height)
    }

    pub fn row(
        &self,
        out: &mut Vec<PositionedElement>,
        y: f32,
        row: &LineRow,
        index: usize,
    ) -> f32 {
        let table = &self.theme.table;
        let height = self.row_height(row);
        if index % 2 == 1 {
            out.push(PositionedElement::filled_rect(
                self.theme.page.margin,
                y,
                self.table_width(),
                height,
                self.theme.palette.row_alt_fill,
            ));
        }

        let body = &self.theme.body_style;
        let pad = table.cell_padding;
        let text_y = y + pad;

        let name_width = table.columns[0].width - 2.0 * pad;
        for (line_index, line) in wrap_text(&row.name, body, name_width).iter().enumerate() {
            let line_y = text_y + line_index as f32 * body.line_height();
            self.cell_text(out, 0, line_y, line, body);
        }
        self.cell_text(out, 1, text_y, &row.size, body);
        self.cell_text(out, 2, text_y, &row.color, body);
        self.cell_text(out, 3, text_y, &row.quantity.to_string(), body);
        self.cell_text(out, 4, text_y, &self.theme.currency.format(row.unit_price), body);
        self.cell_text(out, 5, text_y, &self.theme.currency.format(row.line_total()), body);

        y + height
    }

    /// Right-aligned label/value pairs. Shipping and Tax appear only when
    /// positive; the grand total gets the emphasized style.
    pub fn totals(&self, out: &mut Vec<PositionedElement>, y: f32, totals: &Totals) -> f32 {
        let body = &self.theme.body_style;
        let mut y = y + 12.0;
        y = self.total_line(out, y, "Subtotal", totals.subtotal, body);
        if totals.shipping > 0.0 {
            y = self.total_line(out, y, "Shipping", totals.shipping, body);
        }
        if totals.tax > 0.0 {
            y = self.total_line(out, y, "Tax", totals.tax, body);
        }
        out.push(PositionedElement::filled_rect(
            self.table_right - TOTALS_RULE_WIDTH,
            y,
            TOTALS_RULE_WIDTH,
            0.8,
            self.theme.palette.border,
        ));
        y += 6.8;
        y = self.total_line(out, y, "Total", totals.total, &self.theme.total_style);
        y
    }

    /// Space the totals block will occupy, used for the page-break check.
    pub fn totals_height(&self, totals: &Totals) -> f32 {
        let regular = self.theme.body_style.line_height() + 4.0;
        let mut height = 12.0 + regular;
        if totals.shipping > 0.0 {
            height += regular;
        }
        if totals.tax > 0.0 {
            height += regular;
        }
        height + 6.8 + self.theme.total_style.line_height() + 4.0
    }

    /// Drawn once, on the final page, inside the reserved bottom band.
    pub fn footer(&self, out: &mut Vec<PositionedElement>) {
        let page = &self.theme.page;
        let strings = &self.theme.strings;
        let mut y = page.height - self.theme.footer_reserve + 30.0;
        y = self.centered(out, y, &strings.thank_you, &self.theme.body_style);
        y = self.centered(out, y, &strings.disclaimer, &self.theme.footnote_style);
        y += 6.0;
        let style = &self.theme.signature_style;
        let width = measure_text_width(&strings.signature, style);
        out.push(PositionedElement::text(
            page.content_right() - width,
            y,
            width,
            strings.signature.clone(),
            style.clone(),
        ));
    }

    fn table_width(&self) -> f32 {
        self.table_right - self.theme.page.margin
    }

    /// One label/value pair of the totals block: the label right-aligned
    /// against the value column, the value right-aligned against the
    /// table's right edge.
    fn total_line(
        &self,
        out: &mut Vec<PositionedElement>,
        y: f32,
        label: &str,
        value: f64,
        style: &TextStyle,
    ) -> f32 {
        let label_width = measure_text_width(label, style);
        out.push(PositionedElement::text(
            self.table_right - TOTALS_VALUE_WIDTH - label_width,
            y,
            label_width,
            label.to_string(),
            style.clone(),
        ));

        let value_text = self.theme.currency.format(value);
        let value_width = measure_text_width(&value_text, style);
        out.push(PositionedElement::text(
            self.table_right - value_width,
            y,
            value_width,
            value_text,
            style.clone(),
        ));
        y + style.line_height() + 4.0
    }

    fn centered(
        &self,
        out: &mut Vec<PositionedElement>,
        y: f32,
        text: &str,
        style: &TextStyle,
    ) -> f32 {
        let page = &self.theme.page;
        let width = measure_text_width(text, style);
        let x = page.margin + (page.content_width() - width) / 2.0;
        out.push(PositionedElement::text(x, y, width, text.to_string(), style.clone()));
        y + style.line_height()
    }

    fn left_text(
        &self,
        out: &mut Vec<PositionedElement>,
        x: f32,
        y: f32,
        text: &str,
        style: &TextStyle,
    ) -> f32 {
        let width = measure_text_width(text, style);
        out.push(PositionedElement::text(x, y, width, text.to_string(), style.clone()));
        y + style.line_height()
    }

    /// Places a single cell's text inside column `index` honoring the
    /// column's alignment.
    fn cell_text(
        &self,
        out: &mut Vec<PositionedElement>,
        index: usize,
        y: f32,
        text: &str,
        style: &TextStyle,
    ) {
        let table = &self.theme.table;
        let column = &table.columns[index];
        let x0 = self.column_offsets[index];
        let pad = table.cell_padding;
        let width = measure_text_width(text, style);
        let x = match column.align {
            TextAlign::Left => x0 + pad,
            TextAlign::Center => x0 + (column.width - width) / 2.0,
            TextAlign::Right => x0 + column.width - pad - width,
        };
        out.push(PositionedElement::text(x, y, width, text.to_string(), style.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> InvoiceLayout {
        InvoiceLayout::new(Theme::default()).unwrap()
    }

    fn doc_with_rows(n: usize) -> InvoiceDoc {
        let rows: Vec<LineRow> = (0..n)
            .map(|i| LineRow {
                name: format!("Item {}", i + 1),
                size: "M".to_string(),
                color: "Blue".to_string(),
                quantity: 2,
                unit_price: 149.5,
            })
            .collect();
        let subtotal: f64 = rows.iter().map(|r| r.line_total()).sum();
        InvoiceDoc {
            number: "ORD-1042".to_string(),
            issued_on: "05/08/2026".to_string(),
            bill_to: BillTo {
                name: "Asha Verma".to_string(),
                address: Some("12 MG Road, Bengaluru, KA, 560001".to_string()),
                mobile: "+91 98450 00000".to_string(),
                email: "asha@example.com".to_string(),
            },
            rows,
            totals: Totals {
                subtotal,
                shipping: 49.0,
                tax: 35.88,
                total: subtotal + 49.0 + 35.88,
            },
        }
    }

    fn page_texts(page: &[PositionedElement]) -> Vec<&str> {
        page.iter()
            .filter_map(|el| match &el.element {
                LayoutElement::Text(t) => Some(t.content.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn small_order_fits_on_one_page() {
        let out = layout().paginate(&doc_with_rows(3), None);
        assert_eq!(out.page_count(), 1);
    }

    #[test]
    fn forty_rows_span_multiple_pages() {
        let out = layout().paginate(&doc_with_rows(40), None);
        assert!(out.page_count() >= 2, "got {} pages", out.page_count());
    }

    #[test]
    fn table_header_reappears_on_every_page() {
        let out = layout().paginate(&doc_with_rows(40), None);
        for (i, page) in out.pages.iter().enumerate() {
            let texts = page_texts(page);
            assert!(texts.contains(&"Item"), "page {} is missing the header row", i + 1);
            assert!(texts.contains(&"Qty"), "page {} is missing the header row", i + 1);
        }
        // Continuation pages open directly with the header row.
        let second = page_texts(&out.pages[1]);
        assert_eq!(second[0], "Item");
    }

    #[test]
    fn rows_stay_out_of_the_reserved_footer_band() {
        let engine = layout();
        let threshold = engine.theme().page.height - engine.theme().footer_reserve;
        let out = engine.paginate(&doc_with_rows(40), None);
        for page in &out.pages {
            for el in page {
                if let LayoutElement::Rect(rect) = &el.element {
                    if rect.fill.is_some() && el.height > 1.0 {
                        assert!(el.y + el.height <= threshold + 0.01);
                    }
                }
            }
        }
    }

    #[test]
    fn zero_shipping_and_tax_are_omitted() {
        let mut doc = doc_with_rows(2);
        doc.totals.shipping = 0.0;
        doc.totals.tax = 0.0;
        let out = layout().paginate(&doc, None);
        let texts = page_texts(&out.pages[0]);
        assert!(texts.contains(&"Subtotal"));
        assert!(texts.contains(&"Total"));
        assert!(!texts.contains(&"Shipping"));
        assert!(!texts.contains(&"Tax"));
    }

    #[test]
    fn billing_box_height_is_fixed_without_an_address() {
        let engine = layout();
        let mut with_address = Vec::new();
        let mut without_address = Vec::new();

        let bill = doc_with_rows(1).bill_to;
        let after_full = engine.billing(&mut with_address, 100.0, &bill);

        let bare = BillTo { address: None, ..bill.clone() };
        let after_bare = engine.billing(&mut without_address, 100.0, &bare);

        assert_eq!(after_full, after_bare);
        let box_height = |els: &[PositionedElement]| {
            els.iter()
                .find_map(|el| match &el.element {
                    LayoutElement::Rect(r) if r.stroke.is_some() => Some(el.height),
                    _ => None,
                })
                .unwrap()
        };
        assert_eq!(box_height(&with_address), box_height(&without_address));
        assert!(!page_texts(&without_address).iter().any(|t| t.contains("MG Road")));
    }

    #[test]
    fn wrapped_item_names_grow_the_row() {
        let engine = layout();
        let short = LineRow {
            name: "Socks".to_string(),
            size: "-".to_string(),
            color: "-".to_string(),
            quantity: 1,
            unit_price: 10.0,
        };
        let long = LineRow {
            name: "Premium organic cotton crew neck t-shirt with front print".to_string(),
            ..short.clone()
        };
        assert_eq!(engine.row_height(&short), engine.theme().table.min_row_height);
        assert!(engine.row_height(&long) > engine.row_height(&short));
    }

    #[test]
    fn body_rows_alternate_background_fill() {
        let engine = layout();
        let doc = doc_with_rows(4);
        let mut out = Vec::new();
        let mut y = 300.0;
        let mut stripes = 0;
        for (i, row) in doc.rows.iter().enumerate() {
            let before = out.len();
            y = engine.row(&mut out, y, row, i);
            let has_stripe = out[before..]
                .iter()
                .any(|el| matches!(&el.element, LayoutElement::Rect(r) if r.fill.is_some()));
            if has_stripe {
                stripes += 1;
            }
        }
        assert_eq!(stripes, 2);
    }

    #[test]
    fn line_totals_are_recomputed_from_quantity_and_price() {
        let out = layout().paginate(&doc_with_rows(1), None);
        let texts = page_texts(&out.pages[0]);
        // 2 x 149.50
        assert!(texts.contains(&"Rs. 299.00"), "texts: {:?}", texts);
        assert!(texts.contains(&"Rs. 149.50"));
    }

    #[test]
    fn header_carries_number_and_date() {
        let out = layout().paginate(&doc_with_rows(1), None);
        let texts = page_texts(&out.pages[0]);
        assert!(texts.contains(&"Invoice No: ORD-1042"));
        assert!(texts.contains(&"Date: 05/08/2026"));
    }

    #[test]
    fn logo_is_placed_top_right_and_registered() {
        let engine = layout();
        let logo = ImageResource::new(200, 100, vec![0; 200 * 100 * 3]);
        let out = engine.paginate(&doc_with_rows(1), Some(&logo));
        assert!(out.resources.contains_key(LOGO_RESOURCE));

        let page = &out.pages[0];
        let placed = page
            .iter()
            .find(|el| matches!(el.element, LayoutElement::Image(_)))
            .expect("logo element");
        let right_edge = engine.theme().page.content_right();
        assert!((placed.x + placed.width - right_edge).abs() < 0.01);
        // Aspect ratio preserved: 2:1 raster at the themed height.
        assert!((placed.width - 2.0 * placed.height).abs() < 0.01);
    }

    #[test]
    fn no_logo_means_no_image_elements() {
        let out = layout().paginate(&doc_with_rows(1), None);
        assert!(out.resources.is_empty());
        for page in &out.pages {
            assert!(!page.iter().any(|el| matches!(el.element, LayoutElement::Image(_))));
        }
    }
}
