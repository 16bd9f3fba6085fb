//! The fully resolved invoice content the layout engine consumes.
//!
//! Upstream records are normalized into this shape before layout: every
//! optional field already resolved, the date already formatted, address
//! components already joined. Layout never touches raw order JSON.

#[derive(Debug, Clone)]
pub struct InvoiceDoc {
    pub number: String,
    pub issued_on: String,
    pub bill_to: BillTo,
    pub rows: Vec<LineRow>,
    pub totals: Totals,
}

#[derive(Debug, Clone, Default)]
pub struct BillTo {
    pub name: String,
    /// Present address components joined by `", "`; `None` when the
    /// customer record carried no address at all.
    pub address: Option<String>,
    pub mobile: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct LineRow {
    pub name: String,
    pub size: String,
    pub color: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl LineRow {
    /// Always recomputed from quantity and unit price; a stored line total
    /// on the upstream record is never trusted.
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Totals {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}
