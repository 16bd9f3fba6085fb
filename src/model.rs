//! Upstream order and customer records, as the storefront's ORM emits them.
//!
//! Deserialization is deliberately lenient: monetary fields and quantities
//! arrive as numbers, numeric strings, or not at all, and anything
//! unusable coerces to zero. Validation of the business invariants happens
//! separately in [`OrderRecord::validate`], after parsing.

use crate::error::InvoiceError;
use crate::resolve;
use facture_layout::{BillTo, InvoiceDoc, LineRow, Totals};
use serde::{Deserialize, Deserializer};

/// A non-negative monetary value. Parses from a JSON number, a numeric
/// string, or null; invalid, negative, or non-finite input coerces to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 { Self(value) } else { Self(0.0) }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum AmountDef {
            Num(f64),
            Str(String),
            Other(serde::de::IgnoredAny),
        }

        let value = match AmountDef::deserialize(deserializer)? {
            AmountDef::Num(n) => n,
            AmountDef::Str(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            AmountDef::Other(_) => 0.0,
        };
        Ok(Amount::new(value))
    }
}

/// A count of units. Same leniency as [`Amount`]; fractional input
/// truncates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum QuantityDef {
            Num(f64),
            Str(String),
            Other(serde::de::IgnoredAny),
        }

        let value = match QuantityDef::deserialize(deserializer)? {
            QuantityDef::Num(n) => n,
            QuantityDef::Str(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            QuantityDef::Other(_) => 0.0,
        };
        let value = if value.is_finite() && value > 0.0 { value as u32 } else { 0 };
        Ok(Quantity(value))
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringDef {
        Str(String),
        Num(i64),
        Other(serde::de::IgnoredAny),
    }

    Ok(match StringDef::deserialize(deserializer)? {
        StringDef::Str(s) => s,
        StringDef::Num(n) => n.to_string(),
        StringDef::Other(_) => String::new(),
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderRecord {
    /// Order identifiers are strings upstream but occasionally arrive as
    /// bare numbers from older rows.
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    pub created_at: Option<String>,
    pub items: Vec<LineItem>,
    pub subtotal: Amount,
    pub shipping_cost: Amount,
    pub tax: Amount,
    pub total: Amount,
    pub shipping_address: Option<Address>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerRecord {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
    pub name: Option<String>,
    pub product: Option<ProductRef>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: Quantity,
    pub unit_price: Amount,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

impl OrderRecord {
    /// The input invariants: at least one line item, every item with a
    /// positive quantity. Checked before any drawing or I/O begins.
    pub fn validate(&self) -> Result<(), InvoiceError> {
        if self.items.is_empty() {
            return Err(InvoiceError::InvalidInput("order has no line items".to_string()));
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.quantity.get() == 0 {
                return Err(InvoiceError::InvalidInput(format!(
                    "line item {} has no positive quantity",
                    index + 1
                )));
            }
        }
        Ok(())
    }
}

/// Resolves the raw records into the concrete view the layout engine
/// consumes. All fallback policies are applied here, exactly once.
pub fn to_invoice_doc(order: &OrderRecord, customer: &CustomerRecord) -> InvoiceDoc {
    InvoiceDoc {
        number: order.id.clone(),
        issued_on: resolve::issued_at(order.created_at.as_deref())
            .format("%d/%m/%Y")
            .to_string(),
        bill_to: BillTo {
            name: customer.name.clone(),
            address: order.shipping_address.as_ref().and_then(resolve::address_line),
            mobile: customer.mobile.clone(),
            email: customer.email.clone(),
        },
        rows: order
            .items
            .iter()
            .map(|item| LineRow {
                name: resolve::item_name(item),
                size: resolve::text_or_dash(item.size.as_deref()),
                color: resolve::text_or_dash(item.color.as_deref()),
                quantity: item.quantity.get(),
                unit_price: item.unit_price.get(),
            })
            .collect(),
        totals: Totals {
            subtotal: order.subtotal.get(),
            shipping: order.shipping_cost.get(),
            tax: order.tax.get(),
            total: order.total.get(),
        },
    }
}
