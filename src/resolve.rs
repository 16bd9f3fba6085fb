//! Ordered-fallback resolution for optional upstream fields.
//!
//! The storefront's records are full of half-filled optionals. Every
//! fallback chain lives here, applied once while building the
//! `InvoiceDoc`; downstream layers only ever see concrete values. A blank
//! string counts as absent, matching how the upstream backend treats its
//! fields.

use crate::model::{Address, LineItem};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use itertools::Itertools;

/// Display name for a line item: `name`, then the linked product's name,
/// then a generic placeholder.
pub fn item_name(item: &LineItem) -> String {
    non_empty(item.name.as_deref())
        .or_else(|| non_empty(item.product.as_ref().and_then(|p| p.name.as_deref())))
        .unwrap_or("Product")
        .to_string()
}

/// Optional descriptive fields (size, color) render as a literal dash when
/// absent.
pub fn text_or_dash(value: Option<&str>) -> String {
    non_empty(value).unwrap_or("-").to_string()
}

/// Present address components joined by a comma, `None` when the record
/// carries nothing usable.
pub fn address_line(address: &Address) -> Option<String> {
    let joined = [
        address.line.as_deref(),
        address.city.as_deref(),
        address.state.as_deref(),
        address.postal_code.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.trim().is_empty())
    .join(", ");
    if joined.is_empty() { None } else { Some(joined) }
}

/// When the order was issued. Tries RFC 3339 first, then the two naive
/// formats older rows carry. Anything unparseable (or missing) substitutes
/// the current time; the invoice still renders, dated today.
pub fn issued_at(raw: Option<&str>) -> DateTime<Utc> {
    let Some(raw) = non_empty(raw) else {
        return Utc::now();
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Utc);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return parsed.and_utc();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = parsed.and_hms_opt(0, 0, 0) {
            return midnight.and_utc();
        }
    }
    log::warn!("unparseable order timestamp {:?}, substituting current time", raw);
    Utc::now()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
