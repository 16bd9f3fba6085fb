use facture::{CustomerRecord, OrderRecord};
use serde_json::{json, Value};

/// A customer record with every contact field filled in.
pub fn customer() -> CustomerRecord {
    serde_json::from_value(json!({
        "name": "Asha Verma",
        "email": "asha@example.com",
        "mobile": "+91 98450 00000"
    }))
    .unwrap()
}

pub fn line_item(name: &str, quantity: u32, unit_price: f64) -> Value {
    json!({
        "name": name,
        "size": "M",
        "color": "Blue",
        "quantity": quantity,
        "unitPrice": unit_price
    })
}

/// An order whose totals are consistent with its line items.
pub fn order_with_items(items: Vec<Value>) -> OrderRecord {
    let subtotal: f64 = items
        .iter()
        .map(|i| {
            i["quantity"].as_f64().unwrap_or(0.0) * i["unitPrice"].as_f64().unwrap_or(0.0)
        })
        .sum();
    let shipping = 49.0;
    let tax = 35.88;
    serde_json::from_value(json!({
        "id": "ORD-1042",
        "createdAt": "2026-08-05T10:30:00Z",
        "items": items,
        "subtotal": subtotal,
        "shippingCost": shipping,
        "tax": tax,
        "total": subtotal + shipping + tax,
        "shippingAddress": {
            "line": "12 MG Road",
            "city": "Bengaluru",
            "state": "KA",
            "postalCode": "560001"
        }
    }))
    .unwrap()
}

pub fn small_order() -> OrderRecord {
    order_with_items(vec![
        line_item("Crew Neck Tee", 2, 149.5),
        line_item("Canvas Tote", 1, 399.0),
    ])
}

pub fn large_order(item_count: usize) -> OrderRecord {
    let items = (0..item_count)
        .map(|i| line_item(&format!("Catalog Item {}", i + 1), 1, 99.0))
        .collect();
    order_with_items(items)
}
