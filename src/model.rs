//! Entity model: read-only values projected out of backend responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::DocumentQuery;
use crate::extract;

/// Identity of one gift list plus its derived sharable URL.
///
/// Constructed only from a successful create or fetch; never mutated.
/// Deleting a list goes through the delete operation and leaves any existing
/// `ListSummary` values untouched, the caller simply discards them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageMeta {
    pub url: String,
    pub alt_text: String,
    pub title: String,
    pub width: String,
    pub height: String,
}

/// One catalog product inside a list, rebuilt on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub sku: String,
    pub name: String,
    pub url: String,
    /// True iff the raw price field contains at least one digit.
    pub available: bool,
    /// Unit price: digits of the formatted price joined, divided by 100.
    /// Zero when unavailable.
    pub value: f64,
    /// The backend's human-readable price string, `"0"` when unavailable.
    pub formatted_value: String,
    /// Desired quantity; the backend ships it embedded in a markup fragment.
    pub wished_quantity: u32,
    /// Quantity already fulfilled by other buyers.
    pub purchased_quantity: u32,
    pub image: ImageMeta,
}

pub(crate) fn json_string(v: Option<&Value>) -> String {
    match v {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

pub(crate) fn json_u32(v: Option<&Value>) -> u32 {
    match v {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0) as u32,
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

impl ListItem {
    /// Projects one record of the backend's `Items` array.
    ///
    /// `WishedAmount` travels as an HTML fragment containing the quantity
    /// input control, hence the document-query dependency.
    pub fn from_record(record: &Value, documents: &dyn DocumentQuery) -> Self {
        let raw_price = json_string(record.get("Value"));
        let available = raw_price.chars().any(|c| c.is_ascii_digit());
        let (value, formatted_value) = if available {
            let digits: String = raw_price.chars().filter(|c| c.is_ascii_digit()).collect();
            (digits.parse::<u64>().unwrap_or(0) as f64 / 100.0, raw_price)
        } else {
            (0.0, "0".to_string())
        };

        let wished_fragment = json_string(record.get("WishedAmount"));
        let image = record.get("Image");

        Self {
            sku: json_string(record.get("SkuId")),
            name: json_string(record.get("Name")),
            url: json_string(record.get("ProductUrl")),
            available,
            value,
            formatted_value,
            wished_quantity: extract::wished_quantity(&wished_fragment, documents),
            purchased_quantity: json_u32(record.get("PurchasedAmount")),
            image: ImageMeta {
                url: json_string(image.and_then(|i| i.get("src"))),
                alt_text: json_string(image.and_then(|i| i.get("alt"))),
                title: json_string(image.and_then(|i| i.get("title"))),
                width: json_string(image.and_then(|i| i.get("width"))),
                height: json_string(image.and_then(|i| i.get("height"))),
            },
        }
    }
}

/// Aggregate over one list's items, attached to `get_list` responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemsSummary {
    /// Sum of `value * wished_quantity` over available items.
    pub total: f64,
    pub quantity: u32,
    pub available: u32,
    pub unavailable: u32,
}

/// `get_list` payload: the items plus their aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListDetail {
    pub items: Vec<ListItem>,
    pub summary: ItemsSummary,
}

/// Result of the create-or-reuse-then-submit family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddItemsReceipt {
    pub list: ListSummary,
    pub is_new_list: bool,
    pub existing_skus: u32,
    pub inserted_skus: u32,
}

/// Quantity-change acknowledgement. `amount` is the delta the backend
/// applied, not the final quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityUpdate {
    pub amount: i64,
    pub operation: String,
}

/// Totals scraped from the statistics fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStats {
    pub total: String,
    pub purchased: String,
}

/// One row of a gift-list search. Image fields are empty strings when the
/// row carries no image; consumers must treat that as "no image".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub name: String,
    pub image_id: String,
    pub image: String,
    pub full_image: String,
    pub location: String,
    pub city: String,
    pub date: String,
    pub member: String,
    pub url: String,
}
