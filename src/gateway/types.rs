//! Wire records exchanged with the channel gateway.
//!
//! Field names follow the gateway's PascalCase JSON.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawOrder {
    pub channel_order_no: String,
    pub status: String,
    pub lines: Vec<RawOrderLine>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawOrderLine {
    pub gtin: Option<String>,
    pub description: String,
    pub quantity: i32,
    pub merchant_product_no: String,
    #[serde(deserialize_with = "string_or_number")]
    pub channel_product_no: String,
    pub stock_location: StockLocationRef,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StockLocationRef {
    #[serde(rename = "Id")]
    pub id: i32,
}

/// One row of `GET /v2/offer/stock`. Both fields are optional on the wire;
/// a missing or null `Stock` reads as zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockEntry {
    #[serde(default)]
    pub merchant_product_no: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
}

/// Body element of `PUT /v2/offer/stock`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockUpdate {
    pub merchant_product_no: String,
    pub stock_locations: Vec<StockLocationUpdate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockLocationUpdate {
    pub stock: i64,
    pub stock_location_id: i32,
}

// The gateway sends channel product numbers as strings for some channels and
// as bare integers for others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}
