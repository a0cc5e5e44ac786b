//! Wire types for the receipts API

use serde::{Deserialize, Serialize};

use crate::domain::{Item, Receipt};

/// Receipt as submitted to `POST /receipts/process`
///
/// Dates, times and amounts stay strings here so that any well-formed JSON object with the
/// expected fields is accepted. They are parsed when converting into a domain [`Receipt`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    pub retailer: String,
    /// `YYYY-MM-DD`
    pub purchase_date: String,
    /// `HH:MM`, 24-hour clock
    pub purchase_time: String,
    pub items: Vec<ItemPayload>,
    pub total: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub short_description: String,
    pub price: String,
}

impl From<ReceiptPayload> for Receipt {
    fn from(payload: ReceiptPayload) -> Self {
        Receipt::new(
            payload.retailer,
            &payload.purchase_date,
            &payload.purchase_time,
            payload.items.into_iter().map(Item::from).collect(),
            &payload.total,
        )
    }
}

impl From<ItemPayload> for Item {
    fn from(payload: ItemPayload) -> Self {
        Item::new(payload.short_description, &payload.price)
    }
}

#[derive(Debug, Serialize)]
pub struct ReceiptIdResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
