use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::{prelude::ToPrimitive, Decimal};

use super::{Item, Receipt};

/// Points awarded to a receipt, broken down by rule
///
/// Every rule is evaluated independently of the others. The score of a receipt is [`Points::total`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Points {
    /// One point for every alphanumeric character in the retailer name
    pub retailer_name: u64,
    /// 50 points if the total is a round dollar amount with no cents
    pub round_dollar_total: u64,
    /// 25 points if the total is a multiple of 0.25
    pub quarter_multiple_total: u64,
    /// 5 points for every two items on the receipt
    pub item_pairs: u64,
    /// Sum of the description bonus of every item
    pub item_descriptions: u64,
    /// 6 points if the day of the purchase date is odd
    pub odd_purchase_day: u64,
    /// 10 points if the purchase happened from 2:00pm up to, but excluding, 4:00pm
    pub afternoon_purchase: u64,
}

impl Points {
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Score a receipt
pub fn calculate_points(receipt: &Receipt) -> Points {
    const ROUND_DOLLAR_POINTS: u64 = 50;
    const QUARTER_MULTIPLE_POINTS: u64 = 25;
    const ITEM_PAIR_POINTS: u64 = 5;
    const ODD_DAY_POINTS: u64 = 6;
    const AFTERNOON_POINTS: u64 = 10;

    let award = |applies: bool, points: u64| if applies { points } else { 0 };

    Points {
        retailer_name: count_alphanumeric(&receipt.retailer),
        round_dollar_total: award(
            receipt.total.map_or(false, |total| total.is_round_dollar()),
            ROUND_DOLLAR_POINTS,
        ),
        quarter_multiple_total: award(
            receipt.total.map_or(false, |total| total.is_quarter_multiple()),
            QUARTER_MULTIPLE_POINTS,
        ),
        item_pairs: (receipt.items.len() as u64 / 2) * ITEM_PAIR_POINTS,
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0, u64::saturating_add),
        odd_purchase_day: award(is_odd_day(receipt.purchase_date), ODD_DAY_POINTS),
        afternoon_purchase: award(is_afternoon_purchase(receipt.purchase_time), AFTERNOON_POINTS),
    }
}

/// Number of `[A-Za-z0-9]` characters
pub fn count_alphanumeric(value: &str) -> u64 {
    value.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// Bonus for an item whose trimmed description length is a non-zero multiple of 3
///
/// The bonus is the price multiplied by 0.2, rounded up to the nearest integer.
pub fn item_description_points(item: &Item) -> u64 {
    // Length in bytes
    let length = item.short_description.trim().len();
    if length == 0 || length % 3 != 0 {
        return 0;
    }

    let Some(price) = item.price else {
        return 0;
    };

    price
        .as_decimal()
        .checked_mul(Decimal::new(2, 1))
        .map(|scaled| scaled.ceil().to_u64().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

pub fn is_odd_day(purchase_date: Option<NaiveDate>) -> bool {
    purchase_date.map_or(false, |date| date.day() % 2 == 1)
}

pub fn is_afternoon_purchase(purchase_time: Option<NaiveTime>) -> bool {
    purchase_time.map_or(false, |time| (14..16).contains(&time.hour()))
}
