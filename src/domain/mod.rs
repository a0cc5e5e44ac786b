use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

pub mod points;

pub use points::{calculate_points, Points};

/// Format of `purchaseDate` on the wire
const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";
/// Format of `purchaseTime` on the wire (24-hour clock)
const PURCHASE_TIME_FORMAT: &str = "%H:%M";

/// A purchase receipt submitted for scoring
///
/// Fields that arrive as free-form strings are parsed once, when the `Receipt` is built. A field
/// that fails to parse is kept as `None` and the rules depending on it award no points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Name of the retailer or store the receipt is from
    pub retailer: String,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_time: Option<NaiveTime>,
    pub items: Vec<Item>,
    /// Total amount paid on the receipt
    pub total: Option<Amount>,
}

impl Receipt {
    pub fn new(
        retailer: impl Into<String>,
        purchase_date: &str,
        purchase_time: &str,
        items: Vec<Item>,
        total: &str,
    ) -> Self {
        Self {
            retailer: retailer.into(),
            purchase_date: NaiveDate::parse_from_str(purchase_date, PURCHASE_DATE_FORMAT).ok(),
            purchase_time: NaiveTime::parse_from_str(purchase_time, PURCHASE_TIME_FORMAT).ok(),
            items,
            total: Amount::parse(total),
        }
    }
}

/// One line entry on a receipt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Short product description for the item
    pub short_description: String,
    /// Price paid for this item
    pub price: Option<Amount>,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: &str) -> Self {
        Self {
            short_description: short_description.into(),
            price: Amount::parse(price),
        }
    }
}

/// Exact, non-negative monetary amount
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// Parse a plain decimal string such as `"9.00"` or `"100"`
    ///
    /// Returns `None` for anything else, including negative amounts, exponents, surrounding
    /// whitespace and values that cannot be represented without rounding.
    pub fn parse(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('+').unwrap_or(value);
        let well_formed = digits.bytes().any(|b| b.is_ascii_digit())
            && digits.bytes().all(|b| b.is_ascii_digit() || b == b'.');
        if !well_formed {
            return None;
        }

        Decimal::from_str_exact(digits).ok().map(Self)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Whether the amount has no cents
    pub fn is_round_dollar(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// Whether the amount is an exact multiple of 0.25
    pub fn is_quarter_multiple(&self) -> bool {
        let quarter = Decimal::new(25, 2);
        self.0
            .checked_rem(quarter)
            .map_or(false, |remainder| remainder.is_zero())
    }
}
