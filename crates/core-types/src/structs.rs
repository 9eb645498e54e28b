use crate::coerce::{parse_amount, parse_quantity, parse_sale_date};
use crate::enums::Gender;
use crate::value::RawValue;
use chrono::{FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label used for a sale whose date or product name cannot be determined.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A completed sale as stored by the backend.
///
/// Every field is optional and numeric fields are kept raw; the backend does
/// not enforce types and older rows are known to be inconsistent. Use
/// [`Sale::normalize`] before doing arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(default)]
    pub id: Option<RawValue>,
    #[serde(default)]
    pub date: Option<RawValue>,
    #[serde(default)]
    pub product_id: Option<RawValue>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity_sold: Option<RawValue>,
    #[serde(default)]
    pub unit_price: Option<RawValue>,
    /// Stored independently of `quantity_sold * unit_price` and trusted as-is.
    #[serde(default)]
    pub total_amount: Option<RawValue>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// A sale with every field coerced to a usable value.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSale {
    /// `None` when the date was missing or unparseable.
    pub date: Option<NaiveDate>,
    pub product_name: String,
    pub quantity_sold: i64,
    pub total_amount: Decimal,
}

impl Sale {
    /// Coerces the raw fields once, resolving dates in the account's `offset`.
    pub fn normalize(&self, offset: FixedOffset) -> NormalizedSale {
        let total_amount = parse_amount(self.total_amount.as_ref());
        if total_amount.is_zero() && self.total_amount.is_some() {
            tracing::debug!(
                sale_id = ?self.id,
                raw = ?self.total_amount,
                "Sale total_amount coerced to zero."
            );
        }

        let product_name = match self.product_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => UNKNOWN_LABEL.to_string(),
        };

        NormalizedSale {
            date: parse_sale_date(self.date.as_ref(), offset),
            product_name,
            quantity_sold: parse_quantity(self.quantity_sold.as_ref()),
            total_amount,
        }
    }
}

/// A stocked item in the account's inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<RawValue>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<RawValue>,
    #[serde(default)]
    pub quantity: Option<RawValue>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Product {
    pub fn price(&self) -> Decimal {
        parse_amount(self.price.as_ref())
    }

    /// Units on hand; a missing quantity counts as none.
    pub fn quantity(&self) -> i64 {
        parse_quantity(self.quantity.as_ref())
    }

    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_LABEL,
        }
    }
}

/// A customer record kept for KYC and marketing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: Option<RawValue>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub referral_source: Option<String>,
    /// Kept raw like the sale fields; see [`Customer::created_on`].
    #[serde(default)]
    pub created_at: Option<RawValue>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Customer {
    pub fn gender(&self) -> Gender {
        self.gender
            .as_deref()
            .map(Gender::from_field)
            .unwrap_or(Gender::Other)
    }

    /// The calendar day the customer was created, in the account's offset.
    /// `None` when the timestamp is missing or unparseable.
    pub fn created_on(&self, offset: FixedOffset) -> Option<NaiveDate> {
        parse_sale_date(self.created_at.as_ref(), offset)
    }
}
