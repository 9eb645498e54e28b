//! Saturating arithmetic for report totals.
//!
//! Amounts come straight from user-entered rows, so a sum can exceed the
//! `Decimal` range. Totals clamp at the bounds instead of panicking.

use rust_decimal::Decimal;

fn clamp_toward(sign_negative: bool) -> Decimal {
    if sign_negative { Decimal::MIN } else { Decimal::MAX }
}

/// `total + amount`, clamped to `Decimal::MIN..=Decimal::MAX`.
pub fn add_amount(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        tracing::warn!(%total, %amount, "Sales total overflowed; clamping.");
        clamp_toward(amount.is_sign_negative())
    })
}

/// `price * quantity`, clamped to `Decimal::MIN..=Decimal::MAX`.
pub fn multiply_amount(price: Decimal, quantity: i64) -> Decimal {
    let quantity = Decimal::from(quantity);
    price.checked_mul(quantity).unwrap_or_else(|| {
        tracing::warn!(%price, %quantity, "Stock value overflowed; clamping.");
        clamp_toward(price.is_sign_negative() != quantity.is_sign_negative())
    })
}

/// Sums `amounts` with [`add_amount`].
pub fn sum_amounts(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, add_amount)
}
