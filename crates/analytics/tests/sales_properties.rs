//! Invariants of the sales report that must hold for any input.

use analytics::compute_analytics;
use core_types::{RawValue, Sale};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;

fn raw_amount() -> impl Strategy<Value = Option<RawValue>> {
    prop_oneof![
        Just(None),
        (0i64..100_000).prop_map(|cents| Some(RawValue::from(Decimal::new(cents, 2)))),
        (0i64..1_000).prop_map(|n| Some(RawValue::from(n.to_string()))),
        Just(Some(RawValue::from("abc"))),
        Just(Some(RawValue::from(""))),
    ]
}

fn raw_date() -> impl Strategy<Value = Option<RawValue>> {
    prop_oneof![
        Just(None),
        (1u32..=28).prop_map(|day| Some(RawValue::from(format!("2024-02-{:02}", day)))),
        Just(Some(RawValue::from("garbage"))),
    ]
}

fn sale() -> impl Strategy<Value = Sale> {
    (raw_date(), prop::option::of("[A-H]"), 0i64..20, raw_amount()).prop_map(
        |(date, product_name, quantity, total_amount)| Sale {
            date,
            product_name,
            quantity_sold: Some(RawValue::from(quantity)),
            total_amount,
            ..Sale::default()
        },
    )
}

proptest! {
    #[test]
    fn date_groups_partition_the_total(sales in prop::collection::vec(sale(), 0..40)) {
        let report = compute_analytics(&sales);
        prop_assert_eq!(report.sales_by_date.total(), report.total_sales);
    }

    #[test]
    fn top_products_are_bounded_and_sorted(sales in prop::collection::vec(sale(), 0..40)) {
        let report = compute_analytics(&sales);

        let distinct: HashSet<String> = sales
            .iter()
            .map(|s| match s.product_name.as_deref() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => core_types::UNKNOWN_LABEL.to_string(),
            })
            .collect();
        prop_assert_eq!(report.top_products.len(), distinct.len().min(5));

        for pair in report.top_products.windows(2) {
            prop_assert!(pair[0].total_revenue >= pair[1].total_revenue);
        }

        let ranked: Decimal = report.top_products.iter().map(|p| p.total_revenue).sum();
        prop_assert!(ranked <= report.total_sales);
        if distinct.len() <= 5 {
            prop_assert_eq!(ranked, report.total_sales);
        }
    }

    #[test]
    fn is_pure(sales in prop::collection::vec(sale(), 0..20)) {
        prop_assert_eq!(compute_analytics(&sales), compute_analytics(&sales));
    }
}
