use analytics::{DashboardOptions, DashboardService, InMemoryRepository, compute_analytics};
use chrono::NaiveDate;
use core_types::Sale;
use rust_decimal_macros::dec;

const SNAPSHOT: &str = r#"{
    "sales": [
        {"user_id": "shop-1", "date": "2024-01-01", "product_name": "Soap", "quantity_sold": 2, "unit_price": 5, "total_amount": 10},
        {"user_id": "shop-1", "date": "2024-01-02", "product_name": "Rice", "quantity_sold": 1, "unit_price": 40, "total_amount": "40.00"},
        {"user_id": "shop-1", "date": "2024-01-03", "product_name": "Oil", "quantity_sold": 1, "total_amount": 25},
        {"user_id": "shop-1", "date": "2024-01-03", "product_name": "Soap", "quantity_sold": 1, "total_amount": 5},
        {"user_id": "shop-1", "date": null, "product_name": "Salt", "quantity_sold": 4, "total_amount": "abc"},
        {"user_id": "shop-2", "date": "2024-01-03", "product_name": "Gold", "quantity_sold": 1, "total_amount": 9999}
    ],
    "products": [
        {"user_id": "shop-1", "name": "Soap", "price": 5, "quantity": 8},
        {"user_id": "shop-1", "name": "Rice", "price": "40", "quantity": 20}
    ],
    "customers": [
        {"user_id": "shop-1", "full_name": "Ama", "gender": "female", "created_at": "2024-01-02T09:00:00Z"},
        {"user_id": "shop-1", "full_name": "Kofi", "gender": "male", "created_at": "2023-11-20T09:00:00Z"}
    ]
}"#;

#[tokio::test]
async fn builds_the_dashboard_for_one_account() {
    let repo = InMemoryRepository::from_json(SNAPSHOT).unwrap();
    let options = DashboardOptions { chart_window: 2, ..DashboardOptions::default() };
    let service = DashboardService::new(repo, options);
    let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();

    let summary = service.build("shop-1", today).await.unwrap();

    assert_eq!(summary.sales.total_sales, dec!(80));
    assert_eq!(summary.total_orders, 5);
    assert_eq!(summary.today_sales, dec!(30));

    let labels: Vec<_> = summary.sales.sales_by_date.labels().collect();
    assert_eq!(labels, vec!["1/1/2024", "1/2/2024", "1/3/2024", "Unknown"]);
    let chart: Vec<_> = summary.chart.iter().collect();
    assert_eq!(chart, vec![("1/3/2024", dec!(30)), ("Unknown", dec!(0))]);

    let top: Vec<_> = summary
        .highlighted_products
        .iter()
        .map(|p| (p.product_name.as_str(), p.quantity_sold, p.total_revenue))
        .collect();
    assert_eq!(top, vec![("Rice", 1, dec!(40)), ("Oil", 1, dec!(25)), ("Soap", 3, dec!(15))]);
    assert_eq!(summary.sales.top_products.len(), 4);

    assert_eq!(summary.inventory.total_products, 2);
    assert_eq!(summary.inventory.low_stock.len(), 1);
    assert_eq!(summary.inventory.total_value, dec!(840));

    assert_eq!(summary.customers.total_customers, 2);
    assert_eq!(summary.customers.new_this_month, 1);
    assert_eq!(summary.customers.female, 1);
    assert_eq!(summary.customers.male, 1);
}

#[tokio::test]
async fn sales_only_report_matches_the_pure_calculation() {
    let repo = InMemoryRepository::from_json(SNAPSHOT).unwrap();
    let service = DashboardService::new(repo, DashboardOptions::default());

    let fetched = service.sales_analytics("shop-2").await.unwrap();

    let snapshot: serde_json::Value = serde_json::from_str(SNAPSHOT).unwrap();
    let shop_2: Vec<Sale> = serde_json::from_value::<Vec<Sale>>(snapshot["sales"].clone())
        .unwrap()
        .into_iter()
        .filter(|s| s.user_id.as_deref() == Some("shop-2"))
        .collect();
    assert_eq!(fetched, compute_analytics(&shop_2));
    assert_eq!(fetched.total_sales, dec!(9999));
}

#[tokio::test]
async fn a_bad_customer_timestamp_does_not_fail_the_dashboard() {
    let snapshot = r#"{
        "sales": [{"user_id": "shop-1", "date": "2024-01-03", "product_name": "Soap", "total_amount": 5}],
        "customers": [
            {"user_id": "shop-1", "gender": "female", "created_at": "not a date"},
            {"user_id": "shop-1", "gender": "male", "created_at": "2024-01-01 10:00:00+00"}
        ]
    }"#;
    let repo = InMemoryRepository::from_json(snapshot).unwrap();
    let service = DashboardService::new(repo, DashboardOptions::default());
    let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();

    let summary = service.build("shop-1", today).await.unwrap();

    assert_eq!(summary.customers.total_customers, 2);
    assert_eq!(summary.customers.new_this_month, 1);
    assert_eq!(summary.sales.total_sales, dec!(5));
}
