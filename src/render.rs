use analytics::{DashboardSummary, DateSeries, ProductSummary, SalesAnalytics};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as `₵1,234.50`: two decimals, comma-grouped thousands.
pub fn format_currency(symbol: &str, amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, grouped, fraction)
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

fn series_table(series: &DateSeries, symbol: &str) -> Table {
    let mut table = new_table(vec!["Date", "Revenue"]);
    for (label, amount) in series.iter() {
        table.add_row(vec![Cell::new(label), Cell::new(format_currency(symbol, amount))]);
    }
    table
}

fn products_table(products: &[ProductSummary], symbol: &str) -> Table {
    let mut table = new_table(vec!["#", "Product", "Units sold", "Revenue"]);
    for (rank, product) in products.iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("#{}", rank + 1)),
            Cell::new(&product.product_name),
            Cell::new(product.quantity_sold),
            Cell::new(format_currency(symbol, product.total_revenue)),
        ]);
    }
    table
}

/// Renders the sales report as plain-text tables.
pub fn render_analytics(report: &SalesAnalytics, symbol: &str) -> String {
    let mut out = format!("Total Sales: {}\n\n", format_currency(symbol, report.total_sales));
    out.push_str(&format!("Sales by Date\n{}\n\n", series_table(&report.sales_by_date, symbol)));
    out.push_str(&format!("Top Products\n{}\n", products_table(&report.top_products, symbol)));
    out
}

/// Renders the dashboard cards as plain-text tables.
pub fn render_dashboard(summary: &DashboardSummary, symbol: &str) -> String {
    let mut cards = new_table(vec!["Business Summary", ""]);
    cards
        .add_row(vec!["Total Sales".to_string(), format_currency(symbol, summary.sales.total_sales)])
        .add_row(vec!["Today's Sales".to_string(), format_currency(symbol, summary.today_sales)])
        .add_row(vec!["Orders".to_string(), summary.total_orders.to_string()])
        .add_row(vec!["Products".to_string(), summary.inventory.total_products.to_string()])
        .add_row(vec![
            "Stock Value".to_string(),
            format_currency(symbol, summary.inventory.total_value),
        ])
        .add_row(vec![
            "Customers".to_string(),
            format!(
                "{} (new: {} | female {} / male {})",
                summary.customers.total_customers,
                summary.customers.new_this_month,
                summary.customers.female,
                summary.customers.male
            ),
        ]);

    let mut out = format!(
        "Dashboard for {} as of {}\n{}\n\n",
        summary.account_id, summary.generated_on, cards
    );

    if !summary.inventory.low_stock.is_empty() {
        out.push_str(&format!(
            "Low Stock Alert: {} products are running low on stock\n",
            summary.inventory.low_stock.len()
        ));
        let mut low = new_table(vec!["Product", "Quantity"]);
        for item in &summary.inventory.low_stock {
            low.add_row(vec![Cell::new(&item.name), Cell::new(item.quantity)]);
        }
        out.push_str(&format!("{}\n\n", low));
    }

    out.push_str(&format!("Sales Trends\n{}\n\n", series_table(&summary.chart, symbol)));
    out.push_str(&format!(
        "Top Products\n{}\n",
        products_table(&summary.highlighted_products, symbol)
    ));
    out
}
