use crate::DbError;
use analytics::{RepositoryError, SalesRepository};
use async_trait::async_trait;
use core_types::{Customer, Product, RawValue, Sale};
use sqlx::FromRow;
use sqlx::postgres::PgPool;

/// The `DbRepository` provides read access to one account's records.
/// It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

/// A row from the `sales` table, every column rendered as text.
#[derive(Debug, Clone, Default, FromRow)]
pub struct DbSale {
    pub id: Option<String>,
    pub date: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub quantity_sold: Option<String>,
    pub unit_price: Option<String>,
    pub total_amount: Option<String>,
    pub customer_name: Option<String>,
    pub payment_method: Option<String>,
    pub user_id: Option<String>,
}

/// A row from the `products` table.
#[derive(Debug, Clone, Default, FromRow)]
pub struct DbProduct {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
    pub category: Option<String>,
    pub user_id: Option<String>,
}

/// A row from the `customers` table. `created_at` is read as text like the
/// sales columns so a bad timestamp cannot fail the query.
#[derive(Debug, Clone, Default, FromRow)]
pub struct DbCustomer {
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub referral_source: Option<String>,
    pub created_at: Option<String>,
    pub user_id: Option<String>,
}

fn raw(text: Option<String>) -> Option<RawValue> {
    text.map(RawValue::Text)
}

impl From<DbSale> for Sale {
    fn from(row: DbSale) -> Self {
        Sale {
            id: raw(row.id),
            date: raw(row.date),
            product_id: raw(row.product_id),
            product_name: row.product_name,
            quantity_sold: raw(row.quantity_sold),
            unit_price: raw(row.unit_price),
            total_amount: raw(row.total_amount),
            customer_name: row.customer_name,
            payment_method: row.payment_method,
            user_id: row.user_id,
        }
    }
}

impl From<DbProduct> for Product {
    fn from(row: DbProduct) -> Self {
        Product {
            id: raw(row.id),
            name: row.name,
            price: raw(row.price),
            quantity: raw(row.quantity),
            category: row.category,
            user_id: row.user_id,
        }
    }
}

impl From<DbCustomer> for Customer {
    fn from(row: DbCustomer) -> Self {
        Customer {
            id: raw(row.id),
            full_name: row.full_name,
            gender: row.gender,
            referral_source: row.referral_source,
            created_at: raw(row.created_at),
            user_id: row.user_id,
        }
    }
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetches every sale owned by `account_id`, unsorted.
    ///
    /// Numeric columns are read as text so that one malformed value cannot
    /// fail the whole query; coercion happens in `core-types`.
    pub async fn get_sales(&self, account_id: &str) -> Result<Vec<Sale>, DbError> {
        let rows = sqlx::query_as::<_, DbSale>(
            r#"
            SELECT
                id::text AS id,
                date::text AS date,
                product_id::text AS product_id,
                product_name,
                quantity_sold::text AS quantity_sold,
                unit_price::text AS unit_price,
                total_amount::text AS total_amount,
                customer_name,
                payment_method,
                user_id::text AS user_id
            FROM sales
            WHERE user_id::text = $1
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(account_id, rows = rows.len(), "Fetched sales.");
        Ok(rows.into_iter().map(Sale::from).collect())
    }

    /// Fetches every product owned by `account_id`.
    pub async fn get_products(&self, account_id: &str) -> Result<Vec<Product>, DbError> {
        let rows = sqlx::query_as::<_, DbProduct>(
            r#"
            SELECT
                id::text AS id,
                name,
                price::text AS price,
                quantity::text AS quantity,
                category,
                user_id::text AS user_id
            FROM products
            WHERE user_id::text = $1
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(account_id, rows = rows.len(), "Fetched products.");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Fetches every customer owned by `account_id`.
    pub async fn get_customers(&self, account_id: &str) -> Result<Vec<Customer>, DbError> {
        let rows = sqlx::query_as::<_, DbCustomer>(
            r#"
            SELECT
                id::text AS id,
                full_name,
                gender,
                referral_source,
                created_at::text AS created_at,
                user_id::text AS user_id
            FROM customers
            WHERE user_id::text = $1
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(account_id, rows = rows.len(), "Fetched customers.");
        Ok(rows.into_iter().map(Customer::from).collect())
    }
}

#[async_trait]
impl SalesRepository for DbRepository {
    async fn fetch_sales(&self, account_id: &str) -> Result<Vec<Sale>, RepositoryError> {
        Ok(self.get_sales(account_id).await?)
    }

    async fn fetch_products(&self, account_id: &str) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.get_products(account_id).await?)
    }

    async fn fetch_customers(&self, account_id: &str) -> Result<Vec<Customer>, RepositoryError> {
        Ok(self.get_customers(account_id).await?)
    }
}
