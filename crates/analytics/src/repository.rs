use crate::error::RepositoryError;
use async_trait::async_trait;
use core_types::{Customer, Product, Sale};
use serde::{Deserialize, Serialize};

/// Read access to an account's records on the hosted backend.
///
/// Every method returns the full, unsorted set of records owned by
/// `account_id`. Scoping by account is the implementation's responsibility.
#[async_trait]
pub trait SalesRepository: Send + Sync {
    async fn fetch_sales(&self, account_id: &str) -> Result<Vec<Sale>, RepositoryError>;

    async fn fetch_products(&self, account_id: &str) -> Result<Vec<Product>, RepositoryError>;

    async fn fetch_customers(&self, account_id: &str) -> Result<Vec<Customer>, RepositoryError>;
}

#[async_trait]
impl<T: SalesRepository + ?Sized> SalesRepository for Box<T> {
    async fn fetch_sales(&self, account_id: &str) -> Result<Vec<Sale>, RepositoryError> {
        (**self).fetch_sales(account_id).await
    }

    async fn fetch_products(&self, account_id: &str) -> Result<Vec<Product>, RepositoryError> {
        (**self).fetch_products(account_id).await
    }

    async fn fetch_customers(&self, account_id: &str) -> Result<Vec<Customer>, RepositoryError> {
        (**self).fetch_customers(account_id).await
    }
}

/// A JSON export of the backend tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub sales: Vec<Sale>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

/// A repository over records held in memory, typically loaded from a [`Snapshot`].
///
/// Records without a `user_id` belong to no account and are never returned.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    snapshot: Snapshot,
}

impl InMemoryRepository {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_json(json: &str) -> Result<Self, RepositoryError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

fn owned_by<T: Clone>(
    records: &[T],
    account_id: &str,
    owner: impl Fn(&T) -> Option<&str>,
) -> Vec<T> {
    records
        .iter()
        .filter(|record| owner(record) == Some(account_id))
        .cloned()
        .collect()
}

#[async_trait]
impl SalesRepository for InMemoryRepository {
    async fn fetch_sales(&self, account_id: &str) -> Result<Vec<Sale>, RepositoryError> {
        Ok(owned_by(&self.snapshot.sales, account_id, |s| s.user_id.as_deref()))
    }

    async fn fetch_products(&self, account_id: &str) -> Result<Vec<Product>, RepositoryError> {
        Ok(owned_by(&self.snapshot.products, account_id, |p| p.user_id.as_deref()))
    }

    async fn fetch_customers(&self, account_id: &str) -> Result<Vec<Customer>, RepositoryError> {
        Ok(owned_by(&self.snapshot.customers, account_id, |c| c.user_id.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "sales": [
            {"user_id": "alice", "product_name": "Soap", "total_amount": 10},
            {"user_id": "bob", "product_name": "Rice", "total_amount": 25},
            {"product_name": "Orphan", "total_amount": 1}
        ],
        "products": [{"user_id": "alice", "name": "Soap", "quantity": 4}]
    }"#;

    #[tokio::test]
    async fn scopes_records_to_the_account() {
        let repo = InMemoryRepository::from_json(SNAPSHOT).unwrap();

        let sales = repo.fetch_sales("alice").await.unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].product_name.as_deref(), Some("Soap"));

        assert_eq!(repo.fetch_products("bob").await.unwrap().len(), 0);
        assert!(repo.fetch_customers("alice").await.unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_snapshots() {
        let err = InMemoryRepository::from_json("{not json").unwrap_err();
        assert!(matches!(err, RepositoryError::Snapshot(_)));
    }
}
