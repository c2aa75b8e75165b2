//! Durable order store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::Mutex;

use nexus_core::orders::Order;

use crate::orders::errors::OrdersRepositoryError;

/// Append-only collection of placed orders.
#[automock]
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Append one order. Existing records are never updated or deleted.
    async fn append(&self, order: &Order) -> Result<(), OrdersRepositoryError>;

    /// All orders, oldest first.
    async fn list(&self) -> Result<Vec<Order>, OrdersRepositoryError>;
}

/// Order store backed by a single JSON file.
///
/// Each append reads the full collection, pushes the new record, and
/// rewrites the file. A single-writer mutex serializes the read-modify-write
/// so concurrent submissions cannot lose each other's append. Acceptable for
/// a low-volume single-process deployment only.
#[derive(Debug)]
pub struct JsonFileOrdersRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileOrdersRepository {
    /// Open the store at the given file path, creating the parent data
    /// directory when missing.
    ///
    /// # Errors
    ///
    /// Returns an error when the data directory cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, OrdersRepositoryError> {
        let path = path.into();

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    async fn read_all(path: &Path) -> Result<Vec<Order>, OrdersRepositoryError> {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(Vec::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(error) => Err(error.into()),
        }
    }
}

#[async_trait]
impl OrdersRepository for JsonFileOrdersRepository {
    async fn append(&self, order: &Order) -> Result<(), OrdersRepositoryError> {
        let _guard = self.write_lock.lock().await;

        let mut orders = Self::read_all(&self.path).await?;
        orders.push(order.clone());

        let contents = serde_json::to_string_pretty(&orders)?;
        tokio::fs::write(&self.path, contents).await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Order>, OrdersRepositoryError> {
        let _guard = self.write_lock.lock().await;

        Self::read_all(&self.path).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use nexus_core::orders::{CheckoutUser, PaymentDescriptor};

    use crate::orders::ids::generate_order_id;

    use super::*;

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            timestamp: Timestamp::UNIX_EPOCH,
            user: CheckoutUser {
                full_name: "Asha Verma".to_string(),
                email: "asha@example.com".to_string(),
                phone: "9876543210".to_string(),
                street: "12 Indiranagar Main Road".to_string(),
                city: "Bengaluru".to_string(),
                zip_code: "560038".to_string(),
                country: "India".to_string(),
            },
            cart: Vec::new(),
            total: Decimal::new(275, 0),
            payment: PaymentDescriptor {
                last4: "4242".to_string(),
                method: "card".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn append_then_list_round_trips() -> TestResult {
        let dir = tempfile::tempdir()?;
        let repo = JsonFileOrdersRepository::open(dir.path().join("orders.json"))?;

        repo.append(&order("AAAA11111")).await?;
        repo.append(&order("BBBB22222")).await?;

        let orders = repo.list().await?;

        assert_eq!(orders.len(), 2);
        assert_eq!(orders.first().map(|o| o.id.as_str()), Some("AAAA11111"));
        assert_eq!(orders.last().map(|o| o.id.as_str()), Some("BBBB22222"));

        Ok(())
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() -> TestResult {
        let dir = tempfile::tempdir()?;
        let repo = JsonFileOrdersRepository::open(dir.path().join("orders.json"))?;

        assert!(repo.list().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn records_survive_reopening_the_store() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("orders.json");

        JsonFileOrdersRepository::open(&path)?
            .append(&order("CCCC33333"))
            .await?;

        let reopened = JsonFileOrdersRepository::open(&path)?;

        assert_eq!(reopened.list().await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_appends_lose_nothing() -> TestResult {
        let dir = tempfile::tempdir()?;
        let repo = Arc::new(JsonFileOrdersRepository::open(
            dir.path().join("orders.json"),
        )?);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.append(&order(&generate_order_id())).await
            }));
        }
        for handle in handles {
            handle.await??;
        }

        assert_eq!(repo.list().await?.len(), 8);

        Ok(())
    }
}
