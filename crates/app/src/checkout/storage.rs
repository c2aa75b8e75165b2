//! File-backed cart persistence.

use std::path::PathBuf;

use nexus_core::cart::{CartState, CartStorage, CartStorageError};

/// Cart storage backed by a single JSON file, the durable equivalent of a
/// browser session's saved cart. Reads and writes are synchronous; the cart
/// is small and every dispatch writes through.
#[derive(Debug, Clone)]
pub struct JsonFileCartStorage {
    path: PathBuf,
}

impl JsonFileCartStorage {
    /// Use the given file path, creating the parent directory when missing.
    ///
    /// # Errors
    ///
    /// Returns [`CartStorageError::Save`] when the directory cannot be
    /// created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CartStorageError> {
        let path = path.into();

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|error| CartStorageError::Save(error.to_string()))?;
        }

        Ok(Self { path })
    }
}

impl CartStorage for JsonFileCartStorage {
    fn load(&self) -> Result<Option<CartState>, CartStorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(CartStorageError::Load(error.to_string())),
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|error| CartStorageError::Load(error.to_string()))
    }

    fn save(&self, state: &CartState) -> Result<(), CartStorageError> {
        let contents = serde_json::to_string(state)
            .map_err(|error| CartStorageError::Save(error.to_string()))?;

        std::fs::write(&self.path, contents)
            .map_err(|error| CartStorageError::Save(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use nexus_core::{cart::CartStore, fixtures};

    use super::*;

    #[test]
    fn missing_file_loads_as_no_saved_cart() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = JsonFileCartStorage::open(dir.path().join("cart.json"))?;

        assert_eq!(storage.load()?, None);

        Ok(())
    }

    #[test]
    fn cart_survives_reopening_the_store() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("cart.json");

        let mut store = CartStore::open(JsonFileCartStorage::open(&path)?)?;
        store.add(fixtures::product("2").ok_or("missing fixture")?)?;
        store.update_quantity("2", 3)?;

        let reopened = CartStore::open(JsonFileCartStorage::open(&path)?)?;

        assert_eq!(reopened.state(), store.state());
        assert_eq!(reopened.state().count(), 3);

        Ok(())
    }

    #[test]
    fn corrupt_file_is_a_load_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "not json")?;

        let storage = JsonFileCartStorage::open(&path)?;

        assert!(matches!(storage.load(), Err(CartStorageError::Load(_))));

        Ok(())
    }
}
