use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Product;

/// Error type for catalog persistence
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying IO failure (missing permissions, disk full, ...)
    #[error("catalog storage IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The persisted data could not be decoded
    #[error("persisted catalog is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Persistence seam for the product catalog.
///
/// The catalog re-publishes its full list through `save` after every
/// mutation; `load` runs once when the catalog is opened. Implementations
/// decide where the serialized list actually lives, so the mechanism is
/// swappable without touching catalog logic.
pub trait CatalogStore {
    /// Reads the last persisted product list. `Ok(None)` means nothing has
    /// ever been persisted; `Err(StoreError::Corrupt)` means data exists but
    /// could not be decoded.
    fn load(&self) -> Result<Option<Vec<Product>>, StoreError>;

    /// Serializes and stores the full product list.
    fn save(&mut self, products: &[Product]) -> Result<(), StoreError>;
}

/// Stores the catalog as one JSON array in a single file - the file-system
/// analogue of the browser's single localStorage key.
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path to the backing file
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<Product>>, StoreError> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let products: Vec<Product> = serde_json::from_reader(reader)?;

        Ok(Some(products))
    }

    fn save(&mut self, products: &[Product]) -> Result<(), StoreError> {
        // Create parent directories if they don't exist
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(products)?;
        fs::write(&self.file_path, json)?;

        Ok(())
    }
}

/// In-memory store: keeps the "persisted" list in a field. Used for
/// session-only catalogs and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<Vec<Product>>,
}

impl MemoryStore {
    /// Creates an empty store (nothing persisted yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds a persisted list
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            saved: Some(products),
        }
    }
}

impl CatalogStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<Product>>, StoreError> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, products: &[Product]) -> Result<(), StoreError> {
        self.saved = Some(products.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductDraft;
    use tempfile::tempdir;

    fn sample_product(name: &str) -> Product {
        ProductDraft {
            name: name.to_string(),
            category: "Safety Railings".into(),
            price: "49.99".parse().unwrap(),
            ..Default::default()
        }
        .into_product(crate::models::slug(name))
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("products.json"));

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("products.json"));

        let products = vec![sample_product("Guardrail"), sample_product("Handrail")];
        store.save(&products).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, products);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("products.json");
        let mut store = JsonFileStore::new(&path);

        store.save(&[sample_product("Guardrail")]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("products.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        let result = store.load();
        assert!(matches!(result, Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let products = vec![sample_product("Guardrail")];
        store.save(&products).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), products);
    }
}
