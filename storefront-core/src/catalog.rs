use crate::models::{slug, Product, ProductDraft, ProductPatch};
use crate::seed;
use crate::storage::{CatalogStore, StoreError};

/// Single source of truth for the product list.
///
/// The catalog owns its products and the store it persists them to; it is
/// meant to be constructed once at the composition root and passed by
/// reference to whoever needs it, not kept in a global.
///
/// Every mutation applies in memory first and then re-publishes the full
/// list through the store. A failed save is returned to the caller as a
/// non-fatal error; the in-memory state stays authoritative for the rest of
/// the session.
pub struct ProductCatalog {
    products: Vec<Product>,
    store: Box<dyn CatalogStore>,
}

impl ProductCatalog {
    /// Opens the catalog from the given store. Falls back to the bundled
    /// seed list when nothing was ever persisted or the persisted data is
    /// unreadable - a corrupt store never prevents startup.
    pub fn open(store: Box<dyn CatalogStore>) -> Self {
        let products = match store.load() {
            Ok(Some(products)) => products,
            Ok(None) | Err(_) => seed::products(),
        };

        Self { products, store }
    }

    /// Returns the full product list in insertion order
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by exact id. A missing id is not an error.
    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Creates a product from the draft, deriving its id from the name, and
    /// appends it to the catalog.
    ///
    /// Duplicate ids are not guarded against: adding two products whose
    /// names collapse to the same slug leaves both entries in the list, and
    /// `get_by_id` returns the first. This mirrors the permissive behavior
    /// the admin UI relies on.
    ///
    /// On a save failure the product is still added in memory and returned
    /// alongside the error via `list`/`get_by_id`.
    pub fn add(&mut self, draft: ProductDraft) -> Result<Product, StoreError> {
        let id = slug(&draft.name);
        let product = draft.into_product(id);

        self.products.push(product.clone());
        self.store.save(&self.products)?;

        Ok(product)
    }

    /// Merges the set fields of the patch into the product with the given
    /// id. An unknown id is a silent no-op. The id itself never changes,
    /// even when the name does.
    pub fn update(&mut self, id: &str, patch: ProductPatch) -> Result<(), StoreError> {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            return Ok(());
        };

        product.apply(patch);
        self.store.save(&self.products)
    }

    /// Removes the product with the given id; no-op when absent.
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);

        if self.products.len() == before {
            return Ok(());
        }

        self.store.save(&self.products)
    }

    /// Case-insensitive substring search over name, description and
    /// category, in catalog order.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let term = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
                    || p.category.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Products whose category matches exactly
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Unique category names in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();

        for product in &self.products {
            if !names.contains(&product.category) {
                names.push(product.category.clone());
            }
        }

        names
    }
}
