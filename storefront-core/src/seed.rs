use crate::models::Product;

/// The bundled product dataset, embedded at compile time
const PRODUCTS_YAML: &str = include_str!("../data/products.yaml");

/// Returns the fixed seed list the catalog falls back to when nothing has
/// been persisted yet (or the persisted data is unreadable).
pub fn products() -> Vec<Product> {
    serde_yaml::from_str(PRODUCTS_YAML).expect("bundled product seed is valid YAML")
}
