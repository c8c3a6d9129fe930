pub mod auth;
pub mod cart;
pub mod catalog;
pub mod models;
pub mod seed;
pub mod storage;

// Re-export commonly used types
pub use auth::MockAuth;
pub use cart::ShoppingCart;
pub use catalog::ProductCatalog;
pub use models::{slug, CartItem, Product, ProductDraft, ProductPatch, User};
pub use storage::{CatalogStore, JsonFileStore, MemoryStore, StoreError};
