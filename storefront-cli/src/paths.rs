use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Resolves the data directory: explicit flag, then the STOREFRONT_HOME
/// environment variable, then ~/.storefront
pub fn data_dir(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }

    if let Ok(dir) = env::var("STOREFRONT_HOME") {
        return Ok(PathBuf::from(dir));
    }

    let home_dir = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home_dir.join(".storefront"))
}

/// Path of the persisted catalog file inside the data directory
pub fn catalog_path(data_dir: &Path) -> PathBuf {
    data_dir.join("products.json")
}

/// Path of the session cart file inside the data directory
pub fn cart_path(data_dir: &Path) -> PathBuf {
    data_dir.join("cart.json")
}
