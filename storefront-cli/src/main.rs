mod cli;
mod paths;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use storefront_core::{
    CartItem, JsonFileStore, Product, ProductCatalog, ProductDraft, ProductPatch, ShoppingCart,
};

use crate::cli::{CartCommand, Cli, Command, ProductCommand};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = paths::data_dir(cli.data_dir.as_deref())?;

    match &cli.command {
        Command::Product(product_cmd) => {
            handle_product_command(product_cmd, &data_dir)?;
        }
        Command::Cart(cart_cmd) => {
            handle_cart_command(cart_cmd, &data_dir)?;
        }
        Command::Search { term } => {
            let catalog = open_catalog(&data_dir);
            print_product_table(&catalog.search(term));
        }
    }

    Ok(())
}

/// Opens the catalog against the data directory's products.json. A missing
/// or unreadable file falls back to the bundled seed inside the core.
fn open_catalog(data_dir: &Path) -> ProductCatalog {
    ProductCatalog::open(Box::new(JsonFileStore::new(paths::catalog_path(data_dir))))
}

fn handle_product_command(command: &ProductCommand, data_dir: &Path) -> Result<()> {
    let mut catalog = open_catalog(data_dir);

    match command {
        ProductCommand::Add {
            name,
            category,
            price,
            image,
            description,
            features,
            standards,
        } => {
            let draft = ProductDraft {
                name: name.clone(),
                category: category.clone(),
                price: *price,
                image: image.clone(),
                description: description.clone(),
                features: features.as_deref().map(split_list).unwrap_or_default(),
                applicable_standards: standards.as_deref().map(split_list),
                ..Default::default()
            };

            let product = catalog
                .add(draft)
                .context("Failed to persist the catalog")?;

            println!("{}", "Product added successfully!".green());
            println!("ID: {}", product.id.green());
        }
        ProductCommand::List { category } => {
            let products: Vec<&Product> = match category {
                Some(category) => catalog.by_category(category),
                None => catalog.list().iter().collect(),
            };
            print_product_table(&products);
        }
        ProductCommand::Show { id } => {
            show_product(&catalog, id)?;
        }
        ProductCommand::Edit {
            id,
            name,
            category,
            price,
            image,
            description,
            features,
            standards,
        } => {
            if catalog.get_by_id(id).is_none() {
                anyhow::bail!("Product '{}' not found", id);
            }

            let patch = ProductPatch {
                name: name.clone(),
                category: category.clone(),
                price: *price,
                image: image.clone(),
                description: description.clone(),
                features: features.as_deref().map(split_list),
                applicable_standards: standards.as_deref().map(|s| Some(split_list(s))),
                ..Default::default()
            };

            catalog
                .update(id, patch)
                .context("Failed to persist the catalog")?;
            println!("{}", "Product updated successfully!".green());
        }
        ProductCommand::Del { id, yes } => {
            if catalog.get_by_id(id).is_none() {
                println!("{}", format!("No product with id '{}'.", id).yellow());
                return Ok(());
            }

            if !*yes {
                anyhow::bail!("Deleting '{}' requires --yes", id);
            }

            catalog
                .delete(id)
                .context("Failed to persist the catalog")?;
            println!("{}", "Product deleted.".green());
        }
        ProductCommand::Categories => {
            let categories = catalog.categories();
            if categories.is_empty() {
                println!("{}", "No products found.".yellow());
                return Ok(());
            }
            for category in categories {
                println!("{}", category);
            }
        }
    }

    Ok(())
}

fn handle_cart_command(command: &CartCommand, data_dir: &Path) -> Result<()> {
    let catalog = open_catalog(data_dir);
    let mut cart = load_cart(data_dir)?;

    match command {
        CartCommand::Add { product_id, qty } => {
            let product = catalog
                .get_by_id(product_id)
                .with_context(|| format!("Product '{}' not found", product_id))?;

            cart.add_item(product, *qty);
            save_cart(&cart, data_dir)?;
            println!(
                "{}",
                format!("Added {} x {} to cart.", qty, product.name).green()
            );
        }
        CartCommand::Remove { product_id } => {
            cart.remove_item(product_id);
            save_cart(&cart, data_dir)?;
            println!("{}", "Item removed from cart.".green());
        }
        CartCommand::Qty {
            product_id,
            quantity,
        } => {
            if *quantity < 1 {
                anyhow::bail!("Quantity must be at least 1; use 'cart remove' instead");
            }

            cart.update_quantity(product_id, *quantity);
            save_cart(&cart, data_dir)?;
            println!("{}", "Quantity updated.".green());
        }
        CartCommand::Clear => {
            cart.clear();
            save_cart(&cart, data_dir)?;
            println!("{}", "Cart cleared.".green());
        }
        CartCommand::Show => {
            show_cart(&cart);
        }
    }

    Ok(())
}

/// Restores the session cart from the data directory, starting empty when
/// no cart was saved yet
fn load_cart(data_dir: &Path) -> Result<ShoppingCart> {
    let path = paths::cart_path(data_dir);
    if !path.exists() {
        return Ok(ShoppingCart::new());
    }

    let file =
        File::open(&path).with_context(|| format!("Failed to open cart file: {:?}", path))?;
    let reader = BufReader::new(file);
    let items: Vec<CartItem> = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse cart file: {:?}", path))?;

    Ok(ShoppingCart::from_items(items))
}

/// Saves the session cart's line items to the data directory
fn save_cart(cart: &ShoppingCart, data_dir: &Path) -> Result<()> {
    let path = paths::cart_path(data_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(cart.items())?;
    fs::write(&path, json).with_context(|| format!("Failed to write cart file: {:?}", path))?;

    Ok(())
}

fn print_product_table(products: &[&Product]) {
    if products.is_empty() {
        println!("{}", "No products found.".yellow());
        return;
    }

    println!(
        "{:<32} | {:<40} | {:<22} | {:>10}",
        "ID", "Name", "Category", "Price"
    );
    println!("{}", "-".repeat(112));

    for product in products {
        println!(
            "{:<32} | {:<40} | {:<22} | {:>10}",
            product.id,
            truncate(&product.name, 40),
            truncate(&product.category, 22),
            format!("${}", product.price)
        );
    }

    println!();
    println!("Showing {} products", products.len());
}

fn show_product(catalog: &ProductCatalog, id: &str) -> Result<()> {
    let product = catalog
        .get_by_id(id)
        .with_context(|| format!("Product '{}' not found", id))?;

    println!("{}: {}", "ID".blue(), product.id);
    println!("{}: {}", "Name".blue(), product.name);
    println!("{}: {}", "Category".blue(), product.category);
    println!("{}: ${}", "Price".blue(), product.price);
    println!("{}: {}", "Image".blue(), product.image);
    println!("{}: {}", "Description".blue(), product.description);

    if !product.features.is_empty() {
        println!("{}:", "Features".blue());
        for feature in &product.features {
            println!("  - {}", feature);
        }
    }

    if !product.specifications.is_empty() {
        println!("{}:", "Specifications".blue());
        for (key, value) in &product.specifications {
            println!("  {}: {}", key, value);
        }
    }

    if !product.related_products.is_empty() {
        println!(
            "{}: {}",
            "Related".blue(),
            product.related_products.join(", ")
        );
    }

    if let Some(standards) = &product.applicable_standards {
        println!("{}: {}", "Standards".blue(), standards.join(", "));
    }

    Ok(())
}

fn show_cart(cart: &ShoppingCart) {
    if cart.is_empty() {
        println!("{}", "Your cart is empty.".yellow());
        return;
    }

    for item in cart.items() {
        let line_total = item.product.price * rust_decimal::Decimal::from(item.quantity);
        println!(
            "{:>3} x {:<40} {:>10} each  {:>12}",
            item.quantity,
            truncate(&item.product.name, 40),
            format!("${}", item.product.price),
            format!("${}", line_total)
        );
    }

    println!("{}", "-".repeat(75));
    println!("Items: {}", cart.count());
    println!("{}: ${}", "Total".green(), cart.total());
}

/// Splits a comma-separated flag value into trimmed, non-empty entries
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Shortens a string for table display
fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let shortened: String = value.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", shortened)
    }
}
