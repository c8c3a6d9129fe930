use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "A storefront demo: product catalog and session cart")]
pub struct Cli {
    /// Directory holding the persisted catalog and session cart
    /// (defaults to $STOREFRONT_HOME, then ~/.storefront)
    #[clap(long)]
    pub data_dir: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum ProductCommand {
    /// Add a new product (the id is derived from the name)
    Add {
        /// Display name of the product
        #[clap(long)]
        name: String,

        /// Category name
        #[clap(long)]
        category: String,

        /// Unit price, e.g. 1299.99
        #[clap(long)]
        price: Decimal,

        /// Image URI or path
        #[clap(long, default_value = "")]
        image: String,

        /// Longer description
        #[clap(long, default_value = "")]
        description: String,

        /// Comma-separated feature bullet points
        #[clap(long)]
        features: Option<String>,

        /// Comma-separated applicable standards
        #[clap(long)]
        standards: Option<String>,
    },

    /// List products, optionally filtered by exact category
    List {
        /// Only show products in this category
        #[clap(long)]
        category: Option<String>,
    },

    /// Show all fields of one product
    Show {
        /// The product id
        id: String,
    },

    /// Edit fields of an existing product (the id never changes)
    Edit {
        /// The product id
        id: String,

        /// New display name
        #[clap(long)]
        name: Option<String>,

        /// New category
        #[clap(long)]
        category: Option<String>,

        /// New unit price
        #[clap(long)]
        price: Option<Decimal>,

        /// New image URI or path
        #[clap(long)]
        image: Option<String>,

        /// New description
        #[clap(long)]
        description: Option<String>,

        /// Comma-separated feature bullet points (replaces the list)
        #[clap(long)]
        features: Option<String>,

        /// Comma-separated applicable standards (replaces the list)
        #[clap(long)]
        standards: Option<String>,
    },

    /// Delete a product
    Del {
        /// The product id
        id: String,

        /// Skip the confirmation check
        #[clap(long, short = 'y')]
        yes: bool,
    },

    /// List the distinct category names
    Categories,
}

#[derive(Subcommand, Debug)]
pub enum CartCommand {
    /// Add a product to the cart (merges with an existing line item)
    Add {
        /// The product id
        product_id: String,

        /// Number of units to add
        #[clap(long, default_value_t = 1)]
        qty: u32,
    },

    /// Remove a line item from the cart
    Remove {
        /// The product id
        product_id: String,
    },

    /// Set the quantity of an existing line item (must be at least 1)
    Qty {
        /// The product id
        product_id: String,

        /// The new quantity
        quantity: u32,
    },

    /// Empty the cart
    Clear,

    /// Show the cart contents, unit count and total
    Show,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage the product catalog
    #[clap(subcommand)]
    Product(ProductCommand),

    /// Manage the session cart
    #[clap(subcommand)]
    Cart(CartCommand),

    /// Search products by name, description or category
    Search {
        /// Case-insensitive search term
        term: String,
    },
}
