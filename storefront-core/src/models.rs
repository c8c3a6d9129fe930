use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single catalog entry.
///
/// `id` is derived from the product name at creation time (see [`slug`]) and
/// never changes afterwards, even when the name is edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier within the catalog (name-derived slug)
    pub id: String,

    /// Display name of the product
    pub name: String,

    /// Category name (free text, matched exactly when filtering)
    pub category: String,

    /// Unit price
    pub price: Decimal,

    /// Image URI or path
    pub image: String,

    /// Longer marketing description
    pub description: String,

    /// Ordered list of feature bullet points
    #[serde(default)]
    pub features: Vec<String>,

    /// Technical specifications, keyed by label
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,

    /// Ids of related products; not validated against the catalog
    #[serde(default)]
    pub related_products: Vec<String>,

    /// Safety standards the product complies with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicable_standards: Option<Vec<String>>,
}

impl Product {
    /// Applies a partial update, leaving unset fields untouched.
    /// The id is not part of the patch and stays as it is.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(features) = patch.features {
            self.features = features;
        }
        if let Some(specifications) = patch.specifications {
            self.specifications = specifications;
        }
        if let Some(related_products) = patch.related_products {
            self.related_products = related_products;
        }
        if let Some(applicable_standards) = patch.applicable_standards {
            self.applicable_standards = applicable_standards;
        }
    }
}

/// Input for creating a product: everything except the id, which the
/// catalog derives from the name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub image: String,
    pub description: String,
    pub features: Vec<String>,
    pub specifications: BTreeMap<String, String>,
    pub related_products: Vec<String>,
    pub applicable_standards: Option<Vec<String>>,
}

impl ProductDraft {
    /// Turns the draft into a product with the given id.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            image: self.image,
            description: self.description,
            features: self.features,
            specifications: self.specifications,
            related_products: self.related_products,
            applicable_standards: self.applicable_standards,
        }
    }
}

/// Partial update for a product. Fields left as `None` keep their current
/// value. There is intentionally no id field: updates can never move a
/// product to a new id, even when the name changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub specifications: Option<BTreeMap<String, String>>,
    pub related_products: Option<Vec<String>>,
    pub applicable_standards: Option<Option<Vec<String>>>,
}

/// One cart line: a snapshot of the product as it was when added, plus a
/// quantity. Catalog edits made after the add do not show up here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

/// A signed-in user as fabricated by the mock identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Derives a URL-safe identifier from free text: lowercase, runs of
/// non-alphanumeric characters collapsed to a single hyphen, leading and
/// trailing hyphens trimmed.
///
/// An empty or all-punctuation name yields an empty slug; the catalog does
/// not reject that, matching the permissive add behavior.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}
