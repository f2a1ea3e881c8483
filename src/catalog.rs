use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::types::{CategoryLayout, Product};

pub const SPORTING_GOODS: &str = "Sporting Goods";
pub const ELECTRONICS: &str = "Electronics";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("product #{index} is missing `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("product #{index} has a blank `{field}`")]
    BlankField { index: usize, field: &'static str },
    #[error("duplicate product name: {0}")]
    DuplicateName(String),
}

/// Wire shape of a product entry. Every field is optional so that a malformed
/// entry is rejected with a precise error instead of rendering blank.
#[derive(Debug, Deserialize)]
struct RawProduct {
    name: Option<String>,
    category: Option<String>,
    price: Option<String>,
    stocked: Option<bool>,
}

impl RawProduct {
    fn into_product(self, index: usize) -> Result<Product, CatalogError> {
        let name = self.name.ok_or(CatalogError::MissingField { index, field: "name" })?;
        let category = self.category.ok_or(CatalogError::MissingField { index, field: "category" })?;
        let price = self.price.ok_or(CatalogError::MissingField { index, field: "price" })?;
        let stocked = self.stocked.ok_or(CatalogError::MissingField { index, field: "stocked" })?;
        Ok(Product { name, category, price, stocked })
    }
}

/// Read-only product collection handed to the table at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (index, product) in products.iter().enumerate() {
            if product.name.trim().is_empty() {
                return Err(CatalogError::BlankField { index, field: "name" });
            }
            if product.category.trim().is_empty() {
                return Err(CatalogError::BlankField { index, field: "category" });
            }
            if !seen.insert(product.name.as_str()) {
                return Err(CatalogError::DuplicateName(product.name.clone()));
            }
        }
        Ok(Catalog { products })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawProduct> = serde_json::from_str(json)?;
        let products = raw
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_product(index))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_products(products)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        log::info!("Loaded {} products from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The six-item fixture the table was designed around.
    pub fn reference() -> Self {
        Catalog {
            products: vec![
                Product::new("Football", SPORTING_GOODS, "$49.99", true),
                Product::new("Baseball", SPORTING_GOODS, "$9.99", true),
                Product::new("Basketball", SPORTING_GOODS, "$29.99", false),
                Product::new("iPod Touch", ELECTRONICS, "$99.99", true),
                Product::new("iPhone 5", ELECTRONICS, "$399.99", false),
                Product::new("Nexus 7", ELECTRONICS, "$199.99", true),
            ],
        }
    }

    /// Section order the reference fixture is displayed in.
    pub fn reference_layout() -> CategoryLayout {
        CategoryLayout::Fixed(vec![SPORTING_GOODS.to_string(), ELECTRONICS.to_string()])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn distinct_categories(&self) -> Vec<String> {
        self.products
            .iter()
            .map(|p| p.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_valid_catalog() {
        let json = r#"[
            {"name": "Football", "category": "Sporting Goods", "price": "$49.99", "stocked": true},
            {"name": "iPod", "category": "Electronics", "price": "$199.99", "stocked": false}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[1], Product::new("iPod", "Electronics", "$199.99", false));
    }

    #[test]
    fn rejects_missing_fields() {
        let json = r#"[{"name": "Football", "category": "Sporting Goods", "stocked": true}]"#;
        match Catalog::from_json_str(json) {
            Err(CatalogError::MissingField { index: 0, field: "price" }) => {}
            other => panic!("unexpected result: {:?}", other),
        }

        let json = r#"[
            {"name": "A", "category": "X", "price": "$1", "stocked": true},
            {"category": "X", "price": "$1", "stocked": true}
        ]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::MissingField { index: 1, field: "name" })
        ));
    }

    #[test]
    fn rejects_blank_category() {
        let json = r#"[{"name": "A", "category": "  ", "price": "$1", "stocked": true}]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::BlankField { index: 0, field: "category" })
        ));
    }

    #[test]
    fn rejects_blank_name_from_products() {
        let products = vec![
            Product::new("Football", SPORTING_GOODS, "$49.99", true),
            Product::new("", "  ", "$1", true),
        ];
        assert!(matches!(
            Catalog::from_products(products),
            Err(CatalogError::BlankField { index: 1, field: "name" })
        ));

        let products = vec![Product::new("Widget", " ", "$1", true)];
        assert!(matches!(
            Catalog::from_products(products),
            Err(CatalogError::BlankField { index: 0, field: "category" })
        ));
    }

    #[test]
    fn rejects_duplicate_names() {
        let products = vec![
            Product::new("Football", SPORTING_GOODS, "$49.99", true),
            Product::new("Football", SPORTING_GOODS, "$19.99", false),
        ];
        match Catalog::from_products(products) {
            Err(CatalogError::DuplicateName(name)) => assert_eq!(name, "Football"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_non_array_json() {
        assert!(matches!(Catalog::from_json_str("{}"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Nexus 7", "category": "Electronics", "price": "$199.99", "stocked": true}}]"#).unwrap();
        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.products()[0].name, "Nexus 7");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::from_path(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn distinct_categories_are_sorted() {
        let catalog = Catalog::reference();
        assert_eq!(catalog.distinct_categories(), vec![ELECTRONICS.to_string(), SPORTING_GOODS.to_string()]);
    }
}
