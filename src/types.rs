use serde::Serialize;

/// One catalog item. Immutable once ingested; `name` doubles as the display key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stocked: bool,
}

impl Product {
    pub fn new(name: &str, category: &str, price: &str, stocked: bool) -> Self {
        Product {
            name: name.to_string(),
            category: category.to_string(),
            price: price.to_string(),
            stocked,
        }
    }
}

/// How the table decides which category sections to show, and in what order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryLayout {
    /// Configured order; a category shows up even if no product carries it.
    Fixed(Vec<String>),
    /// Sorted distinct categories found in the catalog.
    Derived,
}

