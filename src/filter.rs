use crate::catalog::Catalog;
use crate::types::{CategoryLayout, Product};

/// The user-controlled criteria. Only `FilterableTable` ever holds the live copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub filter_text: String,
    pub in_stock_only: bool,
}

/// Products of `category` whose name contains `filter_text`, ignoring case,
/// restricted to stocked items when `in_stock_only` is set. Input order is kept.
///
/// `filter_text` is matched as a literal substring and is not trimmed.
pub fn filter_category<'a>(
    products: &'a [Product],
    category: &str,
    filter_text: &str,
    in_stock_only: bool,
) -> Vec<&'a Product> {
    let needle = filter_text.to_lowercase();
    let mut matches: Vec<&Product> = products
        .iter()
        .filter(|p| p.category == category && p.name.to_lowercase().contains(&needle))
        .collect();

    if in_stock_only {
        matches.retain(|p| p.stocked);
    }
    matches
}

impl CategoryLayout {
    pub fn categories(&self, catalog: &Catalog) -> Vec<String> {
        match self {
            CategoryLayout::Fixed(categories) => categories.clone(),
            CategoryLayout::Derived => catalog.distinct_categories(),
        }
    }
}
