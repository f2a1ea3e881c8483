//! Render tree for the filterable table.
//!
//! Every function here is a pure mapping from inputs to a view value; the
//! terminal renderer in `ui` and the `--json` dump both consume these.

use serde::Serialize;

use crate::filter::{FilterState, filter_category};
use crate::search::SearchControl;
use crate::types::Product;

pub const SEARCH_LABEL: &str = "Search for Products";
pub const CHECKBOX_LABEL: &str = "Only show products in stock";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductEntryView {
    pub name: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySectionView {
    pub category: String,
    pub entries: Vec<ProductEntryView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductTableView {
    pub header: (String, String),
    pub sections: Vec<CategorySectionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchControlView {
    pub label: String,
    pub filter_text: String,
    pub checkbox_label: String,
    pub in_stock_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterableTableView {
    pub search: SearchControlView,
    pub table: ProductTableView,
}

impl ProductTableView {
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}

pub fn product_entry(product: &Product) -> ProductEntryView {
    ProductEntryView {
        name: product.name.clone(),
        price: product.price.clone(),
    }
}

/// A section always renders, even when nothing in it matches.
pub fn category_section(
    products: &[Product],
    category: &str,
    filter_text: &str,
    in_stock_only: bool,
) -> CategorySectionView {
    CategorySectionView {
        category: category.to_string(),
        entries: filter_category(products, category, filter_text, in_stock_only)
            .into_iter()
            .map(product_entry)
            .collect(),
    }
}

pub fn product_table(
    products: &[Product],
    categories: &[String],
    filter_text: &str,
    in_stock_only: bool,
) -> ProductTableView {
    ProductTableView {
        header: ("Name".to_string(), "Price".to_string()),
        sections: categories
            .iter()
            .map(|category| category_section(products, category, filter_text, in_stock_only))
            .collect(),
    }
}

pub fn search_control(state: &FilterState) -> SearchControlView {
    SearchControl::new(&state.filter_text, state.in_stock_only).view()
}

pub fn filterable_table(products: &[Product], categories: &[String], state: &FilterState) -> FilterableTableView {
    FilterableTableView {
        search: search_control(state),
        table: product_table(products, categories, &state.filter_text, state.in_stock_only),
    }
}
