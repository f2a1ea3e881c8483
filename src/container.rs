use crate::catalog::Catalog;
use crate::filter::FilterState;
use crate::search::SearchEvents;
use crate::types::CategoryLayout;
use crate::view::{self, FilterableTableView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn FnMut(&FilterState)>;

/// Owner of the filter state. The state changes only through
/// `on_filter_text_changed` and `on_stock_only_toggled`; listeners are told
/// about every change, in subscription order, right after it happens.
pub struct FilterableTable {
    catalog: Catalog,
    categories: Vec<String>,
    state: FilterState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: usize,
}

impl FilterableTable {
    pub fn new(catalog: Catalog, layout: &CategoryLayout) -> Self {
        let categories = layout.categories(&catalog);
        log::debug!("Table created with {} products in {} categories", catalog.len(), categories.len());
        FilterableTable {
            catalog,
            categories,
            state: FilterState::default(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn view(&self) -> FilterableTableView {
        view::filterable_table(self.catalog.products(), self.categories(), &self.state)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&FilterState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let state = &self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(state);
        }
    }
}

impl SearchEvents for FilterableTable {
    fn on_filter_text_changed(&mut self, new_text: String) {
        log::debug!("filter text: {:?} -> {:?}", self.state.filter_text, new_text);
        self.state.filter_text = new_text;
        self.notify();
    }

    fn on_stock_only_toggled(&mut self) {
        self.state.in_stock_only = !self.state.in_stock_only;
        log::debug!("in stock only: {}", self.state.in_stock_only);
        self.notify();
    }
}
