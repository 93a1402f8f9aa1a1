//! Derivation logic for the catalog page: which products are visible for
//! the current search query and user selection.
//!
//! The reference collections are never touched; everything here is a pure
//! function from `(Catalog, CatalogFilter)` to a product subset. The UI
//! owns a single `CatalogFilter` signal and recomputes the visible list on
//! every change.

use crate::shared::list_utils::{filter_list, Searchable};
use contracts::domain::catalog::{Catalog, Product, UserId};

/// Transient filter state owned by the page.
///
/// The original design kept a "currently selected user id" with `0` as the
/// show-all sentinel; here absence of a user filter is explicit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogFilter {
    pub query: String,
    pub selected_user: Option<UserId>,
}

impl CatalogFilter {
    /// Выбрать пользователя. Повторный выбор уже выбранного ничего не меняет.
    pub fn select_user(&mut self, id: UserId) {
        if self.selected_user == Some(id) {
            return;
        }
        self.selected_user = Some(id);
    }

    /// Снять фильтр по пользователю (вкладка "All")
    pub fn select_all_users(&mut self) {
        self.selected_user = None;
    }

    /// "Reset all filters" clears only the user selection. The query stays
    /// as typed; `clear_query` is the dedicated control for the search box.
    pub fn reset(&mut self) {
        self.selected_user = None;
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }
}

impl Searchable for Product {
    fn matches_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
    }
}

/// Keep products whose name contains the query (trimmed, case-insensitive
/// substring match). An empty query keeps everything in original order.
pub fn filter_by_query<'a>(products: &[&'a Product], query: &str) -> Vec<&'a Product> {
    filter_list(products.to_vec(), query)
}

/// Keep products owned (via their category) by the given user.
/// `None` means the filter is off and all products pass.
pub fn filter_by_user<'a>(catalog: &'a Catalog, selected: Option<UserId>) -> Vec<&'a Product> {
    match selected {
        None => catalog.products.iter().collect(),
        Some(id) => catalog
            .products
            .iter()
            .filter(|product| catalog.owner_of(product).map(|owner| owner.id) == Some(id))
            .collect(),
    }
}

/// Видимый список: сначала фильтр по пользователю, поверх него поиск.
pub fn visible_products<'a>(catalog: &'a Catalog, filter: &CatalogFilter) -> Vec<&'a Product> {
    let base = filter_by_user(catalog, filter.selected_user);
    filter_by_query(&base, &filter.query)
}
