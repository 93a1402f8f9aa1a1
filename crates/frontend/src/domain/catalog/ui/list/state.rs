use crate::domain::catalog::view_model::CatalogFilter;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<CatalogFilter> {
    RwSignal::new(CatalogFilter::default())
}
