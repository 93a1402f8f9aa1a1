use crate::domain::catalog::fixtures;
use crate::domain::catalog::ui::list::CatalogList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Битые ссылки в справочных данных не фатальны: lookups деградируют
    // до None, поэтому здесь только предупреждение в консоль.
    if let Err(e) = fixtures::catalog().validate() {
        log::warn!("reference data failed validation: {}", e);
    }

    view! {
        <CatalogList />
    }
}
