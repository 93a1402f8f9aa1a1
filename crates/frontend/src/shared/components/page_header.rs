use leptos::prelude::*;

/// Заголовок страницы списка
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1 class="page-header__title">{title}</h1>
        </div>
    }
}
