pub mod state;

use self::state::create_state;
use crate::domain::catalog::fixtures;
use crate::domain::catalog::view_model::visible_products;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::catalog::{Catalog, Product, Sex, UserId};
use leptos::prelude::*;

/// Строка таблицы с уже разрешёнными ссылками товара
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub category_label: String,
    pub owner_name: String,
    pub owner_sex: Option<Sex>,
}

impl ProductRow {
    pub fn build(catalog: &Catalog, product: &Product) -> Self {
        use contracts::domain::common::EntityId;

        let category = catalog.category_of(product);
        let owner = catalog.owner_of(product);

        Self {
            id: product.id.as_string(),
            name: product.name.clone(),
            category_label: category.map(|c| c.label()).unwrap_or_default(),
            owner_name: owner.map(|u| u.name.clone()).unwrap_or_default(),
            owner_sex: owner.map(|u| u.sex),
        }
    }

    /// Модификатор ячейки владельца: мужчины синим, женщины красным
    pub fn owner_cell_class(&self) -> &'static str {
        match self.owner_sex {
            Some(Sex::Male) => "table__cell table__cell--link",
            Some(Sex::Female) => "table__cell table__cell--danger",
            None => "table__cell",
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CatalogList() -> impl IntoView {
    let catalog = fixtures::catalog();
    let state = create_state();

    let visible_rows = move || {
        let filter = state.get();
        visible_products(catalog, &filter)
            .into_iter()
            .map(|product| ProductRow::build(catalog, product))
            .collect::<Vec<_>>()
    };

    let select_user = move |id: UserId| {
        // Повторный клик по уже выбранному пользователю не трогает сигнал
        if state.with_untracked(|f| f.selected_user == Some(id)) {
            return;
        }
        state.update(|f| f.select_user(id));
        log::debug!("user filter: {}", id.value());
    };

    let select_all_users = move || state.update(|f| f.select_all_users());
    let reset_all = move || state.update(|f| f.reset());

    view! {
        <div class="content">
            <PageHeader title="Product Categories" />

            <div class="filter-panel">
                <div class="filter-panel-header">
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                </div>

                <div class="filter-panel__tabs">
                    <a
                        href="#/"
                        class="filter-panel__tab"
                        class:filter-panel__tab--active=move || state.get().selected_user.is_none()
                        on:click=move |_| select_all_users()
                    >
                        "All"
                    </a>
                    {catalog.users.iter().map(|user| {
                        let id = user.id;
                        view! {
                            <a
                                href="#/"
                                class="filter-panel__tab"
                                class:filter-panel__tab--active=move || state.get().selected_user == Some(id)
                                on:click=move |_| select_user(id)
                            >
                                {user.name.clone()}
                            </a>
                        }
                    }).collect_view()}
                </div>

                <div class="filter-panel__search">
                    <SearchInput
                        value=Signal::derive(move || state.get().query)
                        on_change=Callback::new(move |query: String| {
                            state.update(|f| f.set_query(query));
                        })
                        on_clear=Callback::new(move |_| state.update(|f| f.clear_query()))
                        placeholder="Search"
                    />
                </div>

                // Фильтр по категории не подключён, кнопки чисто декоративные
                <div class="filter-panel__chips">
                    <a href="#/" class="chip chip--all">"All"</a>
                    {catalog.categories.iter().map(|category| view! {
                        <a href="#/" class="chip">{category.title.clone()}</a>
                    }).collect_view()}
                </div>

                <div class="filter-panel__footer">
                    <button
                        class="button button--secondary button--fullwidth"
                        on:click=move |_| reset_all()
                    >
                        "Reset all filters"
                    </button>
                </div>
            </div>

            <div class="table-container">
                <Show
                    when=move || !visible_rows().is_empty()
                    fallback=|| view! {
                        <p class="table-container__empty">
                            "No products matching selected criteria"
                        </p>
                    }
                >
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">
                                    "ID"
                                    <span class="table__sort-icon">{icon("sort")}</span>
                                </th>
                                <th class="table__header-cell">
                                    "Product"
                                    <span class="table__sort-icon">{icon("sort")}</span>
                                </th>
                                <th class="table__header-cell">
                                    "Category"
                                    <span class="table__sort-icon">{icon("sort")}</span>
                                </th>
                                <th class="table__header-cell">
                                    "User"
                                    <span class="table__sort-icon">{icon("sort")}</span>
                                </th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || visible_rows().into_iter().map(|row| {
                                let owner_class = row.owner_cell_class();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--bold">{row.id}</td>
                                        <td class="table__cell">{row.name}</td>
                                        <td class="table__cell">{row.category_label}</td>
                                        <td class=owner_class>{row.owner_name}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::catalog::{Category, CategoryId, ProductId, User};

    fn sample() -> Catalog {
        Catalog::new(
            vec![User {
                id: UserId::new(1),
                name: "Max".to_string(),
                sex: Sex::Male,
            }],
            vec![Category {
                id: CategoryId::new(1),
                title: "Fruits".to_string(),
                icon: "🍎".to_string(),
                owner_id: UserId::new(1),
            }],
            vec![Product {
                id: ProductId::new(1),
                name: "Apple".to_string(),
                category_id: CategoryId::new(1),
            }],
        )
    }

    #[test]
    fn test_row_resolves_category_and_owner() {
        let catalog = sample();
        let row = ProductRow::build(&catalog, &catalog.products[0]);

        assert_eq!(row.id, "1");
        assert_eq!(row.name, "Apple");
        assert_eq!(row.category_label, "🍎 - Fruits");
        assert_eq!(row.owner_name, "Max");
        assert_eq!(row.owner_sex, Some(Sex::Male));
    }

    #[test]
    fn test_owner_cell_class_follows_sex() {
        let catalog = sample();
        let mut row = ProductRow::build(&catalog, &catalog.products[0]);

        assert_eq!(row.owner_cell_class(), "table__cell table__cell--link");

        row.owner_sex = Some(Sex::Female);
        assert_eq!(row.owner_cell_class(), "table__cell table__cell--danger");

        row.owner_sex = None;
        assert_eq!(row.owner_cell_class(), "table__cell");
    }

    #[test]
    fn test_row_degrades_on_broken_links() {
        let catalog = sample();
        let orphan = Product {
            id: ProductId::new(2),
            name: "Mystery".to_string(),
            category_id: CategoryId::new(99),
        };
        let row = ProductRow::build(&catalog, &orphan);

        assert_eq!(row.category_label, "");
        assert_eq!(row.owner_name, "");
        assert_eq!(row.owner_sex, None);
    }
}
