/// Универсальные утилиты для работы со списками (поиск, UI компоненты)
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект запросу. Запрос приходит уже
    /// нормализованным (`normalize_query`) и никогда не бывает пустым.
    fn matches_query(&self, query: &str) -> bool;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn matches_query(&self, query: &str) -> bool {
        (**self).matches_query(query)
    }
}

/// Нормализованная форма того, что ввёл пользователь
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Фильтрует список по поисковому запросу. Пустой (или состоящий из одних
/// пробелов) запрос оставляет список как есть, в исходном порядке.
pub fn filter_list<T: Searchable>(items: Vec<T>, query: &str) -> Vec<T> {
    let normalized = normalize_query(query);
    if normalized.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_query(&normalized))
        .collect()
}

/// Поле поиска: фильтр применяется на каждое нажатие клавиши, кнопка
/// очистки видна только при непустом запросе.
#[component]
pub fn SearchInput(
    /// Текущее значение запроса (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения запроса
    #[prop(into)]
    on_change: Callback<String>,
    /// Callback кнопки очистки
    #[prop(into)]
    on_clear: Callback<()>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
            {move || if value.get().is_empty() {
                view! { <></> }.into_any()
            } else {
                view! {
                    <button
                        class="search-input__clear"
                        title="Clear search"
                        on:click=move |_| on_clear.run(())
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            }}
        </div>
    }
}
