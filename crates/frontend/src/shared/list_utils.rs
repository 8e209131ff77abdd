//! Утилиты для списков: сравнение строк, поле поиска, индикаторы сортировки
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::data_grid::SortIndicator;

/// Сравнение строк для сортировки колонок.
///
/// В браузере через `String.prototype.localeCompare` с локалью по умолчанию.
#[cfg(target_arch = "wasm32")]
pub fn collate(a: &str, b: &str) -> Ordering {
    let order = js_sys::JsString::from(a).locale_compare(
        b,
        &js_sys::Array::new(),
        &js_sys::Object::new(),
    );
    order.cmp(&0)
}

/// Сравнение строк для сортировки колонок (вне браузера).
///
/// Сначала по транслитерации без регистра ("Éclair" рядом с "eclair"),
/// затем без регистра, при равенстве побайтово: "apple" и "Apple" не равны.
#[cfg(not(target_arch = "wasm32"))]
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| deunicode::deunicode(s).to_lowercase();
    folded(a)
        .cmp(&folded(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Поле поиска с кнопкой очистки.
///
/// Каждое изменение передаётся в `on_change` сразу и без обработки (без trim).
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || if is_filter_active() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=move |_| on_change.run(String::new())
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Символ индикатора сортировки для заголовка
pub fn get_sort_indicator(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::Ascending => " ▲",
        SortIndicator::Descending => " ▼",
        SortIndicator::Neutral => " ⇅",
    }
}

pub fn get_sort_class(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::Neutral => "sort-icon",
        SortIndicator::Ascending | SortIndicator::Descending => "sort-icon active",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collate_ignores_case_first() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zebra", "apple"), Ordering::Greater);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_collate_case_tiebreak_is_deterministic() {
        assert_ne!(collate("Apple", "apple"), Ordering::Equal);
        assert_eq!(collate("Apple", "apple"), collate("Apple", "apple"));
        assert_eq!(collate("Apple", "apple"), collate("apple", "Apple").reverse());
    }

    #[test]
    fn test_collate_places_accented_letters_with_their_base() {
        assert_eq!(collate("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(collate("apple", "Éclair"), Ordering::Less);
        assert_eq!(collate("Ångström", "Banana"), Ordering::Less);
        assert_ne!(collate("eclair", "Éclair"), Ordering::Equal);
    }

    #[test]
    fn test_sort_indicator_symbols() {
        assert_eq!(get_sort_indicator(SortIndicator::Ascending), " ▲");
        assert_eq!(get_sort_indicator(SortIndicator::Descending), " ▼");
        assert_eq!(get_sort_indicator(SortIndicator::Neutral), " ⇅");
        assert_eq!(get_sort_class(SortIndicator::Neutral), "sort-icon");
        assert_eq!(get_sort_class(SortIndicator::Descending), "sort-icon active");
    }
}
