//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Price"
//!     indicator=Signal::derive(move || Some(SortIndicator::Neutral))
//!     on_sort=Callback::new(move |_| grid.update(|g| { g.toggle_sort("price"); }))
//! />
//! ```

use crate::shared::data_grid::SortIndicator;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;

/// Ячейка заголовка таблицы.
///
/// Если `indicator` равен `None`, колонка не сортируемая: клик не вызывает
/// `on_sort` и индикатор не рисуется.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Текущее состояние сортировки колонки
    #[prop(into)]
    indicator: Signal<Option<SortIndicator>>,

    on_sort: Callback<()>,

    /// Дополнительные CSS классы
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let handle_click = move |_| {
        if indicator.get_untracked().is_some() {
            on_sort.run(());
        }
    };

    let cell_class = move || {
        let sortable = if indicator.get().is_some() {
            " table__header-cell--sortable"
        } else {
            ""
        };
        format!(
            "table__header-cell{} {}",
            sortable,
            class.get().unwrap_or_default()
        )
    };

    view! {
        <th class=cell_class on:click=handle_click>
            <div class="table__sortable-header">
                {label}
                {move || indicator.get().map(|ind| view! {
                    <span class=get_sort_class(ind)>{get_sort_indicator(ind)}</span>
                })}
            </div>
        </th>
    }
}
