use std::sync::Arc;

use leptos::prelude::*;

use super::engine::{CellContent, ColumnDescriptor, GridRow, SearchSpec};
use super::grid::{DataGrid, RowHandler, DEFAULT_EMPTY_MESSAGE};
use super::render::{sort_indicator, BodyCell, TableBody};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::Badge;
use crate::shared::list_utils::SearchInput;

fn render_cell(cell: BodyCell) -> AnyView {
    let class = cell.class.unwrap_or_default();
    match cell.content {
        CellContent::Text(text) => view! { <td class=class>{text}</td> }.into_any(),
        CellContent::Badge { label, variant } => view! {
            <td class=class>
                <Badge variant=variant.to_string()>{label}</Badge>
            </td>
        }
        .into_any(),
    }
}

/// Таблица с поиском и сортировкой по клику на заголовок.
///
/// Состояние поиска/сортировки у каждого экземпляра своё и живёт, пока
/// компонент смонтирован. Изменение `rows` состояние не сбрасывает.
#[component]
pub fn DataTable<T>(
    /// Исходные строки; таблица их не изменяет
    #[prop(into)]
    rows: Signal<Vec<T>>,
    columns: Vec<ColumnDescriptor<T>>,
    /// Без `search` поле поиска не показывается
    #[prop(optional)]
    search: Option<SearchSpec<T>>,
    #[prop(optional, into)]
    search_placeholder: String,
    #[prop(optional)]
    on_row_click: Option<Callback<T>>,
    #[prop(into, default = DEFAULT_EMPTY_MESSAGE.to_string())]
    empty_message: String,
) -> impl IntoView
where
    T: GridRow + Clone + Send + Sync + 'static,
{
    let handler: Option<RowHandler<T>> = on_row_click.map(|cb| {
        let handler: RowHandler<T> = Arc::new(move |row: &T| cb.run(row.clone()));
        handler
    });

    let grid = RwSignal::new(
        DataGrid::new(columns)
            .with_search(search)
            .with_empty_message(empty_message)
            .with_row_handler(handler),
    );

    let (search_enabled, clickable, columns) = grid.with_untracked(|g| {
        (g.search_enabled(), g.rows_clickable(), g.columns().to_vec())
    });

    let search_bar = search_enabled.then(|| {
        let value = Signal::derive(move || grid.with(|g| g.state().search_term.clone()));
        let on_change = Callback::new(move |term: String| grid.update(|g| g.set_search_term(term)));
        view! {
            <div class="data-table__toolbar">
                <SearchInput value=value on_change=on_change placeholder=search_placeholder />
            </div>
        }
    });

    let headers = columns
        .into_iter()
        .enumerate()
        .map(|(index, column)| {
            let title = column.title.clone();
            let class = column.class.clone().unwrap_or_default();
            let indicator =
                Signal::derive(move || grid.with(|g| sort_indicator(&column, g.state())));
            let on_sort = Callback::new(move |_: ()| {
                grid.update(|g| {
                    g.toggle_sort_on_column(index);
                })
            });
            view! {
                <SortableHeaderCell label=title indicator=indicator on_sort=on_sort class=class />
            }
        })
        .collect_view();

    let row_class = if clickable {
        "table__row table__row--clickable"
    } else {
        "table__row"
    };

    let body = move || {
        rows.with(|data| {
            grid.with(|g| match g.render(data).body {
                TableBody::Empty { message, colspan } => view! {
                    <tr class="table__row table__row--empty">
                        <td class="table__empty" colspan=colspan.to_string()>{message}</td>
                    </tr>
                }
                .into_any(),
                TableBody::Rows(body_rows) => body_rows
                    .into_iter()
                    .map(|body_row| {
                        let row = body_row.row.clone();
                        let on_click = move |_| {
                            let handler = grid.with_untracked(|g| g.row_handler());
                            if let Some(handler) = handler {
                                handler(&row);
                            }
                        };
                        view! {
                            <tr class=row_class on:click=on_click>
                                {body_row.cells.into_iter().map(render_cell).collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()
                    .into_any(),
            })
        })
    };

    view! {
        <div class="data-table">
            {search_bar}
            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>{headers}</tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        </div>
    }
}
