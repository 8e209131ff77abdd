//! Модель отрисовки таблицы: что показать в заголовках и в теле,
//! без привязки к DOM.

use super::engine::{
    derive_view, CellContent, ColumnDescriptor, GridRow, SearchSpec, SortDirection, ViewState,
};

/// Индикатор сортировки в заголовке
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Ascending,
    Descending,
    /// Колонка сортируемая, но сейчас сортировка по другой (или ни по какой)
    Neutral,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub title: String,
    pub class: Option<String>,
    /// `None` для несортируемых колонок
    pub sort: Option<SortIndicator>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyCell {
    pub content: CellContent,
    pub class: Option<String>,
}

#[derive(Debug)]
pub struct BodyRow<'a, T> {
    pub row: &'a T,
    pub cells: Vec<BodyCell>,
}

#[derive(Debug)]
pub enum TableBody<'a, T> {
    Rows(Vec<BodyRow<'a, T>>),
    /// Одна ячейка на всю ширину таблицы
    Empty { message: String, colspan: usize },
}

#[derive(Debug)]
pub struct TableModel<'a, T> {
    pub headers: Vec<HeaderCell>,
    pub body: TableBody<'a, T>,
}

impl<T> TableModel<'_, T> {
    pub fn row_count(&self) -> usize {
        match &self.body {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Empty { .. } => 0,
        }
    }
}

pub fn sort_indicator<T>(column: &ColumnDescriptor<T>, state: &ViewState) -> Option<SortIndicator> {
    let key = column.sort_key()?;
    if state.sort_field.as_deref() == Some(key) {
        Some(match state.sort_direction {
            SortDirection::Ascending => SortIndicator::Ascending,
            SortDirection::Descending => SortIndicator::Descending,
        })
    } else {
        Some(SortIndicator::Neutral)
    }
}

pub fn build_headers<T>(columns: &[ColumnDescriptor<T>], state: &ViewState) -> Vec<HeaderCell> {
    columns
        .iter()
        .map(|column| HeaderCell {
            title: column.title.clone(),
            class: column.class.clone(),
            sort: sort_indicator(column, state),
        })
        .collect()
}

pub fn build_table<'a, T: GridRow>(
    rows: &'a [T],
    columns: &[ColumnDescriptor<T>],
    search: Option<&SearchSpec<T>>,
    state: &ViewState,
    empty_message: &str,
) -> TableModel<'a, T> {
    let view = derive_view(rows, search, state);

    let body = if view.is_empty() {
        TableBody::Empty {
            message: empty_message.to_string(),
            colspan: columns.len().max(1),
        }
    } else {
        TableBody::Rows(
            view.into_iter()
                .map(|row| BodyRow {
                    row,
                    cells: columns
                        .iter()
                        .map(|column| BodyCell {
                            content: column.cell(row),
                            class: column.class.clone(),
                        })
                        .collect(),
                })
                .collect(),
        )
    };

    TableModel {
        headers: build_headers(columns, state),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_grid::engine::FieldValue;

    struct Product {
        name: &'static str,
        qty: i64,
        category: Option<&'static str>,
    }

    impl GridRow for Product {
        fn field(&self, key: &str) -> Option<FieldValue> {
            match key {
                "name" => Some(self.name.into()),
                "qty" => Some(self.qty.into()),
                _ => None,
            }
        }
    }

    fn columns() -> Vec<ColumnDescriptor<Product>> {
        vec![
            ColumnDescriptor::key("Name", "name").sortable(),
            ColumnDescriptor::key("Qty", "qty").class("font-medium"),
            ColumnDescriptor::computed("Category", |p: &Product| p.category.unwrap_or("N/A")),
        ]
    }

    #[test]
    fn test_empty_rows_render_single_placeholder() {
        let rows: Vec<Product> = Vec::new();
        let model = build_table(
            &rows,
            &columns(),
            None,
            &ViewState::default(),
            "No data available",
        );

        assert_eq!(model.row_count(), 0);
        match model.body {
            TableBody::Empty { message, colspan } => {
                assert_eq!(message, "No data available");
                assert_eq!(colspan, 3);
            }
            TableBody::Rows(_) => panic!("expected placeholder"),
        }
        assert_eq!(model.headers.len(), 3);
    }

    #[test]
    fn test_everything_filtered_out_shows_placeholder() {
        let rows = vec![Product { name: "Laptop", qty: 1, category: None }];
        let state = ViewState {
            search_term: "phone".to_string(),
            ..ViewState::default()
        };
        let spec = SearchSpec::Key("name");
        let model = build_table(&rows, &columns(), Some(&spec), &state, "Nothing");
        assert!(matches!(model.body, TableBody::Empty { ref message, .. } if message == "Nothing"));
    }

    #[test]
    fn test_header_indicators() {
        let cols = columns();
        let headers = build_headers(&cols, &ViewState::default());
        assert_eq!(headers[0].sort, Some(SortIndicator::Neutral));
        assert_eq!(headers[1].sort, None);
        assert_eq!(headers[2].sort, None);
        assert_eq!(headers[1].class.as_deref(), Some("font-medium"));

        let mut state = ViewState::default();
        state.toggle_sort("name");
        assert_eq!(build_headers(&cols, &state)[0].sort, Some(SortIndicator::Ascending));
        state.toggle_sort("name");
        assert_eq!(build_headers(&cols, &state)[0].sort, Some(SortIndicator::Descending));
    }

    #[test]
    fn test_computed_header_click_changes_nothing() {
        let cols = columns();
        let mut state = ViewState::default();
        assert!(!state.toggle_sort_on_column(&cols[2]));
        assert_eq!(state, ViewState::default());
        assert_eq!(build_headers(&cols, &state)[2].sort, None);
    }

    #[test]
    fn test_body_cells_follow_column_order() {
        let rows = vec![
            Product { name: "Zeta", qty: 5, category: Some("Toys") },
            Product { name: "Alpha", qty: 5, category: None },
        ];
        let mut state = ViewState::default();
        state.toggle_sort("name");
        let model = build_table(&rows, &columns(), None, &state, "No data available");

        let TableBody::Rows(body) = model.body else {
            panic!("expected rows");
        };
        let texts: Vec<Vec<&str>> = body
            .iter()
            .map(|r| r.cells.iter().map(|c| c.content.text()).collect())
            .collect();
        assert_eq!(texts, vec![vec!["Alpha", "5", "N/A"], vec!["Zeta", "5", "Toys"]]);
        assert!(std::ptr::eq(body[0].row, &rows[1]));
    }
}
