use std::fmt;
use std::sync::Arc;

use super::engine::{derive_view, ColumnDescriptor, GridRow, SearchSpec, ViewState};
use super::render::{build_table, TableModel};

pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

pub type RowHandler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Экземпляр таблицы: конфигурация колонок плюс собственное состояние.
///
/// Строки не хранятся, они передаются заново при каждой отрисовке.
pub struct DataGrid<T> {
    columns: Vec<ColumnDescriptor<T>>,
    search: Option<SearchSpec<T>>,
    empty_message: String,
    on_row_activate: Option<RowHandler<T>>,
    state: ViewState,
}

impl<T> fmt::Debug for DataGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataGrid")
            .field("columns", &self.columns)
            .field("search", &self.search.is_some())
            .field("empty_message", &self.empty_message)
            .field("on_row_activate", &self.on_row_activate.is_some())
            .field("state", &self.state)
            .finish()
    }
}

impl<T> DataGrid<T> {
    pub fn new(columns: Vec<ColumnDescriptor<T>>) -> Self {
        Self {
            columns,
            search: None,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            on_row_activate: None,
            state: ViewState::default(),
        }
    }

    pub fn with_search(mut self, search: Option<SearchSpec<T>>) -> Self {
        self.search = search;
        self
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn with_row_handler(mut self, handler: Option<RowHandler<T>>) -> Self {
        self.on_row_activate = handler;
        self
    }

    pub fn columns(&self) -> &[ColumnDescriptor<T>] {
        &self.columns
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn search_enabled(&self) -> bool {
        self.search.is_some()
    }

    pub fn rows_clickable(&self) -> bool {
        self.on_row_activate.is_some()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.set_search_term(term);
    }

    /// Клик по заголовку колонки `index`; `false`, если колонка не сортируемая
    pub fn toggle_sort_on_column(&mut self, index: usize) -> bool {
        match self.columns.get(index) {
            Some(column) => self.state.toggle_sort_on_column(column),
            None => false,
        }
    }

    pub fn toggle_sort(&mut self, key: &str) -> bool {
        self.state.toggle_sort_by_key(&self.columns, key)
    }

    pub fn row_handler(&self) -> Option<RowHandler<T>> {
        self.on_row_activate.clone()
    }

    /// Вызывает обработчик клика по строке, если он задан
    pub fn activate_row(&self, row: &T) -> bool {
        match &self.on_row_activate {
            Some(handler) => {
                handler(row);
                true
            }
            None => false,
        }
    }
}

impl<T: GridRow> DataGrid<T> {
    pub fn view<'a>(&self, rows: &'a [T]) -> Vec<&'a T> {
        derive_view(rows, self.search.as_ref(), &self.state)
    }

    pub fn render<'a>(&self, rows: &'a [T]) -> TableModel<'a, T> {
        build_table(
            rows,
            &self.columns,
            self.search.as_ref(),
            &self.state,
            &self.empty_message,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_grid::engine::{FieldValue, SortDirection};
    use crate::shared::data_grid::render::TableBody;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: &'static str,
        qty: i64,
    }

    impl GridRow for Row {
        fn field(&self, key: &str) -> Option<FieldValue> {
            match key {
                "id" => Some(self.id.into()),
                "name" => Some(self.name.into()),
                "qty" => Some(self.qty.into()),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Zeta", qty: 5 },
            Row { id: 2, name: "Alpha", qty: 5 },
            Row { id: 3, name: "Mid", qty: 9 },
        ]
    }

    fn grid() -> DataGrid<Row> {
        DataGrid::new(vec![
            ColumnDescriptor::key("Name", "name").sortable(),
            ColumnDescriptor::key("Qty", "qty").sortable(),
            ColumnDescriptor::computed("Label", |r: &Row| format!("#{}", r.id)).sortable(),
        ])
    }

    #[test]
    fn test_defaults() {
        let grid = grid();
        assert!(!grid.search_enabled());
        assert!(!grid.rows_clickable());
        assert_eq!(grid.state(), &ViewState::default());
        let data: Vec<Row> = Vec::new();
        match grid.render(&data).body {
            TableBody::Empty { message, .. } => assert_eq!(message, DEFAULT_EMPTY_MESSAGE),
            TableBody::Rows(_) => panic!("expected placeholder"),
        }
    }

    #[test]
    fn test_header_clicks() {
        let mut grid = grid();
        let data = rows();

        assert!(grid.toggle_sort_on_column(0));
        let names: Vec<_> = grid.view(&data).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);

        assert!(grid.toggle_sort_on_column(0));
        assert_eq!(grid.state().sort_direction, SortDirection::Descending);

        // вычисляемая колонка и несуществующий индекс игнорируются
        let before = grid.state().clone();
        assert!(!grid.toggle_sort_on_column(2));
        assert!(!grid.toggle_sort_on_column(10));
        assert_eq!(grid.state(), &before);

        assert!(grid.toggle_sort("qty"));
        assert_eq!(grid.state().sort_field.as_deref(), Some("qty"));
        assert_eq!(grid.state().sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_search_term_change() {
        let mut grid = grid().with_search(Some(SearchSpec::Key("name")));
        let data = rows();
        assert!(grid.search_enabled());

        grid.set_search_term("al");
        assert_eq!(grid.view(&data), vec![&data[1]]);

        grid.set_search_term("");
        assert_eq!(grid.view(&data).len(), 3);
    }

    #[test]
    fn test_activate_row_dispatches_original_row() {
        let seen: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let grid = grid().with_row_handler(Some(Arc::new(move |row: &Row| {
            sink.lock().unwrap().push(row.id);
        })));
        let data = rows();

        assert!(grid.rows_clickable());
        let view = grid.view(&data);
        assert!(grid.activate_row(view[2]));
        assert_eq!(*seen.lock().unwrap(), vec![3]);
    }

    #[test]
    fn test_activate_row_without_handler() {
        let grid = grid();
        assert!(!grid.activate_row(&rows()[0]));
    }

    #[test]
    fn test_custom_empty_message() {
        let grid = grid().with_empty_message("No products found.");
        let data: Vec<Row> = Vec::new();
        let model = grid.render(&data);
        assert!(matches!(
            model.body,
            TableBody::Empty { ref message, colspan: 3 } if message == "No products found."
        ));
    }
}
