//! Ядро таблицы: доступ к полям строки, описание колонок, состояние
//! поиска/сортировки и вычисление отображаемого набора строк.
//!
//! Всё здесь чистое и синхронное; реактивность добавляет `component.rs`.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::shared::list_utils::collate;

/// Значение поля строки, прочитанное по ключу
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Строка таблицы с доступом к полям по ключу.
///
/// `None` означает, что поля нет (или оно пустое, например `Option::None`):
/// такая строка не проходит поиск по этому ключу и не упорядочивается по нему.
pub trait GridRow {
    fn field(&self, key: &str) -> Option<FieldValue>;
}

/// Содержимое ячейки
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Text(String),
    /// `variant`: см. `Badge` ("success", "warning", "error", ...)
    Badge { label: String, variant: &'static str },
}

impl CellContent {
    pub fn text(&self) -> &str {
        match self {
            CellContent::Text(text) => text,
            CellContent::Badge { label, .. } => label,
        }
    }
}

impl From<String> for CellContent {
    fn from(value: String) -> Self {
        CellContent::Text(value)
    }
}

impl From<&str> for CellContent {
    fn from(value: &str) -> Self {
        CellContent::Text(value.to_string())
    }
}

impl From<Option<FieldValue>> for CellContent {
    /// Булевы и отсутствующие значения выводятся пустой ячейкой
    fn from(value: Option<FieldValue>) -> Self {
        match value {
            Some(FieldValue::Text(text)) => CellContent::Text(text),
            Some(FieldValue::Number(n)) => CellContent::Text(n.to_string()),
            Some(FieldValue::Bool(_)) | None => CellContent::Text(String::new()),
        }
    }
}

pub type CellFn<T> = Arc<dyn Fn(&T) -> CellContent + Send + Sync>;
pub type SearchFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Источник значения колонки: ключ строки или вычисление
pub enum ColumnField<T> {
    Key(&'static str),
    Computed(CellFn<T>),
}

impl<T> Clone for ColumnField<T> {
    fn clone(&self) -> Self {
        match self {
            ColumnField::Key(key) => ColumnField::Key(*key),
            ColumnField::Computed(f) => ColumnField::Computed(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for ColumnField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnField::Key(key) => f.debug_tuple("Key").field(key).finish(),
            ColumnField::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Описание колонки: заголовок, источник значения, сортировка, CSS-класс
pub struct ColumnDescriptor<T> {
    pub title: String,
    pub field: ColumnField<T>,
    pub sortable: bool,
    pub class: Option<String>,
}

impl<T> Clone for ColumnDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            field: self.field.clone(),
            sortable: self.sortable,
            class: self.class.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("title", &self.title)
            .field("field", &self.field)
            .field("sortable", &self.sortable)
            .field("class", &self.class)
            .finish()
    }
}

impl<T> ColumnDescriptor<T> {
    pub fn key(title: impl Into<String>, key: &'static str) -> Self {
        Self {
            title: title.into(),
            field: ColumnField::Key(key),
            sortable: false,
            class: None,
        }
    }

    pub fn computed<C, F>(title: impl Into<String>, f: F) -> Self
    where
        T: 'static,
        C: Into<CellContent>,
        F: Fn(&T) -> C + Send + Sync + 'static,
    {
        Self {
            title: title.into(),
            field: ColumnField::Computed(Arc::new(move |row: &T| f(row).into())),
            sortable: false,
            class: None,
        }
    }

    /// Помечает колонку сортируемой. Для вычисляемой колонки флаг
    /// сохраняется, но сортировка по ней не включается (см. `sort_key`).
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Ключ сортировки: только для сортируемых колонок с прямым ключом
    pub fn sort_key(&self) -> Option<&'static str> {
        match self.field {
            ColumnField::Key(key) if self.sortable => Some(key),
            _ => None,
        }
    }
}

impl<T: GridRow> ColumnDescriptor<T> {
    pub fn cell(&self, row: &T) -> CellContent {
        match &self.field {
            ColumnField::Key(key) => row.field(key).into(),
            ColumnField::Computed(f) => f(row),
        }
    }
}

/// По чему искать: поле строки или вычисляемый текст
pub enum SearchSpec<T> {
    Key(&'static str),
    Computed(SearchFn<T>),
}

impl<T> Clone for SearchSpec<T> {
    fn clone(&self) -> Self {
        match self {
            SearchSpec::Key(key) => SearchSpec::Key(*key),
            SearchSpec::Computed(f) => SearchSpec::Computed(Arc::clone(f)),
        }
    }
}

impl<T> SearchSpec<T> {
    pub fn computed<F>(f: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        SearchSpec::Computed(Arc::new(f))
    }
}

impl<T: GridRow> SearchSpec<T> {
    /// Вхождение подстроки без учёта регистра.
    ///
    /// Числа сравниваются по десятичной записи: "1" находит и 15, и 21.
    /// Булевы и отсутствующие поля не совпадают никогда.
    pub fn matches(&self, row: &T, term: &str) -> bool {
        match self {
            SearchSpec::Computed(f) => contains_ignore_case(&f(row), term),
            SearchSpec::Key(key) => match row.field(key) {
                Some(FieldValue::Text(text)) => contains_ignore_case(&text, term),
                Some(FieldValue::Number(n)) => n.to_string().contains(term),
                Some(FieldValue::Bool(_)) | None => false,
            },
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Направление применяется к компаратору, а не к результату сортировки
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Состояние поиска и сортировки одной таблицы
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub sort_field: Option<String>,
    pub sort_direction: SortDirection,
}

impl ViewState {
    /// Строка сохраняется как есть, без trim
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field.as_deref() == Some(field) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = Some(field.to_string());
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Возвращает `false`, если колонка не сортируемая
    pub fn toggle_sort_on_column<T>(&mut self, column: &ColumnDescriptor<T>) -> bool {
        match column.sort_key() {
            Some(key) => {
                self.toggle_sort(key);
                true
            }
            None => false,
        }
    }

    /// Переключение по ключу поля; ключ должен принадлежать сортируемой колонке
    pub fn toggle_sort_by_key<T>(&mut self, columns: &[ColumnDescriptor<T>], key: &str) -> bool {
        match columns.iter().find(|c| c.sort_key() == Some(key)) {
            Some(column) => self.toggle_sort_on_column(column),
            None => false,
        }
    }
}

/// Сравнение двух значений поля для сортировки.
///
/// Текст с текстом, число с числом, bool с bool (false < true);
/// всё остальное (разные типы, отсутствующие поля) считается равным.
pub fn compare_field_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(FieldValue::Text(a)), Some(FieldValue::Text(b))) => collate(a, b),
        (Some(FieldValue::Number(a)), Some(FieldValue::Number(b))) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (Some(FieldValue::Bool(a)), Some(FieldValue::Bool(b))) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Отфильтрованные и отсортированные строки (ссылки на исходные).
///
/// Чистая функция от строк, поиска и состояния; порядок исходных строк
/// сохраняется для всех равных при сортировке элементов.
pub fn derive_view<'a, T: GridRow>(
    rows: &'a [T],
    search: Option<&SearchSpec<T>>,
    state: &ViewState,
) -> Vec<&'a T> {
    let mut view: Vec<&T> = rows.iter().collect();

    if let Some(spec) = search {
        if !state.search_term.is_empty() {
            view.retain(|row| spec.matches(row, &state.search_term));
        }
    }

    if let Some(field) = state.sort_field.as_deref() {
        let direction = state.sort_direction;
        let keyed: Vec<(Option<FieldValue>, &T)> =
            view.into_iter().map(|row| (row.field(field), row)).collect();
        view = merge_sort_by(
            keyed,
            &|(a, _): &(Option<FieldValue>, &T), (b, _): &(Option<FieldValue>, &T)| {
                direction.apply(compare_field_values(a.as_ref(), b.as_ref()))
            },
        )
        .into_iter()
        .map(|(_, row)| row)
        .collect();
    }

    view
}

/// Стабильная сортировка слиянием.
///
/// Компаратор со "всё разнотипное равно" не задаёт полный порядок, а
/// `slice::sort_by` в таком случае вправе паниковать.
fn merge_sort_by<E, F>(mut items: Vec<E>, cmp: &F) -> Vec<E>
where
    F: Fn(&E, &E) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, cmp);
    let right = merge_sort_by(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(a), Some(b)) = (left.peek(), right.peek()) {
        let take_right = cmp(b, a) == Ordering::Less;
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
