use crate::shared::api_utils::fetch_json;
use crate::shared::components::PageHeader;
use crate::shared::data_grid::{ColumnDescriptor, DataTable, FieldValue, GridRow, SearchSpec};
use crate::shared::icons::icon;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a003_product::aggregate::Product;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Строка списка категорий: категория и число её товаров
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRow {
    pub category: Category,
    pub product_count: usize,
}

impl CategoryRow {
    pub fn build(categories: Vec<Category>, products: &[Product]) -> Vec<Self> {
        categories
            .into_iter()
            .map(|category| {
                let product_count = products
                    .iter()
                    .filter(|p| p.category_id == category.id)
                    .count();
                Self {
                    category,
                    product_count,
                }
            })
            .collect()
    }
}

impl GridRow for CategoryRow {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.category.id.into()),
            "name" => Some(self.category.name.as_str().into()),
            "description" => self.category.description.as_deref().map(Into::into),
            "product_count" => Some((self.product_count as i64).into()),
            _ => None,
        }
    }
}

pub fn category_columns() -> Vec<ColumnDescriptor<CategoryRow>> {
    vec![
        ColumnDescriptor::key("Name", "name").sortable(),
        ColumnDescriptor::computed("Description", |r: &CategoryRow| {
            r.category.description_or_default()
        })
        .class("max-w-md truncate"),
        ColumnDescriptor::key("Products", "product_count")
            .sortable()
            .class("text-center"),
    ]
}

async fn fetch_rows() -> Result<Vec<CategoryRow>, String> {
    let categories = fetch_json::<Vec<Category>>("/api/categories").await?;
    let products = fetch_json::<Vec<Product>>("/api/products").await?;
    Ok(CategoryRow::build(categories, &products))
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<CategoryRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let navigate = use_navigate();

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_rows().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let on_row_click = Callback::new(move |row: CategoryRow| {
        navigate(&format!("/categories/{}", row.category.id), Default::default());
    });

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Categories" subtitle="Manage product categories.".to_string() icon_name="categories">
                <button class="button button--secondary" on:click=move |_| fetch() disabled=move || loading.get()>
                    {icon("refresh")}
                    {"Refresh"}
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <DataTable
                rows=items
                columns=category_columns()
                search=SearchSpec::Key("name")
                search_placeholder="Search categories..."
                on_row_click=on_row_click
                empty_message="No categories found. Add your first category to get started."
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_grid::DataGrid;
    use chrono::{TimeZone, Utc};

    fn category(id: i64, name: &str, description: Option<&str>) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }

    fn product(id: i64, category_id: i64) -> Product {
        Product {
            id,
            name: format!("P{id}"),
            description: None,
            price: 1.0,
            category_id,
            supplier_id: 1,
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            category: None,
            supplier: None,
        }
    }

    #[test]
    fn test_build_counts_products() {
        let rows = CategoryRow::build(
            vec![category(1, "Electronics", None), category(2, "Books", None)],
            &[product(1, 1), product(2, 1), product(3, 7)],
        );
        assert_eq!(rows[0].product_count, 2);
        assert_eq!(rows[1].product_count, 0);
    }

    #[test]
    fn test_sort_by_product_count_descending() {
        let rows = CategoryRow::build(
            vec![
                category(1, "Electronics", None),
                category(2, "Books", None),
                category(3, "Garden", None),
            ],
            &[product(1, 3), product(2, 3), product(3, 1)],
        );
        let mut grid = DataGrid::new(category_columns());
        assert!(grid.toggle_sort("product_count"));
        assert!(grid.toggle_sort("product_count"));
        let names: Vec<&str> = grid
            .view(&rows)
            .iter()
            .map(|r| r.category.name.as_str())
            .collect();
        assert_eq!(names, vec!["Garden", "Electronics", "Books"]);
    }

    #[test]
    fn test_description_fallback_cell() {
        let rows = CategoryRow::build(vec![category(1, "Books", Some(""))], &[]);
        let columns = category_columns();
        assert_eq!(columns[1].cell(&rows[0]).text(), "No description");
        assert_eq!(columns[2].cell(&rows[0]).text(), "0");
    }
}
