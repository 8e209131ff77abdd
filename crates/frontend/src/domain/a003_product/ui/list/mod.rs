use crate::shared::api_utils::fetch_json;
use crate::shared::components::PageHeader;
use crate::shared::data_grid::{ColumnDescriptor, DataTable, FieldValue, GridRow, SearchSpec};
use crate::shared::icons::icon;
use contracts::domain::a003_product::aggregate::Product;
use contracts::shared::format::{format_currency, format_short_date};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

impl GridRow for Product {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "description" => self.description.as_deref().map(Into::into),
            "price" => Some(self.price.into()),
            "category_id" => Some(self.category_id.into()),
            "supplier_id" => Some(self.supplier_id.into()),
            _ => None,
        }
    }
}

pub fn product_columns() -> Vec<ColumnDescriptor<Product>> {
    vec![
        ColumnDescriptor::key("Name", "name").sortable(),
        ColumnDescriptor::computed("Category", |p: &Product| p.category_name()),
        ColumnDescriptor::computed("Supplier", |p: &Product| p.supplier_name()),
        ColumnDescriptor::computed("Price", |p: &Product| format_currency(p.price))
            .class("font-medium"),
        ColumnDescriptor::computed("Created", |p: &Product| format_short_date(&p.created_at)),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Product>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let navigate = use_navigate();

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_json::<Vec<Product>>("/api/products").await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let on_row_click = Callback::new(move |p: Product| {
        navigate(&format!("/products/{}", p.id), Default::default());
    });

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Products" subtitle="Manage your product catalog.".to_string() icon_name="products">
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
                columns=product_columns()
                search=SearchSpec::Key("name")
                search_placeholder="Search products..."
                on_row_click=on_row_click
                empty_message="No products found. Add your first product to get started."
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_grid::{DataGrid, ViewState};
    use chrono::{TimeZone, Utc};
    use contracts::domain::a001_category::aggregate::Category;

    fn product(id: i64, name: &str, price: f64, category: Option<&str>) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: None,
            price,
            category_id: 1,
            supplier_id: 1,
            created_at: Utc.with_ymd_and_hms(2023, 5, 10, 8, 0, 0).unwrap(),
            category: category.map(|c| Category {
                id: 1,
                name: c.to_string(),
                description: None,
            }),
            supplier: None,
        }
    }

    #[test]
    fn test_search_by_name() {
        let rows = vec![
            product(1, "Laptop Pro", 1299.99, Some("Electronics")),
            product(2, "Office Chair", 199.5, None),
        ];
        let mut grid = DataGrid::new(product_columns()).with_search(Some(SearchSpec::Key("name")));
        grid.set_search_term("LAPTOP");
        let view = grid.view(&rows);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);
    }

    #[test]
    fn test_only_name_is_sortable() {
        let mut grid = DataGrid::new(product_columns());
        for index in 1..5 {
            assert!(!grid.toggle_sort_on_column(index));
        }
        assert_eq!(grid.state(), &ViewState::default());
        assert!(grid.toggle_sort_on_column(0));
    }

    #[test]
    fn test_cells() {
        let rows = vec![product(1, "Laptop Pro", 1299.99, None)];
        let columns = product_columns();
        let texts: Vec<String> = columns
            .iter()
            .map(|c| c.cell(&rows[0]).text().to_string())
            .collect();
        assert_eq!(texts, vec!["Laptop Pro", "N/A", "N/A", "$1,299.99", "5/10/2023"]);
    }
}
