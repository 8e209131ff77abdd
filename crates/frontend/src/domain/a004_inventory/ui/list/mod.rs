use crate::shared::api_utils::fetch_json;
use crate::shared::components::PageHeader;
use crate::shared::data_grid::{
    CellContent, ColumnDescriptor, DataTable, FieldValue, GridRow, SearchSpec,
};
use crate::shared::icons::icon;
use contracts::domain::a004_inventory::aggregate::Inventory;
use contracts::shared::format::{format_currency, format_short_date};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

impl GridRow for Inventory {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.id.into()),
            "product_id" => Some(self.product_id.into()),
            "quantity" => Some(self.quantity.into()),
            _ => None,
        }
    }
}

pub fn stock_status_cell(row: &Inventory) -> CellContent {
    let status = row.stock_status();
    CellContent::Badge {
        label: status.label().to_string(),
        variant: status.badge_variant(),
    }
}

pub fn inventory_columns() -> Vec<ColumnDescriptor<Inventory>> {
    vec![
        // флаг sortable у вычисляемой колонки ничего не включает
        ColumnDescriptor::computed("Product", |r: &Inventory| {
            r.product_name().unwrap_or("Unknown").to_string()
        })
        .sortable(),
        ColumnDescriptor::computed("Category", |r: &Inventory| {
            r.product
                .as_ref()
                .map(|p| p.category_name())
                .unwrap_or_else(|| "N/A".to_string())
        }),
        // количество сортируется, хотя в прежней версии страницы склада не сортировалось
        ColumnDescriptor::key("Quantity", "quantity")
            .sortable()
            .class("font-medium"),
        ColumnDescriptor::computed("Status", stock_status_cell),
        ColumnDescriptor::computed("Price", |r: &Inventory| {
            format_currency(r.product.as_ref().map(|p| p.price).unwrap_or(0.0))
        }),
        ColumnDescriptor::computed("Last Updated", |r: &Inventory| {
            format_short_date(&r.last_updated)
        }),
    ]
}

pub fn inventory_search() -> SearchSpec<Inventory> {
    SearchSpec::computed(|r: &Inventory| r.product_name().unwrap_or_default().to_string())
}

#[component]
#[allow(non_snake_case)]
pub fn InventoryList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Inventory>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let navigate = use_navigate();

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_json::<Vec<Inventory>>("/api/inventory").await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let on_row_click = Callback::new(move |row: Inventory| {
        navigate(&format!("/inventory/{}", row.id), Default::default());
    });

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Inventory" subtitle="Track stock levels for your products.".to_string() icon_name="inventory">
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
                columns=inventory_columns()
                search=inventory_search()
                search_placeholder="Search by product..."
                on_row_click=on_row_click
                empty_message="No inventory data found. Add products to get started."
            />
        </div>
    }
}
