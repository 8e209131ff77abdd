use crate::shared::api_utils::fetch_json;
use crate::shared::components::PageHeader;
use crate::shared::data_grid::{ColumnDescriptor, DataTable, FieldValue, GridRow, SearchSpec};
use crate::shared::icons::icon;
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::domain::a003_product::aggregate::Product;
use contracts::shared::format::format_short_date;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Debug, PartialEq)]
pub struct SupplierRow {
    pub supplier: Supplier,
    pub product_count: usize,
}

impl SupplierRow {
    pub fn build(suppliers: Vec<Supplier>, products: &[Product]) -> Vec<Self> {
        suppliers
            .into_iter()
            .map(|supplier| {
                let product_count = products
                    .iter()
                    .filter(|p| p.supplier_id == supplier.id)
                    .count();
                Self {
                    supplier,
                    product_count,
                }
            })
            .collect()
    }
}

impl GridRow for SupplierRow {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.supplier.id.into()),
            "name" => Some(self.supplier.name.as_str().into()),
            "contact_info" => self.supplier.contact_info.as_deref().map(Into::into),
            "product_count" => Some((self.product_count as i64).into()),
            _ => None,
        }
    }
}

pub fn supplier_columns() -> Vec<ColumnDescriptor<SupplierRow>> {
    vec![
        ColumnDescriptor::key("Name", "name").sortable(),
        ColumnDescriptor::computed("Contact Info", |r: &SupplierRow| {
            r.supplier.contact_or_default()
        }),
        ColumnDescriptor::computed("Added", |r: &SupplierRow| {
            format_short_date(&r.supplier.created_at)
        }),
        ColumnDescriptor::key("Products", "product_count")
            .sortable()
            .class("text-center"),
    ]
}

async fn fetch_rows() -> Result<Vec<SupplierRow>, String> {
    let suppliers = fetch_json::<Vec<Supplier>>("/api/suppliers").await?;
    let products = fetch_json::<Vec<Product>>("/api/products").await?;
    Ok(SupplierRow::build(suppliers, &products))
}

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<SupplierRow>>(Vec::new());
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

    let on_row_click = Callback::new(move |row: SupplierRow| {
        navigate(&format!("/suppliers/{}", row.supplier.id), Default::default());
    });

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Suppliers" subtitle="Manage your product suppliers.".to_string() icon_name="suppliers">
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
                columns=supplier_columns()
                search=SearchSpec::Key("name")
                search_placeholder="Search suppliers..."
                on_row_click=on_row_click
                empty_message="No suppliers found. Add your first supplier to get started."
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_grid::DataGrid;
    use chrono::{TimeZone, Utc};

    fn supplier(id: i64, name: &str, contact: Option<&str>) -> Supplier {
        Supplier {
            id,
            name: name.to_string(),
            contact_info: contact.map(str::to_string),
            created_at: Utc.with_ymd_and_hms(2023, 3, 15, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let rows = SupplierRow::build(
            vec![
                supplier(1, "TechSupply Co.", None),
                supplier(2, "Office Essentials", Some("info@office.example")),
            ],
            &[],
        );
        let mut grid =
            DataGrid::new(supplier_columns()).with_search(Some(SearchSpec::Key("name")));
        grid.set_search_term("tech");
        let ids: Vec<i64> = grid.view(&rows).iter().map(|r| r.supplier.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_cells() {
        let rows = SupplierRow::build(vec![supplier(1, "TechSupply Co.", None)], &[]);
        let texts: Vec<String> = supplier_columns()
            .iter()
            .map(|c| c.cell(&rows[0]).text().to_string())
            .collect();
        assert_eq!(
            texts,
            vec!["TechSupply Co.", "No contact information", "3/15/2023", "0"]
        );
    }
}
