use crate::dashboards::d400_overview::api;
use crate::shared::components::{CardAnimated, PageHeader, StatCard};
use crate::shared::data_grid::{ColumnDescriptor, DataTable};
use crate::shared::icons::icon;
use contracts::dashboards::d400_overview::DashboardSummary;
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::a004_inventory::aggregate::Inventory;
use contracts::shared::format::{format_currency, format_date, format_quantity};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

pub fn recent_product_columns() -> Vec<ColumnDescriptor<Product>> {
    vec![
        ColumnDescriptor::key("Name", "name").sortable(),
        ColumnDescriptor::computed("Category", |p: &Product| p.category_name()),
        ColumnDescriptor::computed("Price", |p: &Product| format_currency(p.price)),
        ColumnDescriptor::computed("Added", |p: &Product| format_date(&p.created_at)),
    ]
}

/// Строка блока "Low Stock Alert": имя товара и остаток
pub fn low_stock_line(item: &Inventory) -> (String, String) {
    (
        item.product_name().unwrap_or("Unknown").to_string(),
        format!("{} items left", item.quantity),
    )
}

/// Главная страница: сводные показатели, последние товары, товары с низким остатком
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<DashboardSummary>);
    let (error, set_error) = signal(None::<String>);
    let navigate = use_navigate();

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_summary().await {
                Ok(summary) => {
                    set_data.set(Some(summary));
                    set_error.set(None);
                }
                Err(err) => {
                    log::error!("Failed to load dashboard summary: {}", err);
                    set_error.set(Some(err));
                }
            }
        });
    });

    let stat = move |f: fn(&DashboardSummary) -> String| {
        Signal::derive(move || data.with(|d| d.as_ref().map(f)))
    };

    let recent = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|s| s.recent_products.clone()).unwrap_or_default())
    });

    let low_stock = move || {
        data.with(|d| d.as_ref().map(|s| s.low_stock.clone()).unwrap_or_default())
    };

    let go = {
        let navigate = navigate.clone();
        move |path: &'static str| {
            let navigate = navigate.clone();
            move |_: leptos::ev::MouseEvent| navigate(path, Default::default())
        }
    };
    let manage_inventory = go("/inventory");

    let on_row_click = {
        let navigate = navigate.clone();
        Callback::new(move |p: Product| {
            navigate(&format!("/products/{}", p.id), Default::default());
        })
    };

    view! {
        <div class="page">
            <PageHeader
                title="Dashboard"
                subtitle="Overview of your product inventory system.".to_string()
                icon_name="dashboard"
            />

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="dashboard-grid">
                <div class="dashboard-grid__item" on:click=go("/products")>
                    <StatCard
                        label="Total Products"
                        icon_name="products"
                        value=stat(|s| s.total_products.to_string())
                        subtitle="View all products →".to_string()
                    />
                </div>
                <div class="dashboard-grid__item" on:click=go("/categories")>
                    <StatCard
                        label="Categories"
                        icon_name="categories"
                        value=stat(|s| s.total_categories.to_string())
                        subtitle="View all categories →".to_string()
                    />
                </div>
                <div class="dashboard-grid__item" on:click=go("/suppliers")>
                    <StatCard
                        label="Suppliers"
                        icon_name="suppliers"
                        value=stat(|s| s.total_suppliers.to_string())
                        subtitle="View all suppliers →".to_string()
                    />
                </div>
                <div class="dashboard-grid__item" on:click=go("/inventory")>
                    <StatCard
                        label="Total Inventory"
                        icon_name="inventory"
                        value=stat(|s| format_quantity(s.total_inventory))
                        subtitle="View inventory details →".to_string()
                    />
                </div>
            </div>

            <CardAnimated delay_ms=80>
                <h2 class="dashboard-section__title">"Recent Products"</h2>
                <DataTable
                    rows=recent
                    columns=recent_product_columns()
                    on_row_click=on_row_click
                />
            </CardAnimated>

            {move || {
                let items = low_stock();
                (!items.is_empty()).then(|| {
                    let manage = manage_inventory.clone();
                    view! {
                        <CardAnimated delay_ms=160 style="border-color: var(--color-warning-200); background: var(--color-warning-50);">
                            <h2 class="dashboard-section__title dashboard-section__title--warning">
                                {icon("alert")}
                                "Low Stock Alert"
                            </h2>
                            <ul class="low-stock-list">
                                {items.iter().map(|item| {
                                    let (name, left) = low_stock_line(item);
                                    view! {
                                        <li class="low-stock-list__item">
                                            <span>{name}</span>
                                            <span class="low-stock-list__count">{left}</span>
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                            <Button appearance=ButtonAppearance::Secondary on_click=manage>
                                "Manage Inventory"
                            </Button>
                        </CardAnimated>
                    }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_low_stock_line() {
        let item = Inventory {
            id: 1,
            product_id: 7,
            quantity: 12,
            last_updated: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
            product: None,
        };
        assert_eq!(
            low_stock_line(&item),
            ("Unknown".to_string(), "12 items left".to_string())
        );
    }

    #[test]
    fn test_recent_products_have_no_search_but_sort_by_name() {
        let columns = recent_product_columns();
        assert_eq!(columns.len(), 4);
        assert_eq!(columns[0].sort_key(), Some("name"));
        assert!(columns[1..].iter().all(|c| c.sort_key().is_none()));
    }
}
