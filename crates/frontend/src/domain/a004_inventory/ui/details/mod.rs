use crate::shared::api_utils::fetch_json;
use crate::shared::components::ui::Badge;
use crate::shared::components::{CardAnimated, DetailField, PageHeader, RecordDetails};
use crate::shared::icons::icon;
use contracts::domain::a004_inventory::aggregate::Inventory;
use contracts::shared::format::{format_currency, format_date, format_quantity};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

pub fn inventory_fields(inv: &Inventory) -> Vec<DetailField> {
    let product = inv.product.as_ref();
    vec![
        DetailField::new("Product", inv.product_name().unwrap_or("Unknown")),
        DetailField::new(
            "Category",
            product
                .map(|p| p.category_name())
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        DetailField::new(
            "Supplier",
            product
                .map(|p| p.supplier_name())
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        DetailField::new("Quantity", format_quantity(inv.quantity)),
        DetailField::new(
            "Unit Price",
            format_currency(product.map(|p| p.price).unwrap_or(0.0)),
        ),
        DetailField::new("Last Updated", format_date(&inv.last_updated)),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn InventoryDetails() -> impl IntoView {
    let params = use_params_map();
    let (item, set_item) = signal::<Option<Inventory>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        set_item.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_json::<Inventory>(&format!("/api/inventory/{}", id)).await {
                Ok(inv) => {
                    set_item.set(Some(inv));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let title = move || {
        item.get()
            .and_then(|inv| inv.product.map(|p| p.name))
            .unwrap_or_else(|| "Inventory".to_string())
    };

    let go_back = {
        let navigate = use_navigate();
        Callback::new(move |_: ()| navigate("/inventory", Default::default()))
    };

    view! {
        <div class="page">
            {move || view! {
                <PageHeader title=title() icon_name="inventory">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_: leptos::ev::MouseEvent| go_back.run(())
                    >
                        {icon("arrow-left")}
                        "Back to inventory"
                    </Button>
                </PageHeader>
            }}

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || item.get().map(|inv| {
                let status = inv.stock_status();
                view! {
                    <CardAnimated style="max-width: 640px;">
                        <div class="record-details__status">
                            <Badge variant=status.badge_variant().to_string()>{status.label()}</Badge>
                        </div>
                        <RecordDetails fields=inventory_fields(&inv) />
                    </CardAnimated>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_fields_without_product() {
        let inv = Inventory {
            id: 9,
            product_id: 42,
            quantity: 1250,
            last_updated: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
            product: None,
        };
        let fields = inventory_fields(&inv);
        let values: Vec<&str> = fields.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["Unknown", "N/A", "N/A", "1,250", "$0.00", "Jun 1, 2023"]
        );
    }
}
