use crate::shared::api_utils::fetch_json;
use crate::shared::components::{CardAnimated, DetailField, PageHeader, RecordDetails};
use crate::shared::icons::icon;
use contracts::domain::a003_product::aggregate::Product;
use contracts::shared::format::{format_currency, format_date};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

pub fn product_fields(p: &Product) -> Vec<DetailField> {
    vec![
        DetailField::new("Name", p.name.clone()),
        DetailField::new(
            "Description",
            p.description.clone().unwrap_or_else(|| "No description".to_string()),
        ),
        DetailField::new("Category", p.category_name()),
        DetailField::new("Supplier", p.supplier_name()),
        DetailField::new("Price", format_currency(p.price)),
        DetailField::new("Created", format_date(&p.created_at)),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn ProductDetails() -> impl IntoView {
    let params = use_params_map();
    let (item, set_item) = signal::<Option<Product>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        set_item.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_json::<Product>(&format!("/api/products/{}", id)).await {
                Ok(p) => {
                    set_item.set(Some(p));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let title = move || {
        item.get()
            .map(|p| p.name)
            .unwrap_or_else(|| "Product".to_string())
    };

    let go_back = {
        let navigate = use_navigate();
        Callback::new(move |_: ()| navigate("/products", Default::default()))
    };

    view! {
        <div class="page">
            {move || view! {
                <PageHeader title=title() icon_name="products">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_: leptos::ev::MouseEvent| go_back.run(())
                    >
                        {icon("arrow-left")}
                        "Back to products"
                    </Button>
                </PageHeader>
            }}

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || item.get().map(|p| view! {
                <CardAnimated style="max-width: 640px;">
                    <RecordDetails fields=product_fields(&p) />
                </CardAnimated>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_product_fields_fallbacks() {
        let p = Product {
            id: 3,
            name: "Desk Lamp".to_string(),
            description: None,
            price: 45.0,
            category_id: 9,
            supplier_id: 9,
            created_at: Utc.with_ymd_and_hms(2023, 5, 10, 0, 0, 0).unwrap(),
            category: None,
            supplier: None,
        };
        let fields = product_fields(&p);
        let values: Vec<&str> = fields.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["Desk Lamp", "No description", "N/A", "N/A", "$45.00", "May 10, 2023"]
        );
    }
}
