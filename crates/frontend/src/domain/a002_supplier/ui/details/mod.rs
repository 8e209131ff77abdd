use crate::shared::api_utils::fetch_json;
use crate::shared::components::{CardAnimated, DetailField, PageHeader, RecordDetails};
use crate::shared::icons::icon;
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::shared::format::format_date;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

pub fn supplier_fields(s: &Supplier) -> Vec<DetailField> {
    vec![
        DetailField::new("Name", s.name.clone()),
        DetailField::new("Contact Info", s.contact_or_default()),
        DetailField::new("Added", format_date(&s.created_at)),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn SupplierDetails() -> impl IntoView {
    let params = use_params_map();
    let (item, set_item) = signal::<Option<Supplier>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        set_item.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_json::<Supplier>(&format!("/api/suppliers/{}", id)).await {
                Ok(s) => {
                    set_item.set(Some(s));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let title = move || {
        item.get()
            .map(|s| s.name)
            .unwrap_or_else(|| "Supplier".to_string())
    };

    let go_back = {
        let navigate = use_navigate();
        Callback::new(move |_: ()| navigate("/suppliers", Default::default()))
    };

    view! {
        <div class="page">
            {move || view! {
                <PageHeader title=title() icon_name="suppliers">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_: leptos::ev::MouseEvent| go_back.run(())
                    >
                        {icon("arrow-left")}
                        "Back to suppliers"
                    </Button>
                </PageHeader>
            }}

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || item.get().map(|s| view! {
                <CardAnimated style="max-width: 640px;">
                    <RecordDetails fields=supplier_fields(&s) />
                </CardAnimated>
            })}
        </div>
    }
}
