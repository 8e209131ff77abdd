use crate::shared::api_utils::fetch_json;
use crate::shared::components::{CardAnimated, DetailField, PageHeader, RecordDetails};
use crate::shared::icons::icon;
use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

pub fn category_fields(c: &Category) -> Vec<DetailField> {
    vec![
        DetailField::new("Name", c.name.clone()),
        DetailField::new("Description", c.description_or_default()),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryDetails() -> impl IntoView {
    let params = use_params_map();
    let (item, set_item) = signal::<Option<Category>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        set_item.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_json::<Category>(&format!("/api/categories/{}", id)).await {
                Ok(c) => {
                    set_item.set(Some(c));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let title = move || {
        item.get()
            .map(|c| c.name)
            .unwrap_or_else(|| "Category".to_string())
    };

    let go_back = {
        let navigate = use_navigate();
        Callback::new(move |_: ()| navigate("/categories", Default::default()))
    };

    view! {
        <div class="page">
            {move || view! {
                <PageHeader title=title() icon_name="categories">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_: leptos::ev::MouseEvent| go_back.run(())
                    >
                        {icon("arrow-left")}
                        "Back to categories"
                    </Button>
                </PageHeader>
            }}

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || item.get().map(|c| view! {
                <CardAnimated style="max-width: 640px;">
                    <RecordDetails fields=category_fields(&c) />
                </CardAnimated>
            })}
        </div>
    }
}
