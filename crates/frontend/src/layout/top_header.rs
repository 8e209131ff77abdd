use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    view! {
        <header class="top-header">
            <button
                class="top-header__toggle"
                title="Toggle menu"
                on:click=move |_| ctx.toggle_left()
            >
                "☰"
            </button>
            <span class="top-header__title">"Inventory Admin"</span>
        </header>
    }
}
