//! Боковое меню разделов приложения

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub fn get_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem { path: "/", label: "Dashboard", icon: "dashboard" },
        MenuItem { path: "/products", label: "Products", icon: "products" },
        MenuItem { path: "/categories", label: "Categories", icon: "categories" },
        MenuItem { path: "/suppliers", label: "Suppliers", icon: "suppliers" },
        MenuItem { path: "/inventory", label: "Inventory", icon: "inventory" },
    ]
}

/// Пункт меню активен на своей странице и на страницах записей раздела.
/// Корень подсвечивается только на самом себе.
pub fn is_item_active(current: &str, item_path: &str) -> bool {
    if item_path == "/" {
        return current == "/";
    }
    current == item_path
        || current
            .strip_prefix(item_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            {get_menu_items().into_iter().map(|item| {
                let path = item.path;
                view! {
                    <A href=path attr:class="app-sidebar__link">
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                location.pathname.with(|current| is_item_active(current, path))
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </div>
                        </div>
                    </A>
                }
            }).collect_view()}
        </nav>
    }
}
