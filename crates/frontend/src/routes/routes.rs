use crate::dashboards::OverviewDashboard;
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_supplier::ui::details::SupplierDetails;
use crate::domain::a002_supplier::ui::list::SupplierList;
use crate::domain::a003_product::ui::details::ProductDetails;
use crate::domain::a003_product::ui::list::ProductList;
use crate::domain::a004_inventory::ui::details::InventoryDetails;
use crate::domain::a004_inventory::ui::list::InventoryList;
use crate::layout::Shell;
use crate::shared::components::PageHeader;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Page not found" subtitle="The page you are looking for does not exist.".to_string()>
                <A href="/" attr:class="button button--primary">"Return to Dashboard"</A>
            </PageHeader>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=OverviewDashboard />
                    <Route path=path!("/products") view=ProductList />
                    <Route path=path!("/products/:id") view=ProductDetails />
                    <Route path=path!("/categories") view=CategoryList />
                    <Route path=path!("/categories/:id") view=CategoryDetails />
                    <Route path=path!("/suppliers") view=SupplierList />
                    <Route path=path!("/suppliers/:id") view=SupplierDetails />
                    <Route path=path!("/inventory") view=InventoryList />
                    <Route path=path!("/inventory/:id") view=InventoryDetails />
                </Routes>
            </Shell>
        </Router>
    }
}
