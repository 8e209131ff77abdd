use leptos::prelude::*;

/// CSS класс для варианта бейджа; неизвестный вариант считается "neutral"
pub fn badge_variant_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class =
        move || badge_variant_class(variant.get().as_deref().unwrap_or("neutral"));

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_inventory::aggregate::StockStatus;

    #[test]
    fn test_stock_status_variants_have_classes() {
        assert_eq!(badge_variant_class(StockStatus::Critical.badge_variant()), "badge--error");
        assert_eq!(badge_variant_class(StockStatus::Low.badge_variant()), "badge--warning");
        assert_eq!(badge_variant_class(StockStatus::InStock.badge_variant()), "badge--success");
        assert_eq!(badge_variant_class("whatever"), "badge--neutral");
    }
}
