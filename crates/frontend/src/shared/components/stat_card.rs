use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка показателя на дашборде.
///
/// `value = None` означает, что данные ещё загружаются.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Подсветка карточки как предупреждения
    #[prop(optional)]
    warning: bool,
) -> impl IntoView {
    let card_class = if warning {
        "stat-card stat-card--warning"
    } else {
        "stat-card"
    };

    let formatted = move || value.get().unwrap_or_else(|| "\u{2014}".to_string());

    view! {
        <div class=card_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}
