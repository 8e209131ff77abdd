use crate::shared::icons::icon;
use leptos::prelude::*;

/// PageHeader component - заголовок страницы списка или карточки
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Имя иконки из `icon()`
    #[prop(optional, into)]
    icon_name: Option<String>,

    /// Кнопки действий справа, если есть
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {icon_name.map(|name| view! {
                    <div class="page-header__icon">{icon(&name)}</div>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            {children.map(|children| view! {
                <div class="page-header__actions">{children()}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_builds_without_actions() {
        let _props = PageHeaderProps::builder()
            .title("Dashboard")
            .subtitle("Overview of your product inventory system.".to_string())
            .icon_name("dashboard")
            .build();
    }
}
