//! CardAnimated: обёртка над Thaw Card с анимацией появления.
//!
//! Анимация определена в `styles.css` (`@keyframes card-appear`).
//!
//! # Пример
//! ```rust,ignore
//! <CardAnimated delay_ms=0>   // карточка 1
//! <CardAnimated delay_ms=80>  // карточка 2
//! <CardAnimated style="max-width: 400px;" delay_ms=160>
//! ```

use leptos::prelude::*;
use thaw::Card;

fn animation_style(delay_ms: u32, style: &str) -> String {
    let base = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    if style.is_empty() {
        base
    } else {
        format!("{} {}", base, style)
    }
}

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительные inline-стили (добавляются после стилей анимации).
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card attr:style=animation_style(delay_ms, &style)>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_style() {
        assert_eq!(
            animation_style(80, ""),
            "animation: card-appear 0.28s ease-out 80ms both;"
        );
        assert!(animation_style(0, "max-width: 400px;").ends_with(" max-width: 400px;"));
    }
}
