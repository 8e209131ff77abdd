use leptos::prelude::*;

/// Строка карточки записи: подпись и значение
#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

impl DetailField {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Список "подпись: значение" для страниц просмотра записи (только чтение)
#[component]
pub fn RecordDetails(fields: Vec<DetailField>) -> impl IntoView {
    view! {
        <dl class="record-details">
            {fields
                .into_iter()
                .map(|f| view! {
                    <div class="record-details__row">
                        <dt class="record-details__label">{f.label}</dt>
                        <dd class="record-details__value">{f.value}</dd>
                    </div>
                })
                .collect_view()}
        </dl>
    }
}
