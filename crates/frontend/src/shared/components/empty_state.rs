use leptos::prelude::*;

/// Пустое состояние страницы: «ничего нет» или «не найдено».
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state__title">{title}</p>
            {children.map(|children| view! {
                <div class="empty-state__body">{children()}</div>
            })}
        </div>
    }
}
