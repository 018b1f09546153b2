use crate::shared::components::{EmptyState, ProductCard};
use crate::stores::use_favorites;
use leptos::prelude::*;

/// Избранные товары: карточки в режиме удаления и кнопка «Очистить».
#[component]
pub fn FavoritesPage() -> impl IntoView {
    let favorites = use_favorites();

    view! {
        <div class="page favorites-page">
            <h1 class="page__title">"Избранные товары"</h1>
            <Show
                when=move || !favorites.is_empty()
                fallback=|| view! { <EmptyState title="Тут пока ещё ничего нет..." /> }
            >
                <div class="favorites__header">
                    <button
                        type="button"
                        class="favorites__clear"
                        on:click=move |_| favorites.clear()
                    >
                        "Очистить"
                    </button>
                </div>
                <div class="product-list">
                    {move || {
                        favorites
                            .entries()
                            .into_iter()
                            .map(|entry| {
                                view! { <ProductCard product=entry.into() favorite_mode=true /> }
                            })
                            .collect_view()
                    }}
                </div>
                <a href="/catalog" class="favorites__continue">"Продолжить покупки"</a>
            </Show>
        </div>
    }
}
