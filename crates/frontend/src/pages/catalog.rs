use crate::catalog::Catalog;
use leptos::prelude::*;

/// Каталог: сетка категорий.
#[component]
pub fn CatalogPage() -> impl IntoView {
    view! {
        <div class="page catalog-page">
            <h1 class="page__title">"Каталог"</h1>
            <div class="catalog-grid">
                {Catalog::get()
                    .categories()
                    .iter()
                    .map(|category| {
                        view! {
                            <a href=format!("/category/{}", category.id) class="catalog-grid__item">
                                <img
                                    src=format!("/images/{}", category.image)
                                    alt=category.name.clone()
                                />
                                <span>{category.name.clone()}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
