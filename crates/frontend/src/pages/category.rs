use crate::catalog::Catalog;
use crate::shared::components::{EmptyState, ProductCard};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Страница категории: чипы подкатегорий, фильтры и список товаров.
/// Неизвестная категория — пустое состояние, не ошибка.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let category_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    view! {
        <div class="page category-page">
            {move || {
                let id = category_id.get();
                let catalog = Catalog::get();
                match catalog.category_by_id(&id) {
                    None => view! { <EmptyState title="Категория не найдена" /> }.into_any(),
                    Some(category) => {
                        view! {
                            <h1 class="page__title">{category.name.clone()}</h1>
                            <div class="subcategory-scroll">
                                {catalog
                                    .subcategories_of(&id)
                                    .iter()
                                    .map(|sub| {
                                        view! {
                                            <button type="button" class="subcategory-chip">
                                                <img
                                                    src=format!("/images/{}", sub.image)
                                                    alt=sub.name.clone()
                                                />
                                                <span>{sub.name.clone()}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            // Фильтр и сортировка пока чисто витринные.
                            <div class="category-filters">
                                <button type="button" class="filter-btn">"Фильтр"</button>
                                <select class="sort-select">
                                    <option>"По возрастанию цены"</option>
                                    <option>"По убыванию цены"</option>
                                    <option>"По рейтингу"</option>
                                </select>
                            </div>
                            <div class="product-list">
                                {catalog
                                    .products_in_category(&id)
                                    .iter()
                                    .map(|product| view! { <ProductCard product=product.clone() /> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
