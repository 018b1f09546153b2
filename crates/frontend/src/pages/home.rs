use crate::catalog::Catalog;
use crate::shared::components::ProductCard;
use crate::system::telegram::use_telegram;
use leptos::prelude::*;

/// Главная: приветствие, поиск и «Выбор покупателей».
#[component]
pub fn HomePage() -> impl IntoView {
    let telegram = use_telegram();

    view! {
        <div class="page home-page">
            <h1 class="page__title">"Главная"</h1>
            {move || {
                telegram.first_name().map(|name| view! {
                    <p class="home-page__greeting">{format!("Привет, {name}!")}</p>
                })
            }}
            <input type="text" class="search-input" placeholder="Поиск товаров" />
            <p class="section-title">"Выбор покупателей"</p>
            <div class="product-list">
                {Catalog::get()
                    .featured()
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product.clone() /> })
                    .collect_view()}
            </div>
        </div>
    }
}
