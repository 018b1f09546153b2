use crate::catalog::Catalog;
use crate::shared::components::{EmptyState, RatingStars};
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use crate::stores::{use_cart, use_favorites};
use contracts::cart::CartLine;
use contracts::catalog::Product;
use contracts::favorites::FavoriteEntry;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

fn history_back() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    }
}

/// Карточка товара целиком: слайдер, рейтинг, характеристики, цена,
/// кнопка «в корзину» и ссылки на отзывы и Telegram-канал.
#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    view! {
        <div class="page product-page">
            {move || {
                let id = product_id.get();
                match Catalog::get().product_by_id(&id) {
                    None => view! { <EmptyState title="Товар не найден" /> }.into_any(),
                    Some(product) => view! { <ProductDetails product=product.clone() /> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn ProductDetails(product: Product) -> impl IntoView {
    let cart = use_cart();
    let favorites = use_favorites();

    let price_label = format_price(product.price);
    let stars = product.rating.round() as u8;
    let rating_label = format!("{:.1}", product.rating);
    let reviews_href = format!("/product/{}/reviews", product.id);
    let image_src = format!("/images/{}", product.image);
    let image_alt = product.title.clone();
    let title = product.title.clone();
    let in_stock = product.in_stock;

    let product = StoredValue::new(product);

    let is_favorite = Signal::derive(move || product.with_value(|p| favorites.is_favorite(&p.id)));

    let toggle_favorite = move |_| {
        product.with_value(|p| {
            if favorites.is_favorite(&p.id) {
                favorites.remove(&p.id);
            } else {
                favorites.add(FavoriteEntry::from_product(p));
            }
        });
    };

    let add_to_cart = move |_| {
        product.with_value(|p| cart.add(CartLine::from_product(p)));
    };

    view! {
        <div class="product-details">
            <div class="product-details__header">
                <button type="button" class="back-btn" on:click=move |_| history_back()>
                    {icon("back")}
                </button>
                <span class="product-details__shop">"Магазин"</span>
                <a href="/" class="close-btn">{icon("close")}</a>
            </div>
            <div class="product-details__slider">
                <img src=image_src alt=image_alt class="product-details__image" />
                <div class="product-details__dots">
                    <span class="dot dot--active"></span>
                    <span class="dot"></span>
                    <span class="dot"></span>
                    <span class="dot"></span>
                </div>
            </div>
            <div class="product-details__title">{title}</div>
            <div class="product-details__rating-row">
                <RatingStars rating=stars />
                <span class="product-details__rating-value">{rating_label}</span>
                <a href=reviews_href class="product-details__reviews-link">"Отзывы"</a>
                <button
                    type="button"
                    class=move || {
                        if is_favorite.get() {
                            "product-details__fav product-details__fav--active"
                        } else {
                            "product-details__fav"
                        }
                    }
                    title=move || {
                        if is_favorite.get() { "Убрать из избранного" } else { "В избранное" }
                    }
                    on:click=toggle_favorite
                >
                    {move || if is_favorite.get() { "♥" } else { "♡" }}
                </button>
            </div>
            // Характеристики в каталоге пока не заполняются.
            <div class="product-details__specs">
                <b>"Характеристики"</b>
                <ul>
                    <li>"Тип — ..."</li>
                    <li>"Модель — ..."</li>
                    <li>"Размеры — ..."</li>
                    <li>"Разрешение — ..."</li>
                    <li>"Процессор — ..."</li>
                </ul>
            </div>
            <div class="product-details__description">"Описание товара..."</div>
            <div class="product-details__buy">
                <div class="product-details__price">
                    <span>"Цена: "</span>
                    <span class="product-details__price-value">{price_label}</span>
                </div>
                <button
                    type="button"
                    class="product-details__add"
                    disabled=!in_stock
                    on:click=add_to_cart
                >
                    "Добавить в корзину"
                </button>
            </div>
            <div class="product-details__stock">
                {if in_stock {
                    view! {
                        <span class="stock stock--in">"✔"</span>
                        <span class="stock-text stock-text--in">"В наличии"</span>
                    }
                        .into_any()
                } else {
                    view! {
                        <span class="stock stock--out">"✖"</span>
                        <span class="stock-text stock-text--out">"Нет в наличии"</span>
                    }
                        .into_any()
                }}
            </div>
            <div class="product-details__tg">
                <a
                    href="https://t.me/your_channel"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="product-details__tg-link"
                >
                    "Суперцены на всю технику в нашем Tg-канале!"
                </a>
                <div class="product-details__tg-note">
                    "* Предложение действует в случае подписки на канал"
                </div>
            </div>
        </div>
    }
}
