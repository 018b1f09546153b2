use crate::shared::components::rating_stars::RatingStars;
use crate::shared::components::ui::Badge;
use crate::shared::format::format_price;
use crate::stores::{use_cart, use_favorites};
use contracts::cart::CartLine;
use contracts::catalog::Product;
use contracts::favorites::FavoriteEntry;
use leptos::prelude::*;

/// Карточка товара: картинка, рейтинг, наличие, цена и кнопки
/// «в избранное» / «в корзину».
///
/// В режиме избранного сердечко всегда убирает товар из списка.
#[component]
pub fn ProductCard(
    product: Product,
    /// Режим страницы избранного.
    #[prop(optional)]
    favorite_mode: bool,
) -> impl IntoView {
    let cart = use_cart();
    let favorites = use_favorites();

    let price_label = format_price(product.price);
    let stars = product.rating.round() as u8;
    let rating_label = format!("{:.1}", product.rating);
    let href = format!("/product/{}", product.id);
    let image_src = format!("/images/{}", product.image);
    let in_stock = product.in_stock;
    let title = product.title.clone();
    let image_alt = product.title.clone();

    let product = StoredValue::new(product);

    let is_favorite = Signal::derive(move || product.with_value(|p| favorites.is_favorite(&p.id)));

    let toggle_favorite = move |_| {
        product.with_value(|p| {
            if favorite_mode || favorites.is_favorite(&p.id) {
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
        <div class="product-card">
            <a href=href.clone() class="product-card__image-link">
                <img src=image_src alt=image_alt class="product-card__image" />
            </a>
            <div class="product-card__info">
                <h3 class="product-card__title">
                    <a href=href>{title}</a>
                </h3>
                <div class="product-card__meta">
                    <RatingStars rating=stars />
                    <span class="product-card__rating">{rating_label}</span>
                    {if in_stock {
                        view! { <Badge variant="success">"В наличии"</Badge> }.into_any()
                    } else {
                        view! { <Badge variant="error">"Нет в наличии"</Badge> }.into_any()
                    }}
                </div>
                <p class="product-card__price">{"Цена: "}{price_label}</p>
                <div class="product-card__actions">
                    <button
                        type="button"
                        class=move || {
                            if is_favorite.get() {
                                "product-card__fav product-card__fav--active"
                            } else {
                                "product-card__fav"
                            }
                        }
                        title=move || {
                            if favorite_mode || is_favorite.get() {
                                "Убрать из избранного"
                            } else {
                                "В избранное"
                            }
                        }
                        on:click=toggle_favorite
                    >
                        {move || if is_favorite.get() { "♥" } else { "♡" }}
                    </button>
                    <button
                        type="button"
                        class="product-card__add"
                        disabled=!in_stock
                        on:click=add_to_cart
                    >
                        "В корзину"
                    </button>
                </div>
            </div>
        </div>
    }
}
