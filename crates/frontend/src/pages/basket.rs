use crate::shared::components::EmptyState;
use crate::shared::format::format_price;
use crate::stores::use_cart;
use contracts::cart::CartLine;
use leptos::prelude::*;

/// Корзина: список позиций и сумма, либо пустое состояние.
#[component]
pub fn BasketPage() -> impl IntoView {
    let cart = use_cart();

    view! {
        <div class="page basket-page">
            <h1 class="page__title">"Корзина"</h1>
            <Show
                when=move || !cart.is_empty()
                fallback=|| {
                    view! {
                        <EmptyState title="Ваша корзина пуста">
                            <a href="/" class="basket__empty-link">"Нажмите здесь"</a>
                            ", чтобы продолжить покупки"
                        </EmptyState>
                    }
                }
            >
                <div class="basket__lines">
                    {move || {
                        cart.lines()
                            .into_iter()
                            .map(|line| view! { <BasketLine line /> })
                            .collect_view()
                    }}
                </div>
                <div class="basket__summary">
                    <div class="basket__summary-row">
                        <span>"Итого"</span>
                        <span>{move || format_price(cart.subtotal())}</span>
                    </div>
                    <input class="basket__promo" placeholder="Есть промокод?" />
                    <a href="/checkout" class="basket__checkout">"Перейти к оформлению"</a>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn BasketLine(line: CartLine) -> impl IntoView {
    view! {
        <div class="basket-line">
            <img
                src=format!("/images/{}", line.image)
                alt=line.title.clone()
                class="basket-line__image"
            />
            <div class="basket-line__info">
                <div class="basket-line__title">{line.title.clone()}</div>
                <div class="basket-line__controls">
                    // TODO: включить, когда у корзины появится операция
                    // уменьшения/удаления позиции — сейчас её нет.
                    <button type="button" disabled>"-"</button>
                    <span>{line.count}</span>
                    <button type="button" disabled>"+"</button>
                </div>
            </div>
            <div class="basket-line__price">{format_price(line.line_total())}</div>
        </div>
    }
}
