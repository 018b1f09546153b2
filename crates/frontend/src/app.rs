use crate::routes::AppRoutes;
use crate::stores::{CartStore, FavoritesStore};
use crate::system::telegram::{bridge, TelegramContext};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Единственные на всё приложение владельцы корзины, избранного и
    // профиля пользователя. Страницы получают их только через контекст.
    let cart = CartStore::new();
    let favorites = FavoritesStore::new();
    let telegram = TelegramContext::new();
    provide_context(cart);
    provide_context(favorites);
    provide_context(telegram);

    // Стартовые сигналы хосту и чтение профиля. Вне Telegram моста нет —
    // покупатель остаётся анонимным, витрина работает как обычно.
    match bridge::init() {
        Some(user) => {
            log::info!("host bridge: user '{}'", user.first_name);
            telegram.user.set(Some(user));
        }
        None => log::debug!("host bridge: not available, staying anonymous"),
    }

    view! {
        <AppRoutes />
    }
}
