use crate::layout::BottomNav;
use crate::pages::basket::BasketPage;
use crate::pages::catalog::CatalogPage;
use crate::pages::category::CategoryPage;
use crate::pages::checkout::CheckoutPage;
use crate::pages::favorites::FavoritesPage;
use crate::pages::home::HomePage;
use crate::pages::product::ProductPage;
use crate::pages::reviews::ReviewsPage;
use crate::shared::components::EmptyState;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Маршруты витрины. Страницы рендерятся над нижней навигацией.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <div class="app-shell">
                <main class="app-shell__content">
                    <Routes fallback=|| view! { <EmptyState title="Страница не найдена" /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/catalog") view=CatalogPage />
                        <Route path=path!("/category/:id") view=CategoryPage />
                        <Route path=path!("/basket") view=BasketPage />
                        <Route path=path!("/favorites") view=FavoritesPage />
                        <Route path=path!("/product/:id") view=ProductPage />
                        <Route path=path!("/product/:id/reviews") view=ReviewsPage />
                        <Route path=path!("/checkout") view=CheckoutPage />
                    </Routes>
                </main>
                <BottomNav />
            </div>
        </Router>
    }
}
