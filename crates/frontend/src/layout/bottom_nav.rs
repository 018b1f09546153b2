use crate::shared::icons::icon;
use crate::stores::use_cart;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

struct NavItem {
    path: &'static str,
    icon: &'static str,
}

static NAV_ITEMS: [NavItem; 4] = [
    NavItem { path: "/", icon: "home" },
    NavItem { path: "/catalog", icon: "catalog" },
    NavItem { path: "/basket", icon: "cart" },
    NavItem { path: "/favorites", icon: "heart" },
];

/// Нижняя навигация мини-приложения. На вкладке корзины — бейдж с
/// количеством товаров.
#[component]
pub fn BottomNav() -> impl IntoView {
    let pathname = use_location().pathname;
    let cart = use_cart();

    view! {
        <nav class="bottom-nav">
            {NAV_ITEMS
                .iter()
                .map(|item| {
                    let path = item.path;
                    let is_active = move || pathname.get() == path;
                    let badge = (path == "/basket").then(|| {
                        view! {
                            <Show when={move || cart.total_count() > 0}>
                                <span class="bottom-nav__badge">{move || cart.total_count()}</span>
                            </Show>
                        }
                    });
                    view! {
                        <a
                            href=path
                            class=move || {
                                if is_active() {
                                    "bottom-nav__item bottom-nav__item--active"
                                } else {
                                    "bottom-nav__item"
                                }
                            }
                        >
                            {icon(item.icon)}
                            {badge}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
