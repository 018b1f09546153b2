use leptos::prelude::*;

/// Ряд из пяти звёзд; первые `rating` — закрашенные.
#[component]
pub fn RatingStars(
    #[prop(into)] rating: Signal<u8>,
) -> impl IntoView {
    view! {
        <span class="rating-stars">
            {move || {
                (1..=5u8)
                    .map(|i| {
                        if i <= rating.get() {
                            view! { <span class="star star--filled">"★"</span> }
                        } else {
                            view! { <span class="star">"☆"</span> }
                        }
                    })
                    .collect_view()
            }}
        </span>
    }
}
