use crate::catalog::Catalog;
use crate::shared::components::RatingStars;
use leptos::prelude::*;

/// Отзывы о товаре.
#[component]
pub fn ReviewsPage() -> impl IntoView {
    view! {
        <div class="page reviews-page">
            <h2 class="page__title">"Отзывы"</h2>
            <div class="reviews-list">
                {Catalog::get()
                    .reviews()
                    .iter()
                    .map(|review| {
                        let text = (!review.text.is_empty()).then(|| {
                            let text = review.text.clone();
                            view! { <div class="review-card__text">{text}</div> }
                        });
                        view! {
                            <div class="review-card">
                                <div class="review-card__header">
                                    <span class="review-card__author">{review.author.clone()}</span>
                                    <RatingStars rating=review.rating />
                                </div>
                                {text}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
