use super::state::CheckoutState;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::components::EmptyState;
use crate::shared::format::{
    format_delivery_cost, format_delivery_summary, format_order_total, format_price,
};
use crate::stores::use_cart;
use contracts::checkout::delivery::{delivery_cost, DeliveryOption, DELIVERY_OPTIONS};
use contracts::checkout::pricing::order_total;
use contracts::checkout::validation::{required_fields, FormField};
use contracts::orders::LocalSubmitter;
use leptos::prelude::*;

fn history_back() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    }
}

/// Оформление заказа: способ доставки, форма покупателя, сводка.
///
/// Пустая корзина показывает нулевое состояние без формы; после
/// успешной отправки страница переходит в терминальный экран с номером
/// заказа.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart = use_cart();
    let state = RwSignal::new(CheckoutState::default());

    view! {
        <div class="page checkout-page">
            <div class="checkout__header">
                <button type="button" class="back-btn" on:click=move |_| history_back()>
                    "Назад"
                </button>
                <h1 class="checkout__title">"Оформление заказа"</h1>
                <a href="/" class="close-btn">"✕"</a>
            </div>
            {move || {
                if let Some(order_id) = state.with(|s| s.submitted_order_id()) {
                    view! { <OrderSubmitted order_id /> }.into_any()
                } else if cart.is_empty() {
                    view! {
                        <EmptyState title="Корзина пуста">
                            <a href="/catalog" class="checkout__empty-link">
                                "Перейти в каталог"
                            </a>
                        </EmptyState>
                    }
                        .into_any()
                } else {
                    view! { <OrderForm state /> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn OrderForm(state: RwSignal<CheckoutState>) -> impl IntoView {
    let cart = use_cart();

    let needs_address =
        Signal::derive(move || {
            state.with(|s| required_fields(s.delivery).contains(&FormField::Address))
        });
    let needs_zip = Signal::derive(move || {
        state.with(|s| required_fields(s.delivery).contains(&FormField::Zip))
    });

    let on_submit = move |_| {
        let lines = cart.lines();
        state.update(|s| {
            if let Err(err) = s.submit(&lines, &LocalSubmitter) {
                log::warn!("order rejected: {err}");
            }
        });
    };

    view! {
        <section class="checkout__section">
            <h2 class="checkout__subtitle">"Способ доставки"</h2>
            <div class="checkout__city">"Город"</div>
            <div class="delivery-options">
                {DELIVERY_OPTIONS
                    .iter()
                    .map(|option| view! { <DeliveryOptionRow option state /> })
                    .collect_view()}
            </div>
        </section>

        <section class="checkout__section">
            <h2 class="checkout__subtitle">"Покупатель"</h2>
            <FormInput state field=FormField::Name required=true />
            <FormInput state field=FormField::Email />
            <FormInput state field=FormField::Phone input_type="tel" required=true />
        </section>

        <section class="checkout__section">
            <Show when=move || needs_address.get()>
                <FormInput state field=FormField::Address required=true />
            </Show>
            <Show when=move || needs_zip.get()>
                <FormInput state field=FormField::Zip required=true />
            </Show>
            <Textarea
                label="Комментарий к заказу:"
                value=Signal::derive(move || state.with(|s| s.form.comment.clone()))
                on_input=Callback::new(move |value| {
                    state.update(|s| s.set_field(FormField::Comment, value))
                })
                placeholder="Введите комментарий..."
            />
        </section>

        <section class="checkout__summary">
            <div class="checkout__summary-row">
                <span>"Товары:"</span>
                <span>{move || format_price(cart.subtotal())}</span>
            </div>
            <div class="checkout__summary-row">
                <span>"Доставка:"</span>
                <span>
                    {move || {
                        state.with(|s| format_delivery_summary(delivery_cost(s.delivery)))
                    }}
                </span>
            </div>
            <div class="checkout__summary-row">
                <span>"Доставка:"</span>
                <span>{move || state.with(|s| DeliveryOption::for_id(s.delivery).label)}</span>
            </div>
            <div class="checkout__summary-row checkout__summary-row--total">
                <span>"Итого:"</span>
                <span>
                    {move || {
                        state.with(|s| format_order_total(&order_total(&cart.lines(), s.delivery)))
                    }}
                </span>
            </div>
            <div class="checkout__summary-row">
                <span>"Оплата:"</span>
                <span>"Наличными"</span>
            </div>
            <Button class="checkout__order-btn" on_click=Callback::new(on_submit)>
                "Оформить заказ"
            </Button>
            <div class="checkout__consent">
                "Нажимая на кнопку, вы соглашаетесь на "
                <a href="#" class="checkout__consent-link">"обработку персональных данных"</a>
                " и с "
                <a href="#" class="checkout__consent-link">"публичной офертой"</a>
            </div>
        </section>
    }
}

/// Поле формы, привязанное к состоянию оформления.
#[component]
fn FormInput(
    state: RwSignal<CheckoutState>,
    field: FormField,
    #[prop(optional, into)] input_type: MaybeProp<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let value = Signal::derive(move || state.with(|s| s.form.field(field).to_string()));
    let on_input = Callback::new(move |value| state.update(|s| s.set_field(field, value)));
    let error = Signal::derive(move || {
        state.with(|s| s.field_error(field).unwrap_or_default().to_string())
    });

    view! {
        <Input
            label=field.label()
            value
            on_input
            input_type
            required=required
            error
        />
    }
}

#[component]
fn DeliveryOptionRow(
    option: &'static DeliveryOption,
    state: RwSignal<CheckoutState>,
) -> impl IntoView {
    let id = option.id;
    let selected = move || state.with(|s| s.delivery == id);

    view! {
        <label class=move || {
            if selected() {
                "delivery-option delivery-option--selected"
            } else {
                "delivery-option"
            }
        }>
            <input
                type="radio"
                name="delivery"
                value=id.as_str()
                prop:checked=selected
                on:change=move |_| state.update(|s| s.select_delivery(id))
            />
            <div class="delivery-option__body">
                <div class="delivery-option__label">{option.label}</div>
                <div class="delivery-option__price">{format_delivery_cost(delivery_cost(id))}</div>
                {option.note.map(|note| view! { <div class="delivery-option__note">{note}</div> })}
            </div>
        </label>
    }
}

/// Терминальный экран: заказ принят, показываем номер.
#[component]
fn OrderSubmitted(order_id: String) -> impl IntoView {
    view! {
        <div class="checkout__done">
            <p class="checkout__done-title">"Заказ оформлен"</p>
            <p class="checkout__done-id">{format!("Номер заказа: {order_id}")}</p>
            <a href="/catalog" class="checkout__done-link">"Продолжить покупки"</a>
        </div>
    }
}
