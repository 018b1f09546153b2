use leptos::prelude::*;

/// Input component with label, required marker and inline error support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "tel", "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Marks the label with a required asterisk
    #[prop(optional)]
    required: bool,
    /// Inline validation error (reactive); empty means no error
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let error_text = move || error.get().filter(|text| !text.is_empty());
    let group_class = move || {
        if error_text().is_some() {
            "form__group form__group--invalid"
        } else {
            "form__group"
        }
    };

    view! {
        <div class=group_class>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then(|| view! { <span class="form__required">"*"</span> })}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type=input_t
                value=move || value.get()
                placeholder=input_placeholder
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error_text().map(|text| view! { <span class="form__error">{text}</span> })}
        </div>
    }
}
