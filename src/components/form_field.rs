//! Text input bound to one field of a form struct held in a signal.

use leptos::prelude::*;

#[component]
pub fn Field<T>(
    form: RwSignal<T>,
    label: &'static str,
    kind: &'static str,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    view! {
        <input
            class="form-input"
            type=kind
            placeholder=label
            aria-label=label
            prop:value=move || form.with(get)
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| set(f, value));
            }
        />
    }
}
