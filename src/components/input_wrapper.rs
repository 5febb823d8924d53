//! Labeled field wrapper with a required marker and an error line.

use leptos::prelude::*;

/// Wraps a form input with its label, a `*` marker when required, and the
/// field's validation message (if any) underneath.
#[component]
pub fn InputWrapper(
    label: &'static str,
    #[prop(optional)] required: bool,
    #[prop(into)] error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="input-wrapper">
            <label class="input-wrapper__label">
                <p>{label} {required.then_some(" *")}</p>
                {children()}
            </label>
            <Show when=move || error.get().is_some()>
                <p class="input-wrapper__error">{move || error.get()}</p>
            </Show>
        </div>
    }
}
