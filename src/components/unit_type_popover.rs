//! Unit-type count with an on-demand detail popover.

use leptos::prelude::*;

use crate::net::types::UnitType;

/// Shows the number of unit types on a voyage; clicking it toggles a
/// popover listing each unit type's name and default length.
#[component]
pub fn UnitTypePopover(unit_types: Vec<UnitType>) -> impl IntoView {
    let open = RwSignal::new(false);
    let count = unit_types.len();

    view! {
        <div class="popover">
            <button class="btn btn--link" on:click=move |_| open.update(|o| *o = !*o)>
                {count}
            </button>
            <Show when=move || open.get()>
                <div class="popover__content">
                    <h4 class="popover__heading">"Unit Types:"</h4>
                    <ul>
                        {unit_types
                            .iter()
                            .map(|ut| {
                                view! {
                                    <li class="popover__item">
                                        <p>{ut.name.clone()}</p>
                                        <p class="popover__detail">
                                            {format!("Default Length: {}", ut.default_length)}
                                        </p>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
