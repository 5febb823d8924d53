//! The create-voyage form: option lookups, validation, and submission.
//!
//! The vessel and unit-type selectors are populated from reference-data
//! reads; the form renders a loading indicator until both have resolved (no
//! partial render). Submission validates the full draft synchronously,
//! blocks while any field fails, and posts the normalized payload. Success
//! clears the draft and closes the panel; failure keeps the draft intact so
//! the user can retry without re-entering data.

use leptos::prelude::*;

use crate::components::input_wrapper::InputWrapper;
use crate::net::api;
use crate::net::types::{UnitType, VesselOption};
use crate::state::cache::{QueryCache, QueryKey};
use crate::state::form::{FieldErrors, VoyageDraft};
use crate::state::mutations;
use crate::state::toast::ToastState;

/// Create-voyage form, rendered inside the sheet on the voyages page.
/// `on_close` closes the sheet; it runs only after a successful create.
#[component]
pub fn VoyageForm(on_close: Callback<()>) -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let draft = RwSignal::new(VoyageDraft::default());
    let errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);

    // Reference-data resources, keyed on their cache epochs so an
    // invalidation refetches them. Neither is invalidated by this app's
    // writes today, but the wiring matches the voyage list's.
    let vessels_epoch = Memo::new(move |_| cache.get().epoch(QueryKey::Vessels));
    let unit_types_epoch = Memo::new(move |_| cache.get().epoch(QueryKey::UnitTypes));
    let vessels = LocalResource::new(move || {
        vessels_epoch.track();
        api::fetch_vessels()
    });
    let unit_types = LocalResource::new(move || {
        unit_types_epoch.track();
        api::fetch_unit_types()
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Drop duplicate submissions while a create is in flight.
        if submitting.get() {
            return;
        }
        let (Some(Ok(vessel_list)), Some(Ok(unit_type_list))) =
            (vessels.get(), unit_types.get())
        else {
            return;
        };

        match draft.get().validate(&vessel_list, &unit_type_list) {
            Err(field_errors) => errors.set(field_errors),
            Ok(payload) => {
                errors.set(FieldErrors::default());
                submitting.set(true);

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match api::create_voyage(&payload).await {
                        Ok(()) => {
                            cache.update(|c| {
                                draft.update(|d| {
                                    toast.update(|t| mutations::on_create_success(c, d, t));
                                });
                            });
                            on_close.run(());
                        }
                        Err(_) => toast.update(|t| mutations::on_create_failure(t)),
                    }
                    submitting.set(false);
                });

                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = payload;
                    submitting.set(false);
                }
            }
        }
    };

    // Replace the unit-type selection wholesale with whatever the
    // multi-select currently has highlighted.
    let on_unit_types_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(select) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            else {
                return;
            };
            let options = select.selected_options();
            let mut selected = Vec::new();
            for index in 0..options.length() {
                if let Some(option) = options
                    .item(index)
                    .and_then(|o| o.dyn_into::<web_sys::HtmlOptionElement>().ok())
                {
                    selected.push(option.value());
                }
            }
            draft.update(|d| d.unit_types = selected);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <Suspense fallback=move || view! { <p class="voyage-form__loading">"Loading..."</p> }>
            {move || {
                vessels
                    .get()
                    .zip(unit_types.get())
                    .map(|lists| match lists {
                        (Ok(vessel_list), Ok(unit_type_list)) => {
                            view! {
                                <form class="voyage-form" on:submit=submit>
                                    <InputWrapper
                                        label="Departure"
                                        required=true
                                        error=Signal::derive(move || errors.get().departure)
                                    >
                                        <input
                                            type="datetime-local"
                                            prop:value=move || draft.get().departure
                                            on:input=move |ev| {
                                                draft.update(|d| d.departure = event_target_value(&ev));
                                            }
                                        />
                                    </InputWrapper>
                                    <InputWrapper
                                        label="Arrival"
                                        required=true
                                        error=Signal::derive(move || errors.get().arrival)
                                    >
                                        <input
                                            type="datetime-local"
                                            prop:value=move || draft.get().arrival
                                            on:input=move |ev| {
                                                draft.update(|d| d.arrival = event_target_value(&ev));
                                            }
                                        />
                                    </InputWrapper>
                                    <InputWrapper
                                        label="Port of Loading"
                                        required=true
                                        error=Signal::derive(move || errors.get().port_of_loading)
                                    >
                                        <input
                                            type="text"
                                            prop:value=move || draft.get().port_of_loading
                                            on:input=move |ev| {
                                                draft.update(|d| d.port_of_loading = event_target_value(&ev));
                                            }
                                        />
                                    </InputWrapper>
                                    <InputWrapper
                                        label="Port of Discharge"
                                        required=true
                                        error=Signal::derive(move || errors.get().port_of_discharge)
                                    >
                                        <input
                                            type="text"
                                            prop:value=move || draft.get().port_of_discharge
                                            on:input=move |ev| {
                                                draft.update(|d| d.port_of_discharge = event_target_value(&ev));
                                            }
                                        />
                                    </InputWrapper>
                                    <InputWrapper
                                        label="Vessel"
                                        required=true
                                        error=Signal::derive(move || errors.get().vessel)
                                    >
                                        <VesselSelect vessels=vessel_list draft=draft/>
                                    </InputWrapper>
                                    <InputWrapper
                                        label="Unit Types"
                                        required=true
                                        error=Signal::derive(move || errors.get().unit_types)
                                    >
                                        <UnitTypeSelect
                                            unit_types=unit_type_list
                                            draft=draft
                                            on_change=on_unit_types_change
                                        />
                                    </InputWrapper>
                                    <button
                                        class="btn btn--primary"
                                        type="submit"
                                        disabled=move || submitting.get()
                                    >
                                        {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                                    </button>
                                </form>
                            }
                                .into_any()
                        }
                        _ => {
                            view! {
                                <p class="voyage-form__error">
                                    "Failed to load vessels and unit types."
                                </p>
                            }
                                .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}

/// Single-choice vessel selector; selecting an option sets the draft's
/// vessel id.
#[component]
fn VesselSelect(vessels: Vec<VesselOption>, draft: RwSignal<VoyageDraft>) -> impl IntoView {
    view! {
        <select
            class="voyage-form__select"
            prop:value=move || draft.get().vessel
            on:change=move |ev| draft.update(|d| d.vessel = event_target_value(&ev))
        >
            <option value="" disabled=true>
                "Select a vessel"
            </option>
            {vessels
                .iter()
                .map(|vessel| {
                    view! { <option value=vessel.value.clone()>{vessel.label.clone()}</option> }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}

/// Multi-choice unit-type selector; each change replaces the draft's
/// selection wholesale.
#[component]
fn UnitTypeSelect(
    unit_types: Vec<UnitType>,
    draft: RwSignal<VoyageDraft>,
    on_change: impl Fn(leptos::ev::Event) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select class="voyage-form__select" multiple=true on:change=on_change>
            {unit_types
                .iter()
                .map(|unit_type| {
                    let id = unit_type.id.clone();
                    view! {
                        <option
                            value=id.clone()
                            prop:selected=move || draft.get().unit_types.contains(&id)
                        >
                            {unit_type.name.clone()}
                        </option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}
