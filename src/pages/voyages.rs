//! Voyage list page: table, create sheet, delete actions, toasts.

use leptos::prelude::*;

use crate::components::toast::Toast;
use crate::components::unit_type_popover::UnitTypePopover;
use crate::components::voyage_form::VoyageForm;
use crate::net::api;
use crate::net::types::Voyage;
use crate::state::cache::{QueryCache, QueryKey};
use crate::state::mutations;
use crate::state::toast::ToastState;
use crate::util::dates;

/// Voyages page — lists voyages in backend order with a create sheet and a
/// per-row delete action.
#[component]
pub fn VoyagesPage() -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    // Voyage list resource, keyed on the list's cache epoch: a successful
    // create or delete bumps the epoch and this refetches.
    let voyages_epoch = Memo::new(move |_| cache.get().epoch(QueryKey::Voyages));
    let voyages = LocalResource::new(move || {
        voyages_epoch.track();
        api::fetch_voyages()
    });

    let sheet_open = RwSignal::new(false);

    // Id of the voyage whose delete is in flight, if any. Its row button is
    // disabled until the request settles; a failure re-enables it so the
    // user can retry (failures surface through the toast only).
    let pending_delete: RwSignal<Option<String>> = RwSignal::new(None);

    let on_delete = move |voyage_id: String| {
        if pending_delete.get().is_some() {
            return;
        }
        pending_delete.set(Some(voyage_id.clone()));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_voyage(&voyage_id).await {
                Ok(()) => cache.update(|c| mutations::on_delete_success(c)),
                Err(_) => toast.update(|t| mutations::on_delete_failure(t)),
            }
            pending_delete.set(None);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = voyage_id;
            pending_delete.set(None);
        }
    };

    view! {
        <div class="voyages-page">
            <button
                class="btn btn--primary voyages-page__create"
                on:click=move |_| sheet_open.set(true)
            >
                "Create Voyage"
            </button>

            <Show when=move || sheet_open.get()>
                <div class="sheet" on:click=move |_| sheet_open.set(false)>
                    <aside class="sheet__content" on:click=move |ev| ev.stop_propagation()>
                        <h2 class="sheet__heading">"Create Voyage"</h2>
                        <VoyageForm on_close=Callback::new(move |()| sheet_open.set(false))/>
                    </aside>
                </div>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading voyages..."</p> }>
                {move || {
                    voyages
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <VoyageTable
                                        voyages=list
                                        pending_delete=pending_delete
                                        on_delete=on_delete
                                    />
                                }
                                    .into_any()
                            }
                            Err(_) => {
                                view! {
                                    <p class="voyages-page__error">"Failed to load voyages."</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Toast/>
        </div>
    }
}

/// The voyage table. Rows render in the order the backend delivered them.
#[component]
fn VoyageTable(
    voyages: Vec<Voyage>,
    pending_delete: RwSignal<Option<String>>,
    on_delete: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <table class="voyages-table">
            <thead>
                <tr>
                    <th>"Departure"</th>
                    <th>"Arrival"</th>
                    <th>"Port of loading"</th>
                    <th>"Port of discharge"</th>
                    <th>"Vessel"</th>
                    <th>"Unit Types"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {voyages
                    .into_iter()
                    .map(|voyage| {
                        let row_id = voyage.id.clone();
                        let delete_id = voyage.id.clone();
                        view! {
                            <tr>
                                <td>{dates::format_table_date(&voyage.scheduled_departure)}</td>
                                <td>{dates::format_table_date(&voyage.scheduled_arrival)}</td>
                                <td>{voyage.port_of_loading.clone()}</td>
                                <td>{voyage.port_of_discharge.clone()}</td>
                                <td>{voyage.vessel.name.clone()}</td>
                                <td>
                                    <UnitTypePopover unit_types=voyage.unit_types.clone()/>
                                </td>
                                <td>
                                    <button
                                        class="btn btn--outline"
                                        disabled=move || {
                                            pending_delete.get().as_deref() == Some(row_id.as_str())
                                        }
                                        on:click=move |_| on_delete(delete_id.clone())
                                    >
                                        "X"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
