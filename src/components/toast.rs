//! Transient toast notification for mutation outcomes.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Renders the current toast, if any, with a close button.
///
/// In the browser the toast also auto-dismisses after five seconds; the
/// `seq` check keeps a timer started for an earlier toast from clearing a
/// newer one.
#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    Effect::new(move || {
        let state = toast.get();
        if state.is_visible() {
            #[cfg(feature = "hydrate")]
            {
                let seq = state.seq;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(5_000).await;
                    toast.update(|t| {
                        if t.seq == seq {
                            t.dismiss();
                        }
                    });
                });
            }
        }
    });

    let class = move || {
        if toast.get().is_error {
            "toast toast--error"
        } else {
            "toast toast--success"
        }
    };
    let title = move || if toast.get().is_error { "Failed:" } else { "Succeeded" };

    view! {
        <Show when=move || toast.get().is_visible()>
            <div class=class role="status">
                <p class="toast__title">{title}</p>
                <p class="toast__message">{move || toast.get().message}</p>
                <button
                    class="toast__close"
                    aria-label="Dismiss notification"
                    on:click=move |_| toast.update(ToastState::dismiss)
                >
                    "X"
                </button>
            </div>
        </Show>
    }
}
