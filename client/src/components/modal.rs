//! Backdrop + dialog frame shared by every page modal.

use leptos::prelude::*;

/// Closes on backdrop click, the ✕ button, or Escape. Clicks inside the
/// dialog do not reach the backdrop.
#[component]
pub fn Modal(
    on_close: Callback<()>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };
    let dialog_class = if class.is_empty() { "modal".to_owned() } else { format!("modal {class}") };

    view! {
        <div class="modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class=dialog_class
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <button class="modal__close" title="Закрыть" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                {children()}
            </div>
        </div>
    }
}
