//! Layout shell wrapped around every routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the skip link, header, `<main id="main-content">` and footer, and
//! owns two window behaviors: reset scroll to the top whenever the path
//! changes, and show the back-to-top button once the page is scrolled past
//! [`BACK_TO_TOP_THRESHOLD`](crate::util::scroll::BACK_TO_TOP_THRESHOLD).

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::util::scroll::{ScrollMode, scroll_to_top};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let location = use_location();
    let show_top = RwSignal::new(false);

    Effect::new(move || {
        location.pathname.track();
        scroll_to_top(ScrollMode::Instant);
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll::{past_back_to_top_threshold, scroll_y};

        show_top.set(past_back_to_top_threshold(scroll_y()));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            show_top.set(past_back_to_top_threshold(scroll_y()));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <a href="#main-content" class="skip-link">"Перейти к содержимому"</a>
        <Header/>
        <main id="main-content" class="site-main">{children()}</main>
        <Footer/>
        <Show when=move || show_top.get()>
            <button
                class="back-to-top"
                aria-label="Наверх"
                on:click=move |_| scroll_to_top(ScrollMode::Smooth)
            >
                "↑"
            </button>
        </Show>
    }
}
