//! Services page with category tabs.

use leptos::prelude::*;

use crate::components::section::{CallToAction, PageHero};
use crate::content::services::{CATEGORIES, category};

#[component]
pub fn ServicesPage() -> impl IntoView {
    let active = RwSignal::new(CATEGORIES[0].slug);

    view! {
        <PageHero
            title="Услуги ООО «Тектоника»"
            subtitle="От полевых измерений до 3-D интерпретации: полный геофизический цикл"
        />

        <section class="tabs-section">
            <div class="tabs">
                {CATEGORIES
                    .iter()
                    .map(|cat| {
                        let slug = cat.slug;
                        view! {
                            <button
                                class="tabs__tab"
                                class:is-active=move || active.get() == slug
                                on:click=move |_| active.set(slug)
                            >
                                {cat.title}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="service-list">
                {move || {
                    category(active.get())
                        .services
                        .iter()
                        .map(|srv| {
                            view! {
                                <details class="service-list__item">
                                    <summary>{srv.name}</summary>
                                    <p>{srv.desc}</p>
                                </details>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>

        <CallToAction
            title="Нужна консультация?"
            text="Отправьте заявку, и мы подготовим техническое предложение в течение 24 часов."
        />
    }
}
