//! Research page: tabbed document cards with an inline PDF viewer.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::components::section::{CallToAction, PageHero};
use crate::content::research::{ResearchDoc, ResearchTab};

#[component]
pub fn ResearchPage() -> impl IntoView {
    let tab = RwSignal::new(ResearchTab::default());
    let viewing = RwSignal::new(None::<&'static ResearchDoc>);
    let close = Callback::new(move |()| viewing.set(None));

    view! {
        <PageHero
            title="Научная деятельность"
            subtitle="Патенты, публикации и отчёты сотрудников компании"
        />

        <section class="tabs-section">
            <div class="tabs">
                {ResearchTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:is-active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="card-grid">
                {move || {
                    tab.get()
                        .documents()
                        .iter()
                        .map(|doc| {
                            view! {
                                <article class="doc-card">
                                    <h3>{doc.title}</h3>
                                    <p class="muted">{doc.meta_line()}</p>
                                    <p>{doc.summary()}</p>
                                    <div class="doc-card__actions">
                                        <button class="button" on:click=move |_| viewing.set(Some(doc))>
                                            "Просмотр"
                                        </button>
                                        <a href=doc.file download class="button button--ghost">"Скачать"</a>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>

        {move || {
            viewing
                .get()
                .map(|doc| {
                    view! {
                        <Modal on_close=close class="doc-viewer">
                            <h2>{doc.title}</h2>
                            <iframe src=doc.file title=doc.title class="doc-viewer__frame"></iframe>
                        </Modal>
                    }
                })
        }}

        <CallToAction
            title="Сотрудничество с наукой"
            text="Открыты к совместным исследованиям с институтами и университетами."
        />
    }
}
