//! Media center: news, photo gallery with lightbox, documents.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::components::section::PageHero;
use crate::content::media::{DOCUMENTS, MediaTab, Photo, news, photos};

#[component]
pub fn MediaPage() -> impl IntoView {
    let tab = RwSignal::new(MediaTab::default());
    let lightbox = RwSignal::new(None::<Photo>);
    let close = Callback::new(move |()| lightbox.set(None));

    view! {
        <PageHero title="Медиацентр"/>

        <section class="tabs-section">
            <div class="tabs">
                {MediaTab::ALL
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

            {move || match tab.get() {
                MediaTab::News => {
                    view! {
                        <div class="card-grid">
                            {news()
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <article class="news-card">
                                            <p class="muted">{item.date}</p>
                                            <h3>{item.title}</h3>
                                            <p>{item.desc}</p>
                                            <a href=item.link class="news-card__more">"Подробнее →"</a>
                                        </article>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
                MediaTab::Photo => {
                    view! {
                        <div class="photo-grid">
                            {photos()
                                .into_iter()
                                .map(|photo| {
                                    let thumb = photo.clone();
                                    view! {
                                        <img
                                            src=thumb.src
                                            alt=thumb.alt
                                            loading="lazy"
                                            class="photo-grid__item"
                                            on:click=move |_| lightbox.set(Some(photo.clone()))
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
                MediaTab::Docs => {
                    view! {
                        <ul class="doc-list">
                            {DOCUMENTS
                                .iter()
                                .map(|doc| {
                                    view! {
                                        <li>
                                            <a href=doc.url target="_blank" rel="noopener noreferrer">{doc.name}</a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>

        {move || {
            lightbox
                .get()
                .map(|photo| {
                    view! {
                        <Modal on_close=close class="lightbox">
                            <img src=photo.src alt=photo.alt class="lightbox__image"/>
                        </Modal>
                    }
                })
        }}
    }
}
