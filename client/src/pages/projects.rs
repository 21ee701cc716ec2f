//! Project showcase with a year filter and a details modal.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::components::section::{CallToAction, PageHero};
use crate::content::projects::{Project, YearFilter, visible_projects, year_filters};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let filter = RwSignal::new(YearFilter::All);
    let selected = RwSignal::new(None::<&'static Project>);
    let close = Callback::new(move |()| selected.set(None));

    view! {
        <PageHero title="Наши проекты" class="page-hero--map"/>

        <section class="tabs-section">
            <div class="tabs">
                {year_filters()
                    .into_iter()
                    .map(|year| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:is-active=move || filter.get() == year
                                on:click=move |_| filter.set(year)
                            >
                                {year.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="card-grid">
                {move || {
                    visible_projects(filter.get())
                        .into_iter()
                        .map(|p| {
                            view! {
                                <article class="project-card" on:click=move |_| selected.set(Some(p))>
                                    <img src=p.image alt=p.title/>
                                    <div class="project-card__caption">
                                        <h3>{p.title}</h3>
                                        <p>{p.caption()}</p>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>

        {move || {
            selected
                .get()
                .map(|p| {
                    view! {
                        <Modal on_close=close class="project-modal">
                            <img src=p.image alt=p.title class="project-modal__image"/>
                            <h2>{p.title}</h2>
                            <p class="muted">{p.caption()}</p>
                            <p>{p.description}</p>
                        </Modal>
                    }
                })
        }}

        <CallToAction title="Хотите такой же результат?" text="Мы подберём технологию под ваш участок и бюджет."/>
    }
}
