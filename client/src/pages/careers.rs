//! Careers page: vacancy filters, details modal and the internship intake.

use leptos::prelude::*;

use crate::components::intake_modal::IntakeModal;
use crate::components::modal::Modal;
use crate::components::section::PageHero;
use crate::content::careers::{EMPLOYMENT_TYPES, LOCATIONS, VACANCIES, Vacancy, VacancyFilter};
use crate::content::company::BENEFITS;

#[component]
pub fn CareersPage() -> impl IntoView {
    let filter = RwSignal::new(VacancyFilter::default());
    let selected = RwSignal::new(None::<&'static Vacancy>);
    let show_form = RwSignal::new(false);

    let close_details = Callback::new(move |()| selected.set(None));
    let close_form = Callback::new(move |()| show_form.set(false));

    let open = move |vacancy: &'static Vacancy| {
        if vacancy.is_internship() {
            show_form.set(true);
        } else {
            selected.set(Some(vacancy));
        }
    };

    view! {
        <PageHero
            title="Карьера в Тектонике"
            subtitle="Присоединяйтесь к команде геофизиков, которые работают в поле и в лаборатории"
        />

        <section class="filter-bar">
            <input
                type="search"
                placeholder="Поиск по названию"
                prop:value=move || filter.with(|f| f.search.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.search = value);
                }
            />
            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                filter.update(|f| f.location = value);
            }>
                {LOCATIONS
                    .iter()
                    .map(|loc| {
                        view! {
                            <option value=*loc selected=move || filter.with(|f| f.location == *loc)>
                                {*loc}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                filter.update(|f| f.employment = value);
            }>
                {EMPLOYMENT_TYPES
                    .iter()
                    .map(|kind| {
                        view! {
                            <option value=*kind selected=move || filter.with(|f| f.employment == *kind)>
                                {*kind}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </section>

        <section class="tiles">
            <h2>"Почему у нас"</h2>
            <div class="tiles__grid">
                {BENEFITS
                    .iter()
                    .map(|b| {
                        view! {
                            <div class="tile">
                                <span class="tile__icon">{b.icon}</span>
                                <h3>{b.title}</h3>
                                <p>{b.desc}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="vacancies">
            <h2>"Открытые вакансии"</h2>
            {move || {
                let visible = filter.with(|f| f.apply(VACANCIES));
                if visible.is_empty() {
                    return view! { <p class="muted">"Подходящих вакансий не найдено"</p> }.into_any();
                }
                view! {
                    <div class="card-grid">
                        {visible
                            .into_iter()
                            .map(|v| {
                                view! {
                                    <article class="vacancy-card" on:click=move |_| open(v)>
                                        <h3>{v.title}</h3>
                                        <p class="muted">{format!("{} · {}", v.location, v.employment)}</p>
                                        <p>{v.short}</p>
                                        <button class="button">{v.action_label()}</button>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>

        {move || {
            selected
                .get()
                .map(|v| {
                    view! {
                        <Modal on_close=close_details class="vacancy-modal">
                            <h2>{v.title}</h2>
                            <p class="muted">{format!("{} · {}", v.location, v.employment)}</p>
                            <p class="whitespace-pre-line">{v.description}</p>
                            <a href="/contacts" class="button">"Откликнуться"</a>
                        </Modal>
                    }
                })
        }}

        <Show when=move || show_form.get()>
            <IntakeModal on_close=close_form/>
        </Show>
    }
}
