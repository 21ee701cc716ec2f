use leptos::prelude::*;

use crate::components::section::{CallToAction, PageHero};
use crate::content::company::{ABOUT_DESCRIPTION, ACTIVITIES, COMPANY_NAME, FACTS, MILESTONES};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageHero title=COMPANY_NAME subtitle=ABOUT_DESCRIPTION/>

        <section class="facts">
            {FACTS
                .iter()
                .map(|f| {
                    view! {
                        <div class="facts__item">
                            <span class="facts__value">{f.value}</span>
                            <p class="facts__label">{f.label}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>

        <section class="about-activities">
            <img src="/assets/photos/season-2024/IMG_6114.jpg" alt="Полевые работы Тектоники"/>
            <div>
                <h2>"Чем мы занимаемся"</h2>
                <ul>{ACTIVITIES.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}</ul>
            </div>
        </section>

        <section class="timeline">
            <h2>"Вехи развития"</h2>
            {MILESTONES
                .iter()
                .map(|m| {
                    view! {
                        <div class="timeline__item">
                            <h3>{m.year}</h3>
                            <p>{m.text}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>

        <CallToAction
            title="Свяжитесь с нами"
            text="Готовы обсудить геофизическую задачу любой сложности: мы ответим в ближайший рабочий день."
            label="Контакты"
        />
    }
}
