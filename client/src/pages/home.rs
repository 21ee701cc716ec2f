//! Landing page: hero, stats, competencies, testimonial and a short contact card.

use forms::ContactVariant;
use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::content::company::{ADDRESS, COMPETENCIES, EMAIL, EMAIL_HREF, HOME_STATS, MAP_WIDGET_URL, PHONE_DISPLAY, PHONE_HREF};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-hero">
            <img class="home-hero__backdrop" src="/assets/abouthero-bg.jpg" alt=""/>
            <div class="home-hero__content">
                <h1>"Открываем недра " <span class="accent">"цифровыми"</span> " методами"</h1>
                <p>
                    "От первого измерения на площадке до 3-D модели в браузере: полный цикл геофизики."
                </p>
                <p>"Под эгидой Института тектоники и геофизики имени Ю. А. Косыгина ДВО РАН"</p>
                <div class="home-hero__actions">
                    <a href="/services" class="button button--accent">"Наши услуги"</a>
                    <a href="/about" class="button button--ghost">"О компании"</a>
                </div>
            </div>
        </section>

        <section class="stats">
            {HOME_STATS
                .iter()
                .map(|s| {
                    view! {
                        <div class="stats__item">
                            <span class="stats__value">{format!("{}+", s.value)}</span>
                            <p class="stats__label">{s.label}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>

        <section class="tiles">
            <h2>"Наши " <span class="accent">"компетенции"</span></h2>
            <div class="tiles__grid">
                {COMPETENCIES
                    .iter()
                    .map(|t| {
                        view! {
                            <div class="tile">
                                <span class="tile__icon">{t.icon}</span>
                                <h3>{t.title}</h3>
                                <p>{t.desc}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="testimonial">
            <blockquote>
                "«Партнёрство с Тектоникой позволило нам сократить сроки разведки участка в два раза и на 30% уменьшить буровой метраж»"
                <footer>"АО «Полиметалл»"</footer>
            </blockquote>
        </section>

        <section class="home-contacts">
            <iframe src=MAP_WIDGET_URL width="100%" height="320" title="Офис Тектоники" class="home-contacts__map"></iframe>
            <div>
                <h2>"Контакты"</h2>
                <p><strong>"Адрес: "</strong>{ADDRESS}</p>
                <p><strong>"Телефон: "</strong><a href=PHONE_HREF>{PHONE_DISPLAY}</a></p>
                <p><strong>"E-mail: "</strong><a href=EMAIL_HREF>{EMAIL}</a></p>
                <h3>"Напишите нам"</h3>
                <ContactForm variant=ContactVariant::Short/>
                <a href="/contacts" class="button">"Полные контакты"</a>
            </div>
        </section>
    }
}
