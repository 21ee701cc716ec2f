use forms::ContactVariant;
use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::section::PageHero;
use crate::content::company::{ADDRESS, EMAIL, EMAIL_HREF, MAP_WIDGET_URL, PHONE_DISPLAY, PHONE_HREF};

#[component]
pub fn ContactsPage() -> impl IntoView {
    view! {
        <PageHero title="Свяжитесь с нами" subtitle="Ответим в течение одного рабочего дня"/>

        <section class="contact-cards">
            <div class="contact-card">
                <span class="contact-card__icon">"📍"</span>
                <h3>"Адрес"</h3>
                <p>{ADDRESS}</p>
            </div>
            <div class="contact-card">
                <span class="contact-card__icon">"📞"</span>
                <h3>"Телефон"</h3>
                <a href=PHONE_HREF>{PHONE_DISPLAY}</a>
            </div>
            <div class="contact-card">
                <span class="contact-card__icon">"✉️"</span>
                <h3>"E-mail"</h3>
                <a href=EMAIL_HREF>{EMAIL}</a>
            </div>
        </section>

        <section class="contacts-main">
            <div>
                <h2>"Форма обратной связи"</h2>
                <ContactForm variant=ContactVariant::Full/>
            </div>
            <iframe src=MAP_WIDGET_URL width="100%" height="420" title="Карта проезда" class="contacts-main__map"></iframe>
        </section>
    }
}
