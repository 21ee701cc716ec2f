//! Site footer: company blurb, quick links, contacts and copyright.

use leptos::prelude::*;

use crate::content::company::{ADDRESS, COMPANY_NAME, EMAIL, EMAIL_HREF, FOOTER_BLURB, PHONE_DISPLAY, PHONE_HREF};
use crate::util::clock::{copyright_line, current_year};

const QUICK_LINKS: &[(&str, &str)] = &[
    ("/", "Главная"),
    ("/services", "Услуги"),
    ("/projects", "Проекты"),
    ("/careers", "Карьера"),
    ("/contacts", "Контакты"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div>
                    <h4>{COMPANY_NAME}</h4>
                    <p>{FOOTER_BLURB}</p>
                </div>
                <div>
                    <h4>"Навигация"</h4>
                    <ul>
                        {QUICK_LINKS
                            .iter()
                            .map(|(to, label)| view! { <li><a href=*to>{*label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4>"Контакты"</h4>
                    <ul class="site-footer__contacts">
                        <li>{ADDRESS}</li>
                        <li><a href=PHONE_HREF>{PHONE_DISPLAY}</a></li>
                        <li><a href=EMAIL_HREF>{EMAIL}</a></li>
                    </ul>
                </div>
            </div>
            <div class="site-footer__copyright">{copyright_line(current_year())}</div>
            <nav class="site-footer__legal">
                <a href="/agreement">"Пользовательское соглашение"</a>
                <a href="/privacy">"Политика конфиденциальности"</a>
            </nav>
        </footer>
    }
}
