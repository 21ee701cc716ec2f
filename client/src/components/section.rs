//! Page hero banner and call-to-action band used across content pages.

use leptos::prelude::*;

#[component]
pub fn PageHero(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <section class=format!("page-hero {class}")>
            <h1 class="page-hero__title">{title}</h1>
            {subtitle.map(|text| view! { <p class="page-hero__subtitle">{text}</p> })}
        </section>
    }
}

#[component]
pub fn CallToAction(
    title: &'static str,
    text: &'static str,
    #[prop(default = "/contacts")] href: &'static str,
    #[prop(default = "Связаться с нами")] label: &'static str,
) -> impl IntoView {
    view! {
        <section class="cta">
            <h2>{title}</h2>
            <p>{text}</p>
            <a href=href class="cta__button">{label}</a>
        </section>
    }
}
