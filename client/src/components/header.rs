//! Fixed site header with primary navigation and the mobile menu.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::company::BRAND;

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub to: &'static str,
    pub label: &'static str,
    /// Rendered as an outlined call-to-action instead of a plain link.
    pub is_button: bool,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { to: "/", label: "Главная", is_button: false },
    NavItem { to: "/services", label: "Услуги", is_button: false },
    NavItem { to: "/projects", label: "Проекты", is_button: false },
    NavItem { to: "/about", label: "О нас", is_button: false },
    NavItem { to: "/media", label: "Медиа", is_button: false },
    NavItem { to: "/research", label: "Научная деятельность", is_button: false },
    NavItem { to: "/careers", label: "Карьера", is_button: true },
];

/// Exact path match, ignoring a trailing slash.
#[must_use]
pub fn is_active(pathname: &str, to: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    let current = if trimmed.is_empty() { "/" } else { trimmed };
    current == to
}

fn link_class(base: &str, item: NavItem, active: bool) -> String {
    let mut class = base.to_owned();
    if active {
        class.push_str(" is-active");
    }
    if item.is_button {
        class.push_str(" is-button");
    }
    class
}

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let menu_open = RwSignal::new(false);

    let links = move |base: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let item = *item;
                let class = move || link_class(base, item, is_active(&location.pathname.get(), item.to));
                view! {
                    <a href=item.to class=class on:click=move |_| menu_open.set(false)>
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header">
            <div class="site-header__bar">
                <a href="/" class="site-header__brand">
                    <img src="/assets/logo.png" alt=BRAND class="site-header__logo"/>
                    <span>{BRAND}</span>
                </a>
                <nav class="site-header__nav">{links("site-header__link")}</nav>
                <button
                    class="site-header__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="site-header__mobile">{links("site-header__mobile-link")}</nav>
            </Show>
        </header>
    }
}
