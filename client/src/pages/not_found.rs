use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"Страница не найдена"</p>
            <a href="/" class="button">"На главную"</a>
        </section>
    }
}
