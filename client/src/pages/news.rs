use leptos::prelude::*;

use crate::content::company::{Article, EXPEDITION_LAUNCH};

#[component]
pub fn ExpeditionLaunchPage() -> impl IntoView {
    let article: &'static Article = &EXPEDITION_LAUNCH;
    view! { <ArticleView article/> }
}

#[component]
fn ArticleView(article: &'static Article) -> impl IntoView {
    view! {
        <article class="article">
            <div class="article__hero" style=format!("background-image: url('{}')", article.hero)>
                <h1>{article.title}</h1>
            </div>
            <p class="muted">{article.date}</p>
            {article.paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
            <a href="/media" class="button button--ghost">"← Все новости"</a>
        </article>
    }
}
