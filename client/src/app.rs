//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::pages::{
    about::AboutPage, agreement::AgreementPage, careers::CareersPage, contacts::ContactsPage, home::HomePage,
    media::MediaPage, news::ExpeditionLaunchPage, not_found::NotFoundPage, privacy::PrivacyPage,
    projects::ProjectsPage, research::ResearchPage, services::ServicesPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component: every route renders inside [`Layout`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/tektonika.css"/>
        <Title text="ООО «Тектоника»"/>

        <Router>
            <Layout>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("research") view=ResearchPage/>
                    <Route path=StaticSegment("media") view=MediaPage/>
                    <Route path=StaticSegment("careers") view=CareersPage/>
                    <Route path=StaticSegment("agreement") view=AgreementPage/>
                    <Route path=StaticSegment("privacy") view=PrivacyPage/>
                    <Route path=StaticSegment("contacts") view=ContactsPage/>
                    <Route path=(StaticSegment("news"), StaticSegment("expedition-launch")) view=ExpeditionLaunchPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
