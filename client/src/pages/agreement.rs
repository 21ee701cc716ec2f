use leptos::prelude::*;

use crate::components::section::PageHero;
use crate::content::company::{COMPANY_NAME, EMAIL};

#[component]
pub fn AgreementPage() -> impl IntoView {
    view! {
        <PageHero title="Пользовательское соглашение"/>
        <article class="legal">
            <p>
                {format!(
                    "Настоящее соглашение регулирует использование сайта {COMPANY_NAME}. Пользуясь сайтом, вы принимаете его условия."
                )}
            </p>
            <h2>"Материалы сайта"</h2>
            <p>
                "Тексты, фотографии и документы, размещённые на сайте, предназначены для ознакомления. \
                 Копирование без согласия правообладателя не допускается."
            </p>
            <h2>"Обратная связь"</h2>
            <p>
                "Отправляя форму, вы подтверждаете достоверность указанных данных и соглашаетесь на их \
                 обработку для ответа на обращение."
            </p>
            <p>{format!("Вопросы по соглашению направляйте на {EMAIL}.")}</p>
        </article>
    }
}
