use leptos::prelude::*;

use crate::components::section::PageHero;
use crate::content::company::{COMPANY_NAME, EMAIL};

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <PageHero title="Политика конфиденциальности"/>
        <article class="legal">
            <p>
                {format!(
                    "{COMPANY_NAME} обрабатывает персональные данные в соответствии с Федеральным законом № 152-ФЗ «О персональных данных»."
                )}
            </p>
            <h2>"Какие данные мы получаем"</h2>
            <p>
                "Имя, контактный e-mail и телефон, а также сведения, указанные в анкете стажёра. \
                 Данные передаются почтовым сервисом и не хранятся на сервере сайта."
            </p>
            <h2>"Цели обработки"</h2>
            <p>"Ответ на обращение и рассмотрение заявки на стажировку."</p>
            <p>{format!("Для отзыва согласия напишите на {EMAIL}.")}</p>
        </article>
    }
}
