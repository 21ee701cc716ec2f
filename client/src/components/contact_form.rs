//! Contact form bound to [`forms::ContactForm`].
//!
//! The full variant (with subject) sits on the contacts page; the short one
//! on the home page. The status banner stays until the next submit.

use forms::{ContactError, ContactField, ContactStatus, ContactVariant};
use leptos::prelude::*;

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

pub(crate) struct FieldMeta {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
}

pub(crate) fn field_meta(field: ContactField) -> FieldMeta {
    match field {
        ContactField::Name => FieldMeta { label: "Ваше имя", placeholder: "Иван Иванов", input_type: "text" },
        ContactField::Email => FieldMeta { label: "E-mail", placeholder: "example@mail.com", input_type: "email" },
        ContactField::Subject => {
            FieldMeta { label: "Тема сообщения", placeholder: "Вопрос по проекту", input_type: "text" }
        }
        ContactField::Message => {
            FieldMeta { label: "Сообщение", placeholder: "Опишите ваш запрос", input_type: "textarea" }
        }
    }
}

/// Banner text for the current status; `None` while editing or sending.
pub(crate) fn status_banner(status: &ContactStatus) -> Option<(&'static str, String)> {
    match status {
        ContactStatus::Sent => Some(("form-banner form-banner--ok", "Спасибо! Ваше сообщение отправлено.".to_owned())),
        ContactStatus::Failed(message) => Some(("form-banner form-banner--error", format!("Ошибка отправки: {message}"))),
        ContactStatus::Editing | ContactStatus::Submitting => None,
    }
}

/// Validation notice shown above the fields.
pub(crate) fn describe_error(err: &ContactError) -> String {
    match err {
        ContactError::MissingFields(missing) => {
            let labels = missing.iter().map(|f| field_meta(*f).label).collect::<Vec<_>>();
            format!("Заполните обязательные поля: {}", labels.join(", "))
        }
        ContactError::InvalidEmail => "Укажите корректный e-mail".to_owned(),
        ContactError::SubmissionInFlight => "Сообщение уже отправляется".to_owned(),
        ContactError::NoSubjectField | ContactError::NotSubmitting => "Не удалось отправить форму".to_owned(),
        ContactError::Relay(e) => format!("Ошибка отправки: {e}"),
    }
}

#[component]
pub fn ContactForm(variant: ContactVariant) -> impl IntoView {
    let form = RwSignal::new(forms::ContactForm::new(variant));
    let notice = RwSignal::new(None::<String>);
    let busy = move || form.with(forms::ContactForm::is_submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(started) = form.try_update(forms::ContactForm::begin_submit) else {
            return;
        };
        match started {
            Ok(message) => {
                notice.set(None);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let outcome = crate::net::api::submit_contact(&message).await;
                    // Dropped silently if the form was unmounted meanwhile.
                    let _ = form.try_update(|f| f.finish_submit(outcome));
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = message;
            }
            Err(e) => notice.set(Some(describe_error(&e))),
        }
    };

    let fields = forms::ContactMessage::empty(variant)
        .fields()
        .into_iter()
        .map(|field| {
            let meta = field_meta(field);
            let id = format!("contact-{}", field.key());
            let value = move || form.with(|f| f.value(field).to_owned());
            let on_input = move |ev: leptos::ev::Event| {
                let text = event_target_value(&ev);
                form.update(|f| {
                    let _ = f.set_field(field, text);
                });
            };
            let input = if meta.input_type == "textarea" {
                view! {
                    <textarea
                        id=id.clone()
                        name=field.key()
                        rows="5"
                        required
                        placeholder=meta.placeholder
                        disabled=busy
                        prop:value=value
                        on:input=on_input
                    ></textarea>
                }
                .into_any()
            } else {
                view! {
                    <input
                        id=id.clone()
                        name=field.key()
                        type=meta.input_type
                        required
                        placeholder=meta.placeholder
                        disabled=busy
                        prop:value=value
                        on:input=on_input
                    />
                }
                .into_any()
            };
            view! {
                <div class="form-field">
                    <label for=id>{meta.label}</label>
                    {input}
                </div>
            }
        })
        .collect_view();

    view! {
        <form class="contact-form" on:submit=on_submit novalidate>
            {move || {
                form.with(|f| status_banner(f.status()))
                    .map(|(class, text)| view! { <div class=class>{text}</div> })
            }}
            <Show when=move || notice.get().is_some()>
                <div class="form-banner form-banner--warn">{move || notice.get().unwrap_or_default()}</div>
            </Show>
            {fields}
            <button type="submit" class="contact-form__submit" disabled=busy>
                {move || if busy() { "Отправка..." } else { "Отправить" }}
            </button>
        </form>
    }
}
