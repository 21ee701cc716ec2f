//! Five-step internship application wizard rendered in a modal.
//!
//! DESIGN
//! ======
//! The modal owns one [`IntakeForm`] for its lifetime. The careers page mounts
//! it inside `<Show>`, so every open starts from an empty draft and closing
//! discards the draft. A relay response that lands after close finds the
//! signal disposed and is dropped.

use forms::{IntakeError, IntakeField, IntakeForm, IntakeStep};
use leptos::prelude::*;

use crate::components::modal::Modal;

#[cfg(test)]
#[path = "intake_modal_test.rs"]
mod intake_modal_test;

pub(crate) fn step_title(step: IntakeStep) -> &'static str {
    match step {
        IntakeStep::Personal => "Личные данные",
        IntakeStep::Education => "Образование",
        IntakeStep::Motivation => "Мотивация",
        IntakeStep::Skills => "Навыки",
        IntakeStep::Additional => "Дополнительно",
    }
}

pub(crate) fn field_label(field: IntakeField) -> &'static str {
    match field {
        IntakeField::FullName => "ФИО",
        IntakeField::Email => "E-mail",
        IntakeField::Phone => "Телефон",
        IntakeField::Address => "Адрес проживания",
        IntakeField::University => "ВУЗ",
        IntakeField::Faculty => "Факультет",
        IntakeField::Course => "Курс",
        IntakeField::GradYear => "Год окончания",
        IntakeField::Objective => "Цель практики",
        IntakeField::Experience => "Опыт (экспедиции, проекты)",
        IntakeField::Skills => "Профессиональные навыки и ПО",
        IntakeField::Languages => "Иностранные языки",
        IntakeField::Additional => "Дополнительная информация",
    }
}

/// HTML input type, or `"textarea"` for free-text answers.
pub(crate) fn input_type(field: IntakeField) -> &'static str {
    match field {
        IntakeField::Email => "email",
        IntakeField::Phone => "tel",
        IntakeField::Course | IntakeField::GradYear => "number",
        IntakeField::Objective | IntakeField::Experience | IntakeField::Additional => "textarea",
        _ => "text",
    }
}

/// User-facing text for a rejected navigation or submit.
pub(crate) fn describe_error(err: &IntakeError) -> String {
    match err {
        IntakeError::Incomplete { missing, .. } => {
            let labels = missing.iter().map(|f| field_label(*f)).collect::<Vec<_>>();
            format!("Заполните обязательные поля: {}", labels.join(", "))
        }
        IntakeError::InvalidEmail => "Укажите корректный e-mail".to_owned(),
        IntakeError::SubmissionInFlight => "Заявка уже отправляется".to_owned(),
        other => other.to_string(),
    }
}

pub(crate) fn progress_label(step: IntakeStep) -> String {
    format!("Шаг {} из {}: {}", step.number(), IntakeStep::ALL.len(), step_title(step))
}

#[component]
fn StepFields(step: IntakeStep, form: RwSignal<IntakeForm>) -> impl IntoView {
    let busy = move || form.with(IntakeForm::is_submitting);

    step.fields()
        .iter()
        .copied()
        .map(|field| {
            let id = format!("intake-{}", field.key());
            let label = if field.required() { format!("{} *", field_label(field)) } else { field_label(field).to_owned() };
            let value = move || form.with(|f| f.value(field).to_owned());
            let on_input = move |ev: leptos::ev::Event| {
                let text = event_target_value(&ev);
                form.update(|f| {
                    let _ = f.set_field(field, text);
                });
            };
            let control = if input_type(field) == "textarea" {
                view! {
                    <textarea id=id.clone() rows="3" disabled=busy prop:value=value on:input=on_input></textarea>
                }
                .into_any()
            } else {
                view! {
                    <input id=id.clone() type=input_type(field) disabled=busy prop:value=value on:input=on_input/>
                }
                .into_any()
            };
            view! {
                <div class="form-field">
                    <label for=id>{label}</label>
                    {control}
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn IntakeModal(on_close: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(IntakeForm::new());
    let notice = RwSignal::new(None::<String>);
    // Re-render the step body only when the step changes, not on every keystroke.
    let step = Memo::new(move |_| form.with(IntakeForm::step));
    let busy = move || form.with(IntakeForm::is_submitting);
    let relay_error = move || form.with(|f| f.last_error().map(str::to_owned));

    let navigate = move |forward: bool| {
        let result = form.try_update(|f| if forward { f.next() } else { f.back() });
        match result {
            Some(Ok(_)) => notice.set(None),
            Some(Err(e)) => notice.set(Some(describe_error(&e))),
            None => {}
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(started) = form.try_update(IntakeForm::begin_submit) else {
            return;
        };
        match started {
            Ok(draft) => {
                notice.set(None);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let outcome = crate::net::api::submit_internship(&draft).await;
                    if let Err(e) = &outcome {
                        log::warn!("internship submission failed: {e}");
                    }
                    let _ = form.try_update(|f| f.finish_submit(outcome));
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = draft;
            }
            Err(e) => notice.set(Some(describe_error(&e))),
        }
    };

    view! {
        <Modal on_close class="intake-modal">
            <h2 class="intake-modal__title">"Заявка на стажировку"</h2>
            {move || match step.get() {
                None => {
                    view! {
                        <div class="intake-modal__done">
                            <p>"Спасибо! Заявка отправлена, мы свяжемся с вами."</p>
                            <button class="intake-modal__primary" on:click=move |_| on_close.run(())>
                                "Закрыть"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                Some(current) => {
                    view! {
                        <form class="intake-modal__form" on:submit=on_submit novalidate>
                            <p class="intake-modal__progress">{progress_label(current)}</p>
                            <ol class="intake-modal__steps">
                                {IntakeStep::ALL
                                    .iter()
                                    .map(|s| {
                                        let class = if *s == current {
                                            "is-current"
                                        } else if *s < current {
                                            "is-done"
                                        } else {
                                            ""
                                        };
                                        view! { <li class=class>{s.number()}</li> }
                                    })
                                    .collect_view()}
                            </ol>
                            <StepFields step=current form/>
                            <Show when=move || notice.get().is_some()>
                                <div class="form-banner form-banner--warn">
                                    {move || notice.get().unwrap_or_default()}
                                </div>
                            </Show>
                            <Show when=move || relay_error().is_some()>
                                <div class="form-banner form-banner--error">
                                    {move || format!("Ошибка отправки: {}", relay_error().unwrap_or_default())}
                                </div>
                            </Show>
                            <div class="intake-modal__actions">
                                <Show when=move || current.prev().is_some()>
                                    <button
                                        type="button"
                                        class="intake-modal__secondary"
                                        disabled=busy
                                        on:click=move |_| navigate(false)
                                    >
                                        "Назад"
                                    </button>
                                </Show>
                                {if current.is_last() {
                                    view! {
                                        <button type="submit" class="intake-modal__primary" disabled=busy>
                                            {move || if busy() { "Отправка..." } else { "Отправить заявку" }}
                                        </button>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <button
                                            type="button"
                                            class="intake-modal__primary"
                                            on:click=move |_| navigate(true)
                                        >
                                            "Далее"
                                        </button>
                                    }
                                        .into_any()
                                }}
                            </div>
                        </form>
                    }
                        .into_any()
                }
            }}
        </Modal>
    }
}
