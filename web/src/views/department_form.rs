use dioxus::prelude::*;
use ui::{DepartmentField, DepartmentForm, Rejection};

use super::components::{FormInput, SubmitButton};
use crate::use_toasts;

#[component]
pub fn DepartmentFormView() -> Element {
    let mut form = use_signal(DepartmentForm::new);
    let mut toasts = use_toasts();

    let submit = move |_: ()| {
        let attempt = form.write().begin_submit();
        let department = match attempt {
            Ok(department) => department,
            Err(Rejection::Invalid(notice)) => {
                toasts.push(notice);
                return;
            }
            Err(Rejection::Busy) => return,
        };

        spawn(async move {
            let outcome = api::create_department(department).await;
            let notice = form.write().finish_submit(outcome);
            toasts.push(notice);
        });
    };

    let submitting = form.read().is_submitting();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "🏢 Create New Department" }
            }
            div { class: "card-body",
                div { class: "form-grid",
                    for field in DepartmentField::ALL {
                        FormInput {
                            key: "{field.spec().id}",
                            spec: field.spec(),
                            value: form.read().get(field).to_string(),
                            oninput: move |value: String| form.write().set(field, value),
                        }
                    }
                }
                div { class: "form-actions",
                    SubmitButton {
                        label: "💾 Create Department",
                        busy_label: "Creating...",
                        busy: submitting,
                        onclick: submit,
                    }
                    button {
                        class: "btn btn-secondary btn-sm",
                        onclick: move |_| {
                            let notice = form.write().load_sample();
                            toasts.push(notice);
                        },
                        "Load Sample Data"
                    }
                }
            }
        }
    }
}
