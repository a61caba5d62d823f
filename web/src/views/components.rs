use dioxus::prelude::*;
use ui::FieldSpec;

/// A labelled input bound to one form field.
#[component]
pub fn FormInput(spec: FieldSpec, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div { class: if spec.wide { "form-group form-group-wide" } else { "form-group" },
            label { class: "form-label", r#for: spec.id, "{spec.label_text()}" }
            input {
                id: spec.id,
                name: spec.id,
                class: "form-input",
                r#type: spec.input_type,
                placeholder: spec.placeholder,
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

/// Submit button that swaps its label for a spinner while a request runs.
#[component]
pub fn SubmitButton(
    label: &'static str,
    busy_label: &'static str,
    busy: bool,
    onclick: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "btn btn-primary btn-lg",
            disabled: busy,
            onclick: move |_| onclick.call(()),
            if busy {
                span { class: "spinner" }
                "{busy_label}"
            } else {
                "{label}"
            }
        }
    }
}

/// Identifier input with a search button; Enter also searches.
#[component]
pub fn SearchBar(
    value: String,
    placeholder: String,
    button_label: &'static str,
    searching: bool,
    oninput: EventHandler<String>,
    onsearch: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "search-bar",
            span { class: "search-icon", "🔍" }
            input {
                class: "form-input",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        onsearch.call(());
                    }
                },
            }
            button {
                class: "btn btn-primary",
                disabled: searching,
                onclick: move |_| onsearch.call(()),
                if searching {
                    span { class: "spinner" }
                    "Searching..."
                } else {
                    "{button_label}"
                }
            }
        }
    }
}

#[component]
pub fn EmptyState(icon: &'static str, prompt: String) -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-state-icon", "{icon}" }
            p { "{prompt}" }
            small { "Try IDs like 1, 2, 3, etc." }
        }
    }
}
