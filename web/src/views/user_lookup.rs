use dioxus::prelude::*;
use types::UserDetails;
use ui::{Lookup, Rejection, UserPanel};

use super::components::{EmptyState, SearchBar};
use crate::use_toasts;

#[component]
pub fn UserLookup() -> Element {
    let mut lookup = use_signal(Lookup::<UserDetails>::new);
    let mut toasts = use_toasts();

    let search = move |_: ()| {
        let attempt = lookup.write().begin_search();
        let id = match attempt {
            Ok(id) => id,
            Err(Rejection::Invalid(notice)) => {
                toasts.push(notice);
                return;
            }
            Err(Rejection::Busy) => return,
        };

        spawn(async move {
            let outcome = api::find_user(id).await;
            let notice = lookup.write().finish_search(outcome);
            if let Some(notice) = notice {
                toasts.push(notice);
            }
        });
    };

    let state = lookup.read();
    let panel = state.result().map(UserPanel::new);

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "🔍 Find User Details" }
            }
            div { class: "card-body",
                SearchBar {
                    value: state.id().to_string(),
                    placeholder: state.input_placeholder(),
                    button_label: "Search User",
                    searching: state.is_searching(),
                    oninput: move |id: String| lookup.write().set_id(id),
                    onsearch: search,
                }
                if let Some(panel) = panel {
                    div { class: "result-panel",
                        div { class: "result-grid",
                            div {
                                h4 { class: "section-header", "👤 User Information" }
                                div { class: "badge-row",
                                    span { class: "badge badge-info", "ID: {panel.id}" }
                                    span { class: "badge badge-success", "Active" }
                                }
                                p { strong { "Name: " } "{panel.name}" }
                                p { strong { "Email: " } "{panel.email}" }
                                p { strong { "User ID: " } "{panel.user_id}" }
                            }
                            div {
                                h4 { class: "section-header", "🏢 Department Details" }
                                div { class: "badge-row",
                                    span { class: "badge badge-primary", "Dept ID: {panel.department_id}" }
                                }
                                p { strong { "Department: " } "{panel.department_name}" }
                                p { strong { "Code: " } "{panel.department_code}" }
                                p { strong { "Address: " } "{panel.department_address}" }
                            }
                        }
                        button {
                            class: "btn btn-danger-outline btn-sm",
                            onclick: move |_| {
                                let notice = lookup.write().clear();
                                toasts.push(notice);
                            },
                            "Clear Results"
                        }
                    }
                } else {
                    EmptyState { icon: "🔍", prompt: state.empty_prompt() }
                }
            }
        }
    }
}
