use dioxus::prelude::*;
use types::Department;
use ui::{DepartmentPanel, Lookup, Rejection};

use super::components::{EmptyState, SearchBar};
use crate::use_toasts;

#[component]
pub fn DepartmentLookup() -> Element {
    let mut lookup = use_signal(Lookup::<Department>::new);
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
            let outcome = api::find_department(id).await;
            let notice = lookup.write().finish_search(outcome);
            if let Some(notice) = notice {
                toasts.push(notice);
            }
        });
    };

    let state = lookup.read();
    let panel = state.result().map(DepartmentPanel::new);

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "🏢 Find Department Details" }
            }
            div { class: "card-body",
                SearchBar {
                    value: state.id().to_string(),
                    placeholder: state.input_placeholder(),
                    button_label: "Search Department",
                    searching: state.is_searching(),
                    oninput: move |id: String| lookup.write().set_id(id),
                    onsearch: search,
                }
                if let Some(panel) = panel {
                    div { class: "result-panel",
                        div { class: "result-grid",
                            div {
                                h4 { class: "section-header", "🏢 Department Information" }
                                div { class: "badge-row",
                                    span { class: "badge badge-primary", "ID: {panel.id}" }
                                    span { class: "badge badge-success", "Active" }
                                    span { class: "badge badge-info", "👥 {panel.user_count}" }
                                }
                                p { strong { "Name: " } "{panel.name}" }
                                p { strong { "Code: " } "{panel.code}" }
                            }
                            div {
                                h4 { class: "section-header", "📍 Location Details" }
                                p { strong { "Address:" } }
                                p { class: "address-block", "{panel.address}" }
                            }
                        }
                        div { class: "result-footer",
                            small { class: "text-muted", "Last updated: {today()}" }
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
                    EmptyState { icon: "🏢", prompt: state.empty_prompt() }
                }
            }
        }
    }
}

fn today() -> String {
    last_updated(&jiff::Zoned::now())
}

/// The calendar date in the zone `now` carries, so the browser's local date.
fn last_updated(now: &jiff::Zoned) -> String {
    now.strftime("%b %d, %Y").to_string()
}
