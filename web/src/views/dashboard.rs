use dioxus::prelude::*;
use ui::{OVERVIEW_STATS, Tab};

use super::{DepartmentFormView, DepartmentLookup, UserFormView, UserLookup};
use crate::use_toasts;

/// The console shell: header, counters, and the tabbed views.
///
/// Every view stays mounted while hidden so switching tabs keeps its state.
#[component]
pub fn Dashboard() -> Element {
    let mut active = use_signal(Tab::default);
    let mut toasts = use_toasts();

    let mut select = move |tab: Tab| {
        active.set(tab);
        toasts.push(tab.switched_notice());
    };

    let pane_class = move |tab: Tab| {
        if active() == tab {
            "tab-pane active"
        } else {
            "tab-pane"
        }
    };

    rsx! {
        div { class: "dashboard-container",
            div { class: "header-section",
                div { class: "header-text",
                    h1 { class: "page-title", "📊 Microservices Dashboard" }
                    p { class: "page-subtitle", "Manage Departments & Users efficiently" }
                }
                span { class: "status-badge",
                    "📈 System Status: "
                    span { class: "text-success", "Active" }
                }
            }

            div { class: "stats-grid",
                for stat in OVERVIEW_STATS {
                    div { key: "{stat.label}", class: "card stat-card",
                        div { class: "icon-wrapper", style: "background: {stat.accent}",
                            "{stat.icon}"
                        }
                        h3 { "{stat.value}" }
                        p { class: "text-muted", "{stat.label}" }
                    }
                }
            }

            nav { class: "tab-bar",
                for tab in Tab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if active() == tab { "tab active" } else { "tab" },
                        onclick: move |_| select(tab),
                        "{tab.icon()} {tab.label()}"
                    }
                }
            }

            div { class: "tab-content",
                div { class: pane_class(Tab::Overview),
                    Overview { on_get_started: move |_| select(Tab::CreateUser) }
                }
                div { class: pane_class(Tab::CreateDepartment), DepartmentFormView {} }
                div { class: pane_class(Tab::FindDepartment), DepartmentLookup {} }
                div { class: pane_class(Tab::CreateUser), UserFormView {} }
                div { class: pane_class(Tab::FindUser), UserLookup {} }
            }
        }
    }
}

#[component]
fn Overview(on_get_started: EventHandler<()>) -> Element {
    rsx! {
        div { class: "overview",
            h3 { class: "section-header", "Welcome to Admin Dashboard" }
            p { "Manage your organization's departments and users through this intuitive interface." }
            ul { class: "feature-list",
                li { "✅ Create new departments with codes" }
                li { "✅ Add users to departments" }
                li { "✅ Search and view details instantly" }
                li { "✅ Real-time notifications" }
            }
            button {
                class: "btn btn-primary btn-lg",
                onclick: move |_| on_get_started.call(()),
                "👤 Get Started - Add User"
            }
        }
    }
}
