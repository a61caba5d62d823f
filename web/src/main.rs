use dioxus::prelude::*;
use ui::Notice;

mod views;

use views::Dashboard;

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            server::init()?;

            Ok(dioxus::server::router(App))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Toasts {
        list: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    });

    rsx! {
        document::Title { "Microservices Dashboard" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Dashboard {}
        ToastStack {}
    }
}

/// Resolves once a toast has been shown for four seconds.
const TOAST_DISMISS_JS: &str = "setTimeout(() => dioxus.send(null), 4000)";

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Global toast queue - use `use_toasts()` to access
#[derive(Clone, Copy)]
pub struct Toasts {
    list: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    /// Show a notice; it is removed again after a few seconds.
    pub fn push(&mut self, notice: Notice) {
        tracing::debug!(level = ?notice.level, message = %notice.message, "notice");

        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.list.write().push(Toast { id, notice });

        let mut toasts = *self;
        spawn(async move {
            if document::eval(TOAST_DISMISS_JS).recv::<()>().await.is_ok() {
                toasts.dismiss(id);
            }
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.list.write().retain(|toast| toast.id != id);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
fn ToastStack() -> Element {
    let mut toasts = use_toasts();
    let list = toasts.list.read().clone();

    rsx! {
        div { class: "toast-stack",
            for toast in list {
                div {
                    key: "{toast.id}",
                    class: toast.notice.level.css_class(),
                    span { class: "toast-message", "{toast.notice.message}" }
                    button {
                        class: "toast-close",
                        onclick: move |_| toasts.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
