use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    let logged_path = path.clone();
    use_hook(move || tracing::warn!(path = %logged_path, "No route registered for path"));

    rsx!(
        Title { "Not Found | Quiz App" }
        Page { class: "not-found",
            h1 { "Page not found" }
            p { class: "text-secondary",
                "Nothing is registered at {path}."
            }
            Link {
                to: Route::Home {},
                class: "btn btn-outlined",
                "Back to Home"
            }
        }
    )
}
