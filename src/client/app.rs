use dioxus::prelude::*;

use crate::client::{config::ClientConfig, router::Route, store::QuestionBank, theme::ThemeBaseline};

/// Application root.
///
/// Expects [`ClientConfig`] and [`Theme`](crate::client::theme::Theme) in the root context,
/// both are injected by `main` before launch.
#[component]
pub fn App() -> Element {
    let config = use_context::<ClientConfig>();

    use_context_provider(|| {
        Signal::new(if config.seed_sample_questions {
            QuestionBank::with_samples()
        } else {
            QuestionBank::new()
        })
    });

    rsx! {
        ThemeBaseline {}
        Router::<Route> {}
    }
}
