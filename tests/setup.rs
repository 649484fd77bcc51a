use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use quiz_app::client::{config::ClientConfig, theme::Theme, App};

/// Renders the full application to HTML with the router starting at `path`.
pub fn render_at(path: &str, config: ClientConfig) -> String {
    let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path));
    let theme = Theme::quiz().expect("Quiz theme should build");

    let mut dom = VirtualDom::new(App)
        .with_root_context(history)
        .with_root_context(config)
        .with_root_context(theme);
    dom.rebuild_in_place();

    dioxus_ssr::render(&dom)
}

/// Config with the question bank seeded from the sample set.
pub fn seeded_config() -> ClientConfig {
    ClientConfig {
        seed_sample_questions: true,
        ..ClientConfig::default()
    }
}
