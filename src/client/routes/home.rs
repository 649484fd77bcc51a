use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaList, FaPlus};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::Page;
use crate::client::router::Route;

/// Buttons on the landing page, each navigating to a registered route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingAction {
    ViewQuestions,
    AddQuestion,
}

impl LandingAction {
    pub const ALL: [Self; 2] = [Self::ViewQuestions, Self::AddQuestion];

    pub fn label(self) -> &'static str {
        match self {
            Self::ViewQuestions => "View Questions",
            Self::AddQuestion => "Add New Question",
        }
    }

    /// Route pushed onto the history when the button is activated.
    pub fn target(self) -> Route {
        match self {
            Self::ViewQuestions => Route::QuestionList {},
            Self::AddQuestion => Route::AddQuestion {},
        }
    }

    fn button_class(self) -> &'static str {
        match self {
            Self::ViewQuestions => "btn btn-contained",
            Self::AddQuestion => "btn btn-outlined",
        }
    }

    fn icon(self) -> Element {
        match self {
            Self::ViewQuestions => rsx!(Icon { width: 18, height: 18, icon: FaList }),
            Self::AddQuestion => rsx!(Icon { width: 18, height: 18, icon: FaPlus }),
        }
    }
}

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();

    rsx!(
        Title { "Quiz App" }
        Meta {
            name: "description",
            content: "Test your knowledge with our interactive quizzes."
        }
        Page { class: "landing",
            h1 {
                "Welcome to Quiz App"
            }
            p { class: "text-secondary",
                "Test your knowledge with our interactive quizzes!"
            }
            div { class: "landing-actions",
                for action in LandingAction::ALL {
                    button {
                        key: "{action.label()}",
                        class: action.button_class(),
                        onclick: move |_| {
                            let target = action.target();
                            tracing::info!(%target, "Navigating from landing page");
                            navigator.push(target);
                        },
                        {action.icon()}
                        "{action.label()}"
                    }
                }
            }
        }
    )
}
