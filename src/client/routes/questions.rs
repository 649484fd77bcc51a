use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::{Page, QuestionCard};
use crate::client::router::Route;
use crate::client::store::QuestionBank;

#[component]
pub fn QuestionList() -> Element {
    let mut bank = use_context::<Signal<QuestionBank>>();
    let questions = bank.read().questions().to_vec();

    rsx!(
        Title { "Questions | Quiz App" }
        Page { class: "question-list",
            h1 { "Quiz Questions" }
            if questions.is_empty() {
                div { class: "no-questions",
                    h2 { "No questions available" }
                    p { class: "text-secondary",
                        "Load the sample set or add your own."
                    }
                    div { class: "landing-actions",
                        button {
                            class: "btn btn-contained",
                            onclick: move |_| bank.write().load_samples(),
                            "Load Sample Questions"
                        }
                        Link {
                            to: Route::AddQuestion {},
                            class: "btn btn-outlined",
                            "Add Question"
                        }
                    }
                }
            } else {
                for (index, question) in questions.into_iter().enumerate() {
                    QuestionCard {
                        key: "{question.id}",
                        number: index + 1,
                        question: question,
                    }
                }
            }
        }
    )
}
