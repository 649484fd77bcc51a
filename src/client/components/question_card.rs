use dioxus::prelude::*;

use crate::model::question::Question;

/// Displays one question with its lettered options and the correct answer.
#[component]
pub fn QuestionCard(number: usize, question: Question) -> Element {
    rsx!(
        div {
            class: "question-card",
            h3 { "{number}. {question.question_text}" }
            div { class: "options",
                for (letter, option) in question.labelled_options() {
                    p { key: "{letter}", "{letter}) {option}" }
                }
            }
            p { class: "correct-answer",
                "Correct Answer: {question.correct_answer}"
            }
        }
    )
}
