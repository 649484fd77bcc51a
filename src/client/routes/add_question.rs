use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::QuestionBank;
use crate::error::question::QuestionError;
use crate::model::question::{QuestionDraft, OPTION_LABELS};

/// Validates `draft` and stores it in `bank`.
///
/// # Returns
/// - `Ok(Route)` - The question was stored, the route to navigate to next
/// - `Err(QuestionError)` - The draft failed validation, the bank is unchanged
pub fn submit_draft(
    bank: &mut QuestionBank,
    draft: &QuestionDraft,
) -> Result<Route, QuestionError> {
    bank.add(draft)?;

    Ok(Route::QuestionList {})
}

/// Validation message shown under the form fields.
#[component]
pub fn FormError(error: QuestionError) -> Element {
    rsx!(
        p { class: "error", "{error}" }
    )
}

#[component]
pub fn AddQuestion() -> Element {
    let mut bank = use_context::<Signal<QuestionBank>>();
    let mut draft = use_signal(QuestionDraft::default);
    let mut error = use_signal(|| None::<QuestionError>);
    let navigator = use_navigator();

    let submit = move |event: FormEvent| {
        event.prevent_default();

        let result = submit_draft(&mut bank.write(), &draft.read());
        match result {
            Ok(next) => {
                error.set(None);
                navigator.push(next);
            }
            Err(err) => {
                tracing::warn!(%err, "Rejected question draft");
                error.set(Some(err));
            }
        }
    };

    rsx!(
        Title { "Add Question | Quiz App" }
        Page { class: "add-question",
            h1 { "Add New Question" }
            form {
                onsubmit: submit,
                div { class: "field",
                    label { r#for: "question_text", "Question" }
                    input {
                        id: "question_text",
                        name: "question_text",
                        value: draft.read().question_text.clone(),
                        oninput: move |event| draft.write().question_text = event.value(),
                    }
                }
                for (index, letter) in OPTION_LABELS.into_iter().enumerate() {
                    div { key: "{index}", class: "field",
                        label { r#for: "option{index}", "Option {letter}" }
                        input {
                            id: "option{index}",
                            name: "option{index}",
                            value: draft.read().options[index].clone(),
                            oninput: move |event| draft.write().options[index] = event.value(),
                        }
                    }
                }
                div { class: "field",
                    label { r#for: "correct_answer", "Correct Answer" }
                    input {
                        id: "correct_answer",
                        name: "correct_answer",
                        value: draft.read().correct_answer.clone(),
                        oninput: move |event| draft.write().correct_answer = event.value(),
                    }
                }
                if let Some(err) = error() {
                    FormError { error: err }
                }
                button {
                    r#type: "submit",
                    class: "btn btn-contained",
                    "Save Question"
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(correct_answer: &str) -> QuestionDraft {
        QuestionDraft {
            question_text: "Which planet is known as the Red Planet?".to_string(),
            correct_answer: correct_answer.to_string(),
            options: ["Venus", "Mars", "Jupiter", "Saturn"].map(String::from),
        }
    }

    /// Tests submitting a valid draft.
    ///
    /// Verifies the question is stored and the form navigates to the question list.
    ///
    /// Expected: Ok(Route::QuestionList) and one stored question
    #[test]
    fn valid_draft_is_stored_and_navigates_to_list() {
        let mut bank = QuestionBank::new();

        let next = submit_draft(&mut bank, &draft("Mars")).unwrap();

        assert_eq!(next, Route::QuestionList {});
        assert_eq!(next.to_string(), "/questions");
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions()[0].correct_answer, "Mars");
    }

    /// Tests submitting a draft whose answer is not an option.
    ///
    /// Verifies the validation error is returned and nothing is stored.
    ///
    /// Expected: Err(QuestionError::AnswerNotAnOption) and an empty bank
    #[test]
    fn invalid_draft_returns_error_without_storing() {
        let mut bank = QuestionBank::new();

        let result = submit_draft(&mut bank, &draft("Pluto"));

        assert_eq!(
            result,
            Err(QuestionError::AnswerNotAnOption("Pluto".to_string()))
        );
        assert!(bank.is_empty());
    }
}
