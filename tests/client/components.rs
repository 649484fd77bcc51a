use dioxus::prelude::*;
use quiz_app::client::components::QuestionCard;
use quiz_app::client::routes::add_question::FormError;
use quiz_app::error::question::QuestionError;
use quiz_app::model::question::Question;

fn question() -> Question {
    Question {
        id: 7,
        question_text: "What is the largest ocean on Earth?".to_string(),
        correct_answer: "Pacific Ocean".to_string(),
        options: [
            "Atlantic Ocean",
            "Indian Ocean",
            "Pacific Ocean",
            "Arctic Ocean",
        ]
        .map(String::from),
    }
}

/// Tests rendering a single question card.
///
/// Verifies the card uses the display number rather than the question id.
///
/// Expected: "3." heading, options A) to D), correct answer line
#[test]
fn question_card_renders_numbered_question() {
    let html = dioxus_ssr::render_element(rsx! {
        QuestionCard { number: 3, question: question() }
    });

    assert!(html.contains("3. What is the largest ocean on Earth?"));
    assert!(!html.contains("7. What is"));
    assert!(html.contains("A) Atlantic Ocean"));
    assert!(html.contains("B) Indian Ocean"));
    assert!(html.contains("C) Pacific Ocean"));
    assert!(html.contains("D) Arctic Ocean"));
    assert!(html.contains("Correct Answer: Pacific Ocean"));
}

/// Tests that a question serializes with its options as a list.
///
/// Expected: JSON array of four options
#[test]
fn question_serializes_options_as_list() {
    let json = serde_json::to_value(question()).unwrap();

    assert_eq!(json["id"], 7);
    assert_eq!(json["options"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["correct_answer"], "Pacific Ocean");
}

/// Tests rendering a validation error under the add-question form.
///
/// Expected: error paragraph carrying the error message
#[test]
fn form_error_renders_validation_message() {
    let html = dioxus_ssr::render_element(rsx! {
        FormError { error: QuestionError::EmptyOption(2) }
    });

    assert!(html.contains("class=\"error\""));
    assert!(html.contains("Option 2 is required"));
}
