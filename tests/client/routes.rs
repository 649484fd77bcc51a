use quiz_app::client::{config::ClientConfig, routes::home::LandingAction};

use crate::setup::{render_at, seeded_config};

/// Tests rendering the landing page at the root path.
///
/// Verifies the landing copy and both navigation buttons are present and no other routed
/// view is mounted.
///
/// Expected: landing view only
#[test]
fn root_mounts_landing_view() {
    let html = render_at("/", ClientConfig::default());

    assert!(html.contains("Welcome to Quiz App"));
    assert!(html.contains("Test your knowledge with our interactive quizzes!"));
    assert!(html.contains("View Questions"));
    assert!(html.contains("Add New Question"));
    assert!(!html.contains("Quiz Questions"));
    assert!(!html.contains("Save Question"));
}

/// Tests that the navigation bar renders on every registered path.
///
/// Verifies exactly three links with the fixed labels and targets, whatever the current path.
/// The bank is seeded so the question list renders no links of its own.
///
/// Expected: three anchors to /, /questions and /add-question
#[test]
fn navbar_renders_three_links_on_every_path() {
    for path in ["/", "/questions", "/add-question"] {
        let html = render_at(path, seeded_config());

        assert!(html.contains("Quiz App"), "{path}");
        assert_eq!(html.matches("<a ").count(), 3, "{path}");
        assert!(html.contains("href=\"/\""), "{path}");
        assert!(html.contains("href=\"/questions\""), "{path}");
        assert!(html.contains("href=\"/add-question\""), "{path}");
        assert!(html.contains(">Home<"), "{path}");
        assert!(html.contains(">Questions<"), "{path}");
        assert!(html.contains(">Add Question<"), "{path}");
    }
}

/// Tests following the "View Questions" button from the landing page.
///
/// Renders the router at the button's target to check the question list is the view mounted
/// there.
///
/// Expected: /questions mounts the question list
#[test]
fn view_questions_target_mounts_question_list() {
    let target = LandingAction::ViewQuestions.target().to_string();
    assert_eq!(target, "/questions");

    let html = render_at(&target, ClientConfig::default());

    assert!(html.contains("Quiz Questions"));
    assert!(!html.contains("Welcome to Quiz App"));
}

/// Tests following the "Add New Question" button from the landing page.
///
/// Expected: /add-question mounts the form
#[test]
fn add_question_target_mounts_form() {
    let target = LandingAction::AddQuestion.target().to_string();
    assert_eq!(target, "/add-question");

    let html = render_at(&target, ClientConfig::default());

    assert!(html.contains("Add New Question"));
    assert!(html.contains("Option A"));
    assert!(html.contains("Option D"));
    assert!(html.contains("Correct Answer"));
    assert!(html.contains("Save Question"));
    assert!(!html.contains("class=\"error\""));
    assert!(!html.contains("Welcome to Quiz App"));
}

/// Tests the question list with an empty bank.
///
/// Expected: empty-state message with the sample loader button
#[test]
fn empty_question_list_offers_samples() {
    let html = render_at("/questions", ClientConfig::default());

    assert!(html.contains("No questions available"));
    assert!(html.contains("Load Sample Questions"));
}

/// Tests the question list with the sample questions seeded at startup.
///
/// Expected: numbered question cards with lettered options and answers
#[test]
fn seeded_question_list_renders_cards() {
    let html = render_at("/questions", seeded_config());

    assert!(!html.contains("No questions available"));
    assert!(html.contains("1. What is the capital of France?"));
    assert!(html.contains("A) Paris"));
    assert!(html.contains("D) Madrid"));
    assert!(html.contains("Correct Answer: Paris"));
    assert_eq!(html.matches("Correct Answer:").count(), 15);
}

/// Tests the fallback view for an unregistered path.
///
/// Expected: not-found page naming the path, navigation bar still present
#[test]
fn unregistered_path_mounts_not_found() {
    let html = render_at("/quiz/results", ClientConfig::default());

    assert!(html.contains("Page not found"));
    assert!(html.contains("/quiz/results"));
    assert!(html.contains(">Home<"));
    assert!(!html.contains("Welcome to Quiz App"));
}
