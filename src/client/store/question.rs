//! Session-scoped question bank shared by the question views.
//!
//! Questions live only for the lifetime of the page. The bank is placed in the root context as
//! a `Signal<QuestionBank>` so the list and form views observe the same data.

use dioxus_logger::tracing;

use crate::client::store::samples::SAMPLE_QUESTIONS;
use crate::error::question::QuestionError;
use crate::model::question::{Question, QuestionDraft, ValidQuestion};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
    next_id: u32,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionBank {
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a bank pre-populated with the sample questions.
    pub fn with_samples() -> Self {
        let mut bank = Self::new();
        bank.load_samples();
        bank
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Validates a draft and appends it to the bank.
    ///
    /// # Returns
    /// - `Ok(&Question)` - The stored question with its newly assigned id
    /// - `Err(QuestionError)` - The draft failed validation, the bank is unchanged
    pub fn add(&mut self, draft: &QuestionDraft) -> Result<&Question, QuestionError> {
        let valid = draft.validate()?;
        let question = self.push(valid);

        tracing::info!(id = question.id, "Added question");

        Ok(question)
    }

    /// Replaces the contents of the bank with the sample questions.
    ///
    /// Existing questions are cleared first, ids keep increasing so a question id is never
    /// reused within a session.
    pub fn load_samples(&mut self) {
        self.questions.clear();

        for (question_text, correct_answer, options) in SAMPLE_QUESTIONS {
            self.push(ValidQuestion {
                question_text: question_text.to_string(),
                correct_answer: correct_answer.to_string(),
                options: options.map(String::from),
            });
        }

        tracing::info!(count = self.questions.len(), "Loaded sample questions");
    }

    fn push(&mut self, valid: ValidQuestion) -> &Question {
        let id = self.next_id;
        self.next_id += 1;

        self.questions.push(valid.into_question(id));
        &self.questions[self.questions.len() - 1]
    }
}
