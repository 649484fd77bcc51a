use serde::{Deserialize, Serialize};

use crate::error::question::QuestionError;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

/// Letters shown before each option when a question is displayed.
pub const OPTION_LABELS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];

/// A multiple-choice quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question_text: String,
    pub correct_answer: String,
    pub options: [String; OPTION_COUNT],
}

impl Question {
    /// Pairs each option with its display letter.
    pub fn labelled_options(&self) -> impl Iterator<Item = (char, &str)> {
        OPTION_LABELS
            .iter()
            .copied()
            .zip(self.options.iter().map(String::as_str))
    }
}

/// Raw, unvalidated form input for a new question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question_text: String,
    pub correct_answer: String,
    pub options: [String; OPTION_COUNT],
}

/// A draft that passed validation, trimmed and ready to be assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidQuestion {
    pub question_text: String,
    pub correct_answer: String,
    pub options: [String; OPTION_COUNT],
}

impl ValidQuestion {
    pub fn into_question(self, id: u32) -> Question {
        Question {
            id,
            question_text: self.question_text,
            correct_answer: self.correct_answer,
            options: self.options,
        }
    }
}

impl QuestionDraft {
    /// Validates the draft after trimming surrounding whitespace from every field.
    ///
    /// # Returns
    /// - `Ok(ValidQuestion)` - All fields present, options distinct, answer is one of the options
    /// - `Err(QuestionError)` - The first rule the draft breaks, checked in form order
    pub fn validate(&self) -> Result<ValidQuestion, QuestionError> {
        let question_text = self.question_text.trim();
        if question_text.is_empty() {
            return Err(QuestionError::EmptyQuestion);
        }

        let options = self.options.clone().map(|option| option.trim().to_string());
        for (index, option) in options.iter().enumerate() {
            if option.is_empty() {
                return Err(QuestionError::EmptyOption(index + 1));
            }
            if options[..index].contains(option) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }

        let correct_answer = self.correct_answer.trim();
        if correct_answer.is_empty() {
            return Err(QuestionError::EmptyAnswer);
        }
        if !options.iter().any(|option| option == correct_answer) {
            return Err(QuestionError::AnswerNotAnOption(correct_answer.to_string()));
        }

        Ok(ValidQuestion {
            question_text: question_text.to_string(),
            correct_answer: correct_answer.to_string(),
            options,
        })
    }
}
