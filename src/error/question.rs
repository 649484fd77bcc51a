use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("Question text is required")]
    EmptyQuestion,
    /// Option position is 1-based to match the form labels.
    #[error("Option {0} is required")]
    EmptyOption(usize),
    #[error("Option {0:?} is listed more than once")]
    DuplicateOption(String),
    #[error("Correct answer is required")]
    EmptyAnswer,
    #[error("Correct answer {0:?} must match one of the options")]
    AnswerNotAnOption(String),
}
