pub mod question;
mod samples;

pub use question::QuestionBank;
