pub mod add_question;
pub mod home;
pub mod not_found;
pub mod questions;

pub use add_question::AddQuestion;
pub use home::Home;
pub use not_found::NotFound;
pub use questions::QuestionList;
