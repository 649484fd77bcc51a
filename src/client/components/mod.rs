pub mod navbar;
pub mod page;
pub mod question_card;

pub use navbar::Navbar;
pub use page::Page;
pub use question_card::QuestionCard;
