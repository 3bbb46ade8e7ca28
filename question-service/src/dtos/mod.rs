pub mod questions;

pub use questions::{CreateQuestionRequest, QuestionResponse};
