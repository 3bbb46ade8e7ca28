pub mod health;
pub mod questions;

pub use health::{health_check, readiness_check};
pub use questions::{create_question, list_questions};
