pub mod database;
pub mod metrics;
pub mod questions;

pub use database::MongoDb;
pub use metrics::{get_metrics, init_metrics};
pub use questions::{MongoQuestionStore, QuestionStore};
