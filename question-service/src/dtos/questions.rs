use crate::models::Question;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    /// Partition key for the new question; defaults to the partition the
    /// list endpoint serves when omitted.
    pub quiz: Option<String>,
    pub text: String,
    pub author: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: String,
    pub quiz: String,
    pub text: String,
    pub author: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            quiz: question.quiz,
            text: question.text,
            author: question.author,
            created_at: question.created_at.to_rfc3339(),
            updated_at: question.updated_at.to_rfc3339(),
        }
    }
}
