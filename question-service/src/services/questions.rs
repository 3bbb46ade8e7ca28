use crate::models::Question;
use crate::services::MongoDb;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use service_core::error::AppError;

/// Persistence boundary for questions. Handlers only see this trait; the
/// concrete store is injected at startup.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Returns every question in the given partition, oldest first.
    async fn get_all_questions(&self, quiz: &str) -> Result<Vec<Question>, AppError>;

    /// Persists a new question. Success carries no payload; failures map to
    /// HTTP statuses via `AppError`.
    async fn create_question(&self, question: Question) -> Result<(), AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}

pub struct MongoQuestionStore {
    db: MongoDb,
}

impl MongoQuestionStore {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl QuestionStore for MongoQuestionStore {
    async fn get_all_questions(&self, quiz: &str) -> Result<Vec<Question>, AppError> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": 1 })
            .build();

        let mut cursor = self
            .db
            .questions()
            .find(doc! { "quiz": quiz }, find_options)
            .await
            .map_err(AppError::from)?;

        let mut questions = Vec::new();
        while let Some(question) = cursor.try_next().await.map_err(AppError::from)? {
            questions.push(question);
        }

        Ok(questions)
    }

    async fn create_question(&self, question: Question) -> Result<(), AppError> {
        self.db
            .questions()
            .insert_one(&question, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to insert question {} into database: {}",
                    question.id,
                    e
                );
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.db.health_check().await
    }
}
