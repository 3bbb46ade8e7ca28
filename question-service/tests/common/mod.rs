use async_trait::async_trait;
use axum::Router;
use question_service::config::{MongoConfig, QuestionConfig};
use question_service::models::Question;
use question_service::services::QuestionStore;
use question_service::startup::{app_router, AppState};
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the Mongo-backed store. Preserves insertion order
/// and counts create calls so tests can assert on collaborator interactions.
pub struct InMemoryQuestionStore {
    questions: Mutex<Vec<Question>>,
    create_calls: AtomicUsize,
}

impl InMemoryQuestionStore {
    pub fn new() -> Self {
        Self {
            questions: Mutex::new(Vec::new()),
            create_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Mutex::new(questions),
            create_calls: AtomicUsize::new(0),
        }
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<Question> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn get_all_questions(&self, quiz: &str) -> Result<Vec<Question>, AppError> {
        let questions = self.questions.lock().unwrap();
        Ok(questions
            .iter()
            .filter(|q| q.quiz == quiz)
            .cloned()
            .collect())
    }

    async fn create_question(&self, question: Question) -> Result<(), AppError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.questions.lock().unwrap().push(question);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Store whose every operation fails, for exercising error translation.
pub struct FailingQuestionStore;

#[async_trait]
impl QuestionStore for FailingQuestionStore {
    async fn get_all_questions(&self, _quiz: &str) -> Result<Vec<Question>, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(
            "datastore unavailable"
        )))
    }

    async fn create_question(&self, _question: Question) -> Result<(), AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(
            "datastore unavailable"
        )))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(AppError::ServiceUnavailable)
    }
}

pub fn test_config() -> QuestionConfig {
    QuestionConfig {
        common: CoreConfig {
            port: 0,
            log_level: "error".to_string(),
            otlp_endpoint: None,
        },
        mongodb: MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "question_test".to_string(),
        },
    }
}

pub fn test_app(store: Arc<dyn QuestionStore>) -> Router {
    app_router(AppState {
        config: test_config(),
        questions: store,
    })
}
