use crate::models::Question;
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for question-service");

        let questions = self.questions();

        // Compound index on (quiz, created_at) for partition-scoped ordered listing
        let quiz_index = IndexModel::builder()
            .keys(doc! { "quiz": 1, "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("quiz_created_at_lookup".to_string())
                    .build(),
            )
            .build();

        questions.create_index(quiz_index, None).await.map_err(|e| {
            tracing::error!(
                "Failed to create quiz index on questions collection: {}",
                e
            );
            AppError::from(e)
        })?;
        tracing::info!("Created index on questions.(quiz, created_at)");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn questions(&self) -> Collection<Question> {
        self.db.collection("questions")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
