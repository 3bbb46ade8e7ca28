use crate::dtos::{CreateQuestionRequest, QuestionResponse};
use crate::models::Question;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service_core::error::AppError;

/// Partition key the list endpoint is scoped to. Fixed by contract; created
/// questions default into it so they show up in subsequent lists.
pub const DEFAULT_QUIZ: &str = "gcp";

pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let questions = state.questions.get_all_questions(DEFAULT_QUIZ).await?;

    metrics::counter!("questions_listed_total").increment(1);

    let response: Vec<QuestionResponse> = questions
        .into_iter()
        .map(QuestionResponse::from)
        .collect();

    Ok(Json(response))
}

pub async fn create_question(
    State(state): State<AppState>,
    Json(request): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let question = Question::new(
        request.quiz.unwrap_or_else(|| DEFAULT_QUIZ.to_string()),
        request.text,
        request.author,
    );

    tracing::info!(
        question_id = %question.id,
        quiz = %question.quiz,
        "Creating question"
    );

    state.questions.create_question(question).await?;

    metrics::counter!("questions_created_total").increment(1);

    Ok(StatusCode::CREATED)
}
