use axum::{
    body::Bytes,
    extract::State,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::{error::AppError, gemini::UpstreamError, AppState};

use super::models::{AskRequest, AskResponse};

const INDEX_HTML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));

const MISSING_QUESTION: &str = "Необходим параметр question.";
const EMPTY_ANSWER: &str = "Ошибка: пустой ответ от модели.";

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Upstream failures are reported inside `answer` with a 200 status; only a
/// bad request body produces an error status.
pub async fn ask(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AskResponse>, AppError> {
    let payload: AskRequest = serde_json::from_slice(&body)?;

    let question = payload.question.as_deref().unwrap_or_default();
    if question.is_empty() {
        return Err(AppError::Validation(MISSING_QUESTION.to_string()));
    }

    let mut chat = state.gemini.start_chat(Vec::new());
    let answer = match chat.send_message(question).await {
        Ok(answer) => answer,
        Err(err) => {
            tracing::warn!(model = %state.gemini.model(), error = %err, "upstream call failed");
            upstream_failure_message(&err)
        }
    };

    Ok(Json(AskResponse { answer }))
}

pub async fn not_found() -> Response {
    AppError::NotFound.into_response()
}

fn upstream_failure_message(err: &UpstreamError) -> String {
    match err {
        UpstreamError::EmptyResponse => EMPTY_ANSWER.to_string(),
        other => format!("Ошибка при обращении к API: {other}"),
    }
}
