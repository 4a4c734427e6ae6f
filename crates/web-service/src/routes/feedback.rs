//! 实习反馈接口

use crate::models::common::Reply;
use crate::models::err::AppError;
use crate::models::feedback::{FeedbackInfo, FeedbackSubmission};
use crate::services::feedback;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

/// 提交实习反馈
///
/// 只有在实习结束之后才能提交，同一次实习只能提交一次。
#[utoipa::path(post,
    path = "/feedback",
    tag = "feedback",
    request_body = FeedbackSubmission,
    responses(
        (status = 201, description = "Feedback saved", body = Reply<FeedbackInfo>),
        (status = 400, description = "Invalid feedback or internship not finished"),
        (status = 409, description = "Feedback already submitted")
    ),
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<Reply<FeedbackInfo>>), AppError> {
    let Json(submission) = payload?;
    debug!("📝 提交实习反馈 {:#?}", submission);

    let created = feedback::submit_feedback(&state, submission).await?;
    Ok((StatusCode::CREATED, Json(Reply { data: created })))
}
