use tracing::{debug, error};

use super::GradingSession;
use crate::errors::{GradeFlowError, Result};
use crate::models::grades::entities::Grade;
use crate::models::submissions::entities::SubmissionStatus;
use crate::session::draft::GradeDraft;

pub(super) async fn save_grade(session: &mut GradingSession) -> Result<Grade> {
    if session.saving {
        return Err(GradeFlowError::save_in_progress(
            "A save for this submission is already in flight",
        ));
    }

    let (submission_id, request) = {
        let current = session
            .current
            .as_ref()
            .ok_or_else(|| GradeFlowError::validation("No submission selected"))?;

        // 存在校验错误时直接拒绝，不发起网络请求
        if current.draft.has_errors() {
            return Err(GradeFlowError::validation(
                "Please correct the input errors before saving",
            ));
        }

        (
            current.submission.id,
            current
                .draft
                .to_update_request(session.grader_id, chrono::Utc::now()),
        )
    };

    session.saving = true;
    let result = session
        .submissions
        .update_submission_grade(submission_id, request)
        .await;
    session.saving = false;

    let grade = match result {
        Ok(grade) => grade,
        Err(e) => {
            // 保存失败：草稿原样保留，由用户自行重试
            error!("Failed to save grade for submission {}: {}", submission_id, e);
            return Err(e);
        }
    };

    debug!(
        "Session {}: grade saved for submission {}",
        session.session_id, submission_id
    );

    // 用户已切换到其他提交：结果过期，不再应用
    let Some(current) = session.current.as_mut() else {
        return Ok(grade);
    };
    if current.submission.id != submission_id {
        debug!(
            "Discarding save response for superseded submission {}",
            submission_id
        );
        return Ok(grade);
    }

    // 以服务端返回为准，重建草稿（幂等的重新同步）
    current.submission.grade = Some(grade.clone());
    current.submission.status = SubmissionStatus::Graded;
    current.draft = GradeDraft::new(&session.homework.rubric, Some(&grade));

    // 同步导航列表中的状态标记
    if let Some(item) = session.order.iter_mut().find(|item| item.id == submission_id) {
        item.status = SubmissionStatus::Graded;
    }

    Ok(grade)
}
