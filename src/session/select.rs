use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use super::{CurrentSubmission, GradingSession};
use crate::cache::{SignedUrlCache, UrlVariant};
use crate::clients::{HomeworkClient, SubmissionClient};
use crate::errors::{GradeFlowError, Result};
use crate::models::files::entities::SubmissionFile;
use crate::session::draft::GradeDraft;
use crate::session::preview::{PreviewKind, PreviewState, preview_kind};

// 拉取提交列表时的单页大小（与后端上限一致）
const LIST_PAGE_SIZE: i64 = 100;

pub(super) async fn open(
    homework_id: i64,
    grader_id: i64,
    homeworks: Arc<dyn HomeworkClient>,
    submissions: Arc<dyn SubmissionClient>,
    url_cache: SignedUrlCache,
) -> Result<GradingSession> {
    let homework = homeworks
        .get_homework_by_id(homework_id)
        .await?
        .ok_or_else(|| GradeFlowError::not_found(format!("作业不存在: {homework_id}")))?;

    // 逐页累积全部提交
    let mut order = Vec::new();
    let mut page = 1;
    loop {
        let response = submissions
            .list_homework_submissions(homework_id, page, LIST_PAGE_SIZE)
            .await?;
        order.extend(response.items);
        if page >= response.pagination.total_pages {
            break;
        }
        page += 1;
    }

    // 最近更新优先；并列时按 ID 倒序，保证顺序稳定
    order.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));

    let session_id = Uuid::new_v4();
    debug!(
        "Grading session {} opened for homework {} with {} submissions",
        session_id,
        homework_id,
        order.len()
    );

    Ok(GradingSession {
        session_id,
        homework,
        grader_id,
        order,
        current: None,
        saving: false,
        generation: 0,
        submissions,
        url_cache,
    })
}

pub(super) async fn select_submission(
    session: &mut GradingSession,
    submission_id: i64,
) -> Result<()> {
    // 旧提交与未保存草稿立即作废，避免在提交之间串台
    session.current = None;
    session.generation += 1;
    let generation = session.generation;

    debug!(
        "Session {}: selecting submission {}",
        session.session_id, submission_id
    );

    let submission = session
        .submissions
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| GradeFlowError::not_found(format!("提交不存在: {submission_id}")))?;

    // 等待期间已发起新的选择：丢弃本次过期响应
    if session.generation != generation {
        debug!("Discarding stale submission response for {}", submission_id);
        return Ok(());
    }

    let draft = GradeDraft::new(&session.homework.rubric, submission.grade.as_ref());
    let default_file = default_preview_file(&submission.submitted_files).cloned();
    session.current = Some(CurrentSubmission {
        submission,
        draft,
        preview: None,
    });

    // 默认预览第一个分页文档附件，否则第一个附件；预览失败不阻塞批改
    if let Some(file) = default_file
        && let Err(e) = select_file(session, &file.s3_key).await
    {
        warn!("Default preview failed for {}: {}", file.file_name, e);
    }

    Ok(())
}

/// 优先选择第一个分页文档格式的附件
fn default_preview_file(files: &[SubmissionFile]) -> Option<&SubmissionFile> {
    files
        .iter()
        .find(|file| preview_kind(&file.file_name) == PreviewKind::PagedDocument)
        .or_else(|| files.first())
}

pub(super) async fn select_file(session: &mut GradingSession, s3_key: &str) -> Result<()> {
    let generation = session.generation;

    let (submission_id, file) = {
        let current = session
            .current
            .as_ref()
            .ok_or_else(|| GradeFlowError::validation("No submission selected"))?;
        let file = current
            .submission
            .submitted_files
            .iter()
            .find(|file| file.s3_key == s3_key)
            .ok_or_else(|| GradeFlowError::not_found(format!("附件不存在: {s3_key}")))?
            .clone();
        (current.submission.id, file)
    };

    let preview = match preview_kind(&file.file_name) {
        PreviewKind::PagedDocument => match signed_url(session, submission_id, s3_key, UrlVariant::Display).await {
            Ok(url) => PreviewState::paged(file, url),
            Err(e) => download_fallback(session, submission_id, file, e).await?,
        },
        PreviewKind::Image => match signed_url(session, submission_id, s3_key, UrlVariant::Display).await {
            Ok(url) => PreviewState::image(file, url),
            Err(e) => download_fallback(session, submission_id, file, e).await?,
        },
        PreviewKind::Unsupported => {
            // 无法内联预览的格式直接提供下载入口
            let url = signed_url(session, submission_id, s3_key, UrlVariant::Download).await?;
            PreviewState::download(file, url)
        }
    };

    // 等待期间提交已切换：丢弃过期的预览结果
    if session.generation != generation {
        debug!("Discarding stale preview for {}", s3_key);
        return Ok(());
    }
    if let Some(current) = session.current.as_mut()
        && current.submission.id == submission_id
    {
        current.preview = Some(preview);
    }

    Ok(())
}

/// 预览 URL 获取失败时的降级路径：记录并改为提供下载
async fn download_fallback(
    session: &GradingSession,
    submission_id: i64,
    file: SubmissionFile,
    cause: GradeFlowError,
) -> Result<PreviewState> {
    warn!(
        "Preview unavailable for {}, falling back to download: {}",
        file.file_name, cause
    );
    let url = signed_url(session, submission_id, &file.s3_key, UrlVariant::Download).await?;
    Ok(PreviewState::download(file, url))
}

/// 经缓存获取签名 URL
async fn signed_url(
    session: &GradingSession,
    submission_id: i64,
    file_key: &str,
    variant: UrlVariant,
) -> Result<String> {
    if let Some(cached) = session.url_cache.get(submission_id, file_key, variant).await {
        return Ok(cached.url);
    }

    let signed = match variant {
        UrlVariant::Display => {
            session
                .submissions
                .get_signed_display_url(submission_id, file_key)
                .await?
        }
        UrlVariant::Download => {
            session
                .submissions
                .get_signed_download_url(submission_id, file_key)
                .await?
        }
    };

    session
        .url_cache
        .insert(submission_id, file_key, variant, signed.clone())
        .await;
    Ok(signed.url)
}
