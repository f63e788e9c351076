//! 批改会话状态机
//!
//! 管理教师批改单次作业的完整流程：选中提交、编辑评分草稿、
//! 保存评分、在提交之间导航，以及附件预览。
//! 所有状态归唯一的会话实例独占，与具体 UI 框架无关。

pub mod draft;
pub mod preview;

mod navigate;
mod save;
mod select;

pub use draft::{GradeDraft, GradeField, ScoreInput};
pub use navigate::Direction;
pub use preview::{PreviewDisplay, PreviewKind, PreviewState};

use std::sync::Arc;

use uuid::Uuid;

use crate::cache::SignedUrlCache;
use crate::clients::{HomeworkClient, SubmissionClient};
use crate::errors::{GradeFlowError, Result};
use crate::models::grades::entities::Grade;
use crate::models::homeworks::entities::Homework;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::responses::SubmissionListItem;

/// 正在批改的提交及其会话内状态
#[derive(Debug, Clone)]
pub(crate) struct CurrentSubmission {
    submission: Submission,
    draft: GradeDraft,
    preview: Option<PreviewState>,
}

/// 批改会话控制器
pub struct GradingSession {
    // 会话 ID，仅用于日志关联
    session_id: Uuid,
    homework: Homework,
    grader_id: i64,
    // 提交列表，按 updated_at 倒序
    order: Vec<SubmissionListItem>,
    current: Option<CurrentSubmission>,
    // 阻止同一提交的并发保存
    saving: bool,
    // 每次选择递增；用于丢弃过期的异步响应
    generation: u64,
    submissions: Arc<dyn SubmissionClient>,
    url_cache: SignedUrlCache,
}

impl GradingSession {
    /// 打开批改会话：拉取作业（含评分维度）与全部提交列表
    pub async fn open(
        homework_id: i64,
        grader_id: i64,
        homeworks: Arc<dyn HomeworkClient>,
        submissions: Arc<dyn SubmissionClient>,
        url_cache: SignedUrlCache,
    ) -> Result<Self> {
        select::open(homework_id, grader_id, homeworks, submissions, url_cache).await
    }

    /// 选中一个提交并拉取详情；上一个提交的未保存草稿随之丢弃
    pub async fn select_submission(&mut self, submission_id: i64) -> Result<()> {
        select::select_submission(self, submission_id).await
    }

    /// 选中当前提交的某个附件进行预览
    pub async fn select_file(&mut self, s3_key: &str) -> Result<()> {
        select::select_file(self, s3_key).await
    }

    /// 更新总分输入
    pub fn update_score(&mut self, raw: &str) -> Result<()> {
        self.current_mut()?.draft.update_score(raw);
        Ok(())
    }

    /// 更新某评分维度的输入
    pub fn update_rubric_score(&mut self, key: &str, raw: &str) -> Result<()> {
        self.current_mut()?.draft.update_rubric_score(key, raw)
    }

    /// 更新评语（富文本，不做校验）
    pub fn update_feedback(&mut self, html: impl Into<String>) -> Result<()> {
        self.current_mut()?.draft.update_feedback(html);
        Ok(())
    }

    /// 保存当前草稿
    pub async fn save(&mut self) -> Result<Grade> {
        save::save_grade(self).await
    }

    /// 在提交列表中向前/向后导航；处于边界时不做任何事
    pub async fn navigate(&mut self, direction: Direction) -> Result<()> {
        navigate::navigate(self, direction).await
    }

    // 预览操作：无分页预览时静默忽略，与界面按钮行为一致 //

    pub fn zoom_in(&mut self) {
        if let Some(preview) = self.preview_mut() {
            preview.zoom_in();
        }
    }

    pub fn zoom_out(&mut self) {
        if let Some(preview) = self.preview_mut() {
            preview.zoom_out();
        }
    }

    pub fn set_page(&mut self, page: u32) {
        if let Some(preview) = self.preview_mut() {
            preview.set_page(page);
        }
    }

    pub fn next_page(&mut self) {
        if let Some(preview) = self.preview_mut() {
            preview.next_page();
        }
    }

    pub fn prev_page(&mut self) {
        if let Some(preview) = self.preview_mut() {
            preview.prev_page();
        }
    }

    /// 渲染器加载完成后回报总页数
    pub fn document_loaded(&mut self, pages: u32) {
        if let Some(preview) = self.preview_mut() {
            preview.document_loaded(pages);
        }
    }

    // 只读访问 //

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn homework(&self) -> &Homework {
        &self.homework
    }

    pub fn submission_order(&self) -> &[SubmissionListItem] {
        &self.order
    }

    pub fn current_submission(&self) -> Option<&Submission> {
        self.current.as_ref().map(|current| &current.submission)
    }

    pub fn draft(&self) -> Option<&GradeDraft> {
        self.current.as_ref().map(|current| &current.draft)
    }

    pub fn preview(&self) -> Option<&PreviewState> {
        self.current.as_ref().and_then(|current| current.preview.as_ref())
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    fn current_mut(&mut self) -> Result<&mut CurrentSubmission> {
        self.current
            .as_mut()
            .ok_or_else(|| GradeFlowError::validation("No submission selected"))
    }

    fn preview_mut(&mut self) -> Option<&mut PreviewState> {
        self.current
            .as_mut()
            .and_then(|current| current.preview.as_mut())
    }
}
