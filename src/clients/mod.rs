use std::sync::Arc;

use crate::models::{
    files::responses::SignedFileUrl,
    grades::{entities::Grade, requests::UpdateGradeRequest},
    homeworks::entities::Homework,
    submissions::{entities::Submission, responses::SubmissionListResponse},
};

use crate::errors::Result;

pub mod http;

/// 提交服务客户端
#[async_trait::async_trait]
pub trait SubmissionClient: Send + Sync {
    // 通过ID获取提交详情
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 列出某作业下的提交（分页）
    async fn list_homework_submissions(
        &self,
        homework_id: i64,
        page: i64,
        size: i64,
    ) -> Result<SubmissionListResponse>;
    // 更新提交的评分
    async fn update_submission_grade(
        &self,
        submission_id: i64,
        request: UpdateGradeRequest,
    ) -> Result<Grade>;
    // 获取附件的签名预览 URL
    async fn get_signed_display_url(
        &self,
        submission_id: i64,
        file_key: &str,
    ) -> Result<SignedFileUrl>;
    // 获取附件的签名下载 URL
    async fn get_signed_download_url(
        &self,
        submission_id: i64,
        file_key: &str,
    ) -> Result<SignedFileUrl>;
}

/// 作业服务客户端（对本模块只读）
#[async_trait::async_trait]
pub trait HomeworkClient: Send + Sync {
    // 通过ID获取作业信息（含评分维度列表）
    async fn get_homework_by_id(&self, homework_id: i64) -> Result<Option<Homework>>;
}

pub fn create_clients() -> Result<(Arc<dyn SubmissionClient>, Arc<dyn HomeworkClient>)> {
    let client = Arc::new(http::HttpApiClient::from_config()?);
    Ok((client.clone(), client))
}
