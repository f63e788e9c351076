use serde::{Deserialize, Serialize};

use crate::models::PaginationInfo;
use crate::models::submissions::entities::{SubmissionCreator, SubmissionStatus};

/// 提交列表项（会话导航排序用）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionListItem {
    pub id: i64,
    pub creator: SubmissionCreator,
    pub status: SubmissionStatus,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 提交列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionListResponse {
    pub items: Vec<SubmissionListItem>,
    pub pagination: PaginationInfo,
}
