use serde::{Deserialize, Serialize};

use crate::models::files::entities::SubmissionFile;
use crate::models::grades::entities::Grade;

/// 提交状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Submitted,
    Graded,
}

/// 提交者信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionCreator {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
}

/// 学生提交
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    // 唯一 ID
    pub id: i64,
    // 关联的作业 ID
    pub homework_id: i64,
    // 提交者
    pub creator: SubmissionCreator,
    // 附件列表，提交后不可变
    #[serde(default)]
    pub submitted_files: Vec<SubmissionFile>,
    // 提交状态
    pub status: SubmissionStatus,
    // 评分，未评分时为空
    pub grade: Option<Grade>,
    // 提交时间
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    // 最近更新时间（导航排序依据）
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
