use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::grades::entities::LetterGrade;
use crate::models::submissions::entities::SubmissionStatus;

/// 更新评分请求（提交服务 update-grade 端点的载荷）
///
/// 未填写的数字项序列化为 null，而不是省略字段。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGradeRequest {
    pub score: Option<i32>,
    pub rubric_scores: BTreeMap<String, Option<i32>>,
    pub letter_grade: Option<LetterGrade>,
    pub feedback: String,
    pub graded_by: i64,
    pub graded_at: chrono::DateTime<chrono::Utc>,
    // 保存评分的同时把提交置为已评分
    pub submission_status: SubmissionStatus,
}
