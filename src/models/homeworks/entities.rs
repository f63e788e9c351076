use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Homework {
    // 唯一 ID
    pub id: i64,
    // 作业标题
    pub title: String,
    // 作业描述
    pub content: Option<String>,
    // 评分维度列表，顺序即展示顺序
    #[serde(default)]
    pub rubric: Vec<RubricCompetency>,
    // 作业截止时间
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
    // 作业创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 作业更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 评分维度
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricCompetency {
    // 维度键，作业内唯一
    pub key: String,
    // 展示名称
    pub title: String,
    // 维度说明
    pub description: Option<String>,
}
