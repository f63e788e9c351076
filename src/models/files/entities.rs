use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionFile {
    // 对象存储中的键，提交后不可变
    pub s3_key: String,
    // 原始文件名
    pub file_name: String,
}
