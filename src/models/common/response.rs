use serde::{Deserialize, Serialize};

use crate::models::ErrorCode;

// 统一的API响应结构（所有协作服务使用同一信封格式）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == ErrorCode::Success as i32
    }
}
