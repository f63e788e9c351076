use serde::{Deserialize, Serialize};

/// 限时签名访问 URL
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedFileUrl {
    pub url: String,
    // 后端签发的过期时间
    pub expires_at: chrono::DateTime<chrono::Utc>,
}
