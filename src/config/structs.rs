use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub cache: CacheConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 后端服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String, // 提交/作业服务的基础 URL
    pub timeout: u64,     // 请求超时 (秒)
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub session_cookie: String, // 会话 Cookie（由宿主应用注入）
}

/// 签名 URL 缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub max_capacity: u64,
    pub signed_url_ttl: u64, // 缓存 TTL (秒)，应短于后端签名 URL 的有效期
}
