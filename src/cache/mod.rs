//! 签名 URL 缓存
//!
//! 签名 URL 由文件存储服务限时签发，这里用 Moka 做短 TTL 缓存，
//! 避免同一附件反复请求签名。TTL 必须短于后端签名的有效期。

use moka::future::Cache;
use tracing::debug;

use crate::config::AppConfig;
use crate::models::files::responses::SignedFileUrl;

/// 签名 URL 的用途
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlVariant {
    Display,
    Download,
}

impl UrlVariant {
    fn as_str(&self) -> &'static str {
        match self {
            UrlVariant::Display => "display",
            UrlVariant::Download => "download",
        }
    }
}

pub struct SignedUrlCache {
    inner: Cache<String, SignedFileUrl>,
}

impl Default for SignedUrlCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SignedUrlCache {
    pub fn new() -> Self {
        let config = AppConfig::get();
        Self::with_settings(config.cache.max_capacity, config.cache.signed_url_ttl)
    }

    pub fn with_settings(max_capacity: u64, ttl: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(std::time::Duration::from_secs(ttl))
            .build();

        debug!(
            "SignedUrlCache initialized with max capacity {} and ttl {}s",
            max_capacity, ttl
        );
        Self { inner }
    }

    fn key(submission_id: i64, file_key: &str, variant: UrlVariant) -> String {
        format!("{submission_id}:{}:{file_key}", variant.as_str())
    }

    pub async fn get(
        &self,
        submission_id: i64,
        file_key: &str,
        variant: UrlVariant,
    ) -> Option<SignedFileUrl> {
        let key = Self::key(submission_id, file_key, variant);
        if let Some(value) = self.inner.get(&key).await {
            debug!("Signed URL cache hit: {}", key);
            Some(value)
        } else {
            debug!("Signed URL cache miss: {}", key);
            None
        }
    }

    pub async fn insert(
        &self,
        submission_id: i64,
        file_key: &str,
        variant: UrlVariant,
        url: SignedFileUrl,
    ) {
        // 统一使用构建时设置的全局 TTL，不按条目单独过期
        self.inner
            .insert(Self::key(submission_id, file_key, variant), url)
            .await;
    }

    pub async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}
