//! 基于 reqwest 的协作服务客户端实现
//!
//! 所有协作服务共用同一信封格式，见 `models::common::response`。

use std::time::Duration;

use reqwest::header;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::errors::{GradeFlowError, Result};
use crate::models::{ApiResponse, ErrorCode};

mod homeworks;
mod submissions;

pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    /// 从全局配置构建客户端
    pub fn from_config() -> Result<Self> {
        let config = AppConfig::get();
        Self::new(
            &config.api.base_url,
            config.api.timeout,
            &config.api.session_cookie,
        )
    }

    pub fn new(base_url: &str, timeout: u64, session_cookie: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        // 会话 Cookie 由宿主应用注入，这里原样转发
        if !session_cookie.is_empty() {
            let value = header::HeaderValue::from_str(session_cookie)
                .map_err(|e| GradeFlowError::configuration(format!("无效的会话 Cookie: {e}")))?;
            headers.insert(header::COOKIE, value);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout))
            .default_headers(headers)
            .build()
            .map_err(|e| GradeFlowError::network(format!("构建 HTTP 客户端失败: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET 并解包信封；业务码 404xx 映射为 Ok(None)
    pub(super) async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>> {
        let envelope: ApiResponse<T> = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| GradeFlowError::network(format!("请求失败 {path}: {e}")))?
            .json()
            .await
            .map_err(|e| GradeFlowError::serialization(format!("解析响应失败 {path}: {e}")))?;

        if envelope.is_success() {
            match envelope.data {
                Some(data) => Ok(Some(data)),
                None => Err(GradeFlowError::serialization(format!(
                    "响应缺少 data 字段: {path}"
                ))),
            }
        } else if ErrorCode::is_not_found(envelope.code) {
            Ok(None)
        } else {
            Err(GradeFlowError::service(format!(
                "{path}: [{}] {}",
                envelope.code, envelope.message
            )))
        }
    }

    /// GET 并解包信封；资源必须存在
    pub(super) async fn get_required<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.get_optional(path, query)
            .await?
            .ok_or_else(|| GradeFlowError::not_found(format!("资源不存在: {path}")))
    }

    /// PUT JSON 并解包信封
    pub(super) async fn put_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let envelope: ApiResponse<T> = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| GradeFlowError::network(format!("请求失败 {path}: {e}")))?
            .json()
            .await
            .map_err(|e| GradeFlowError::serialization(format!("解析响应失败 {path}: {e}")))?;

        if envelope.is_success() {
            envelope.data.ok_or_else(|| {
                GradeFlowError::serialization(format!("响应缺少 data 字段: {path}"))
            })
        } else if ErrorCode::is_not_found(envelope.code) {
            Err(GradeFlowError::not_found(envelope.message))
        } else {
            Err(GradeFlowError::service(format!(
                "{path}: [{}] {}",
                envelope.code, envelope.message
            )))
        }
    }
}
