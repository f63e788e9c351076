//! GradeFlow - 作业批改会话引擎
//!
//! 教师端批改流程的内存状态机，独立于任何 UI 框架，
//! 通过 REST 协作服务读取提交与作业数据并回写评分。
//!
//! # 架构
//! - `cache`: 签名 URL 缓存（Moka）
//! - `clients`: 协作服务客户端（提交服务 / 作业服务）
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `session`: 批改会话状态机
//! - `utils`: 工具函数

pub mod cache;
pub mod clients;
pub mod config;
pub mod errors;
pub mod models;
pub mod session;
pub mod utils;
