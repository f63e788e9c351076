//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_gradeflow_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum GradeFlowError {
            $($variant(String),)*
        }

        impl GradeFlowError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(GradeFlowError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(GradeFlowError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(GradeFlowError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl GradeFlowError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        GradeFlowError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_gradeflow_errors! {
    Network("E001", "Network Error"),
    Service("E002", "Service Error"),
    NotFound("E003", "Resource Not Found"),
    Serialization("E004", "Serialization Error"),
    Validation("E005", "Validation Error"),
    SaveInProgress("E006", "Save In Progress"),
    Preview("E007", "Preview Error"),
    DateParse("E008", "Date Parse Error"),
    Configuration("E009", "Configuration Error"),
}

impl GradeFlowError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GradeFlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GradeFlowError {}

// 为常见的错误类型实现 From trait
impl From<reqwest::Error> for GradeFlowError {
    fn from(err: reqwest::Error) -> Self {
        GradeFlowError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for GradeFlowError {
    fn from(err: serde_json::Error) -> Self {
        GradeFlowError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for GradeFlowError {
    fn from(err: chrono::ParseError) -> Self {
        GradeFlowError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for GradeFlowError {
    fn from(err: config::ConfigError) -> Self {
        GradeFlowError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GradeFlowError>;
