//! 错误处理模块
//!
//! 定义转换库中使用的错误类型。翻译后端的失败一律以 `Err` 返回，
//! 由后端链决定是否回退到下一个后端。

use thiserror::Error;

/// 转换与翻译错误类型
///
/// # 变体说明
///
/// * `Http` - HTTP请求错误
/// * `ApiError` - 后端返回了非成功的状态或代码
/// * `ParseError` - 后端响应无法解析
/// * `EmptyResult` - 后端返回了空的翻译结果
/// * `AllProvidersFailed` - 所有翻译后端都失败
/// * `UnknownAction` - 命令行动作无法识别
/// * `Converter` - 简繁转换器初始化失败
#[derive(Error, Debug)]
pub enum TranslationError {
    /// HTTP请求错误
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API响应错误
    #[error("API error {code}: {message}")]
    ApiError {
        /// 错误代码
        code: i32,
        /// 错误消息
        message: String,
    },

    /// 解析错误
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("{provider} returned an empty translation")]
    EmptyResult { provider: String },

    /// 所有后端都失败，附带每个后端的失败原因
    #[error("All translation providers failed: {0}")]
    AllProvidersFailed(String),

    #[error(
        "Invalid action. Use 'simplify', 'traditionalize', 'translate_en', 'translate_de', \
         'translate_vi', 'translate_zh_simp', or 'translate_zh_trad'. Received: {0}"
    )]
    UnknownAction(String),

    #[error("Unknown translation provider: {0}")]
    UnknownProvider(String),

    /// 简繁转换器错误
    #[error("Script converter error: {0}")]
    Converter(String),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// 自定义错误消息
    #[error("{0}")]
    Custom(String),
}

impl From<String> for TranslationError {
    fn from(error: String) -> Self {
        TranslationError::Custom(error)
    }
}

impl From<&str> for TranslationError {
    fn from(error: &str) -> Self {
        TranslationError::Custom(error.to_string())
    }
}

/// 结果类型别名
///
/// # 示例
///
/// ```rust
/// use zh_converter::{Result, TranslationError};
///
/// fn example_function() -> Result<String> {
///     Err(TranslationError::from("no provider configured"))
/// }
///
/// assert!(example_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, TranslationError>;
