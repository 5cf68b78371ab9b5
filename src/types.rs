//! 类型定义模块
//!
//! 定义转换库中使用的数据结构、配置类型和后端的请求/响应格式。

use crate::error::TranslationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 翻译后端种类
///
/// 配置文件中按顺序列出，顺序即回退优先级。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    #[serde(rename = "google")]
    Google,
    #[serde(rename = "deeplx")]
    DeepLX,
    #[serde(rename = "mymemory")]
    MyMemory,
}

impl ProviderKind {
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::DeepLX => "deeplx",
            ProviderKind::MyMemory => "mymemory",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(ProviderKind::Google),
            "deeplx" => Ok(ProviderKind::DeepLX),
            "mymemory" => Ok(ProviderKind::MyMemory),
            other => Err(TranslationError::UnknownProvider(other.to_string())),
        }
    }
}

/// 翻译配置
///
/// 包含翻译后端的顺序、各后端地址以及HTTP客户端参数。
///
/// # 字段说明
///
/// * `providers` - 后端回退顺序
/// * `google_api_url` - Google 免费翻译接口地址
/// * `deeplx_api_url` - DeepLX API地址
/// * `mymemory_api_url` - MyMemory API地址
/// * `mymemory_email` - 可选的 MyMemory 账号邮箱，用于提高免费额度
/// * `request_timeout_secs` - 单次请求超时时间（秒）
/// * `user_agent` - HTTP请求使用的 User-Agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// 后端回退顺序
    pub providers: Vec<ProviderKind>,
    /// Google 免费翻译接口地址
    pub google_api_url: String,
    /// DeepLX API地址
    pub deeplx_api_url: String,
    /// MyMemory API地址
    pub mymemory_api_url: String,
    /// MyMemory 账号邮箱
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mymemory_email: Option<String>,
    /// 单次请求超时时间（秒）
    pub request_timeout_secs: u64,
    /// HTTP User-Agent
    pub user_agent: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            providers: vec![ProviderKind::Google, ProviderKind::DeepLX, ProviderKind::MyMemory],
            google_api_url: "https://translate.googleapis.com/translate_a/single".to_string(),
            deeplx_api_url: "http://localhost:1188/translate".to_string(),
            mymemory_api_url: "https://api.mymemory.translated.net/get".to_string(),
            mymemory_email: None,
            request_timeout_secs: 30,
            user_agent: "Mozilla/5.0 (compatible; ZhConverter/0.1)".to_string(),
        }
    }
}

/// 翻译涉及的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    ChineseSimplified,
    English,
    German,
    Vietnamese,
}

impl Language {
    /// ISO 639-1 语言代码
    pub fn code(self) -> &'static str {
        match self {
            Language::ChineseSimplified => "zh",
            Language::English => "en",
            Language::German => "de",
            Language::Vietnamese => "vi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 命令行支持的七个动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Simplify,
    Traditionalize,
    TranslateEn,
    TranslateDe,
    TranslateVi,
    TranslateZhSimp,
    TranslateZhTrad,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Simplify,
        Action::Traditionalize,
        Action::TranslateEn,
        Action::TranslateDe,
        Action::TranslateVi,
        Action::TranslateZhSimp,
        Action::TranslateZhTrad,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Simplify => "simplify",
            Action::Traditionalize => "traditionalize",
            Action::TranslateEn => "translate_en",
            Action::TranslateDe => "translate_de",
            Action::TranslateVi => "translate_vi",
            Action::TranslateZhSimp => "translate_zh_simp",
            Action::TranslateZhTrad => "translate_zh_trad",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| TranslationError::UnknownAction(s.to_string()))
    }
}

/// 文本片段的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// 属于目标文字（汉字或拉丁字母）的片段
    Script,
    /// 其余字符
    Other,
}

/// 文本片段
///
/// `start`/`end` 是输入字符串中的 UTF-8 字节偏移，左闭右开。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub kind: RunKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Run {
    pub fn is_script(&self) -> bool {
        self.kind == RunKind::Script
    }
}

/// 单次翻译请求，每个片段构造一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: Language,
    pub target_lang: Language,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, source_lang: Language, target_lang: Language) -> Self {
        Self {
            text: text.into(),
            source_lang,
            target_lang,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeepLXRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Deserialize)]
pub struct DeepLXResponse {
    pub code: i32,
    pub data: String,
}

/// MyMemory 响应体，`responseStatus` 可能是数字也可能是字符串
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyMemoryResponse {
    pub response_data: MyMemoryData,
    pub response_status: serde_json::Value,
    #[serde(default)]
    pub response_details: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyMemoryData {
    pub translated_text: String,
}
