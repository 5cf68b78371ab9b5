//! # ZH Converter
//!
//! 简繁体中文转换与分段机器翻译库。
//!
//! ## 主要特性
//!
//! - **简繁转换**: 基于 OpenCC 词典的简体↔繁体整串转换
//! - **分段翻译**: 只翻译源语言文字的片段，标点、空白、数字和标记原位保留
//! - **后端回退**: Google、DeepLX、MyMemory 依次尝试，全部失败时返回原文
//! - **标点规范化**: 清理翻译结果中重复或中英混用的问号
//! - **配置灵活**: 支持TOML配置文件和程序化配置
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use zh_converter::{ChineseConverter, TranslationConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ChineseConverter::new(&TranslationConfig::default())?;
//!
//!     println!("{}", converter.traditionalize("简体中文"));
//!     println!("{}", converter.translate_to_english("Hello 你好 World").await);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## 配置文件支持
//!
//! ```toml
//! [translation]
//! providers = ["google", "deeplx", "mymemory"]
//! google_api_url = "https://translate.googleapis.com/translate_a/single"
//! deeplx_api_url = "http://localhost:1188/translate"
//! mymemory_api_url = "https://api.mymemory.translated.net/get"
//! request_timeout_secs = 30
//! ```

pub mod chain;
pub mod config;
pub mod converter;
pub mod error;
pub mod normalize;
pub mod providers;
pub mod segmenter;
pub mod translator;
pub mod types;

pub use chain::TranslationBackendChain;
pub use config::AppConfig;
pub use converter::ScriptConverter;
pub use error::{Result, TranslationError};
pub use normalize::normalize_question_marks;
pub use providers::{DeepLXProvider, GoogleProvider, MyMemoryProvider, TranslationProvider};
pub use segmenter::{segment, segment_script, ScriptClass};
pub use translator::{ChineseConverter, TranslationService};
pub use types::{
    Action, Language, ProviderKind, Run, RunKind, TranslationConfig, TranslationRequest,
};
