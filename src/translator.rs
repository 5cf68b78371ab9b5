//! 翻译服务核心模块
//!
//! 把输入按文字分段，只翻译源语言文字的片段，其余片段原样保留，
//! 按原顺序拼接后做一次标点规范化。

use crate::chain::TranslationBackendChain;
use crate::converter::ScriptConverter;
use crate::error::Result;
use crate::normalize::normalize_question_marks;
use crate::segmenter::{segment_script, ScriptClass};
use crate::types::{Action, Language, TranslationConfig, TranslationRequest};

/// 分段翻译服务
///
/// # 示例
///
/// ```rust,no_run
/// use zh_converter::{Language, TranslationConfig, TranslationService};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let service = TranslationService::new(&TranslationConfig::default());
///     let english = service
///         .translate_mixed_script("Hello 你好 World", Language::English)
///         .await;
///     println!("{}", english);
/// }
/// ```
#[derive(Debug)]
pub struct TranslationService {
    chain: TranslationBackendChain,
}

impl TranslationService {
    /// 按配置创建后端链
    pub fn new(config: &TranslationConfig) -> Self {
        Self::with_chain(TranslationBackendChain::from_config(config))
    }

    /// 使用指定的后端链，便于注入测试用后端
    pub fn with_chain(chain: TranslationBackendChain) -> Self {
        Self { chain }
    }

    pub fn chain(&self) -> &TranslationBackendChain {
        &self.chain
    }

    /// 中文 → `target`
    ///
    /// 只有 U+4E00..=U+9FFF 的连续汉字片段会被送去翻译。
    pub async fn translate_mixed_script(&self, text: &str, target: Language) -> String {
        self.translate_runs(text, ScriptClass::Han, Language::ChineseSimplified, target)
            .await
    }

    /// 英文 → 简体中文
    ///
    /// 每个连续的 ASCII 字母片段单独翻译，空格、数字和标点保持原位。
    pub async fn translate_mixed_script_reverse(&self, text: &str) -> String {
        self.translate_runs(
            text,
            ScriptClass::Latin,
            Language::English,
            Language::ChineseSimplified,
        )
        .await
    }

    async fn translate_runs(
        &self,
        text: &str,
        class: ScriptClass,
        source: Language,
        target: Language,
    ) -> String {
        if text.is_empty() {
            return String::new();
        }

        let runs = segment_script(text, class);
        let script_runs = runs.iter().filter(|run| run.is_script()).count();
        tracing::debug!(
            "{} runs, {} to translate ({} -> {})",
            runs.len(),
            script_runs,
            source,
            target
        );

        let mut assembled = String::with_capacity(text.len());
        for run in runs {
            if run.is_script() {
                let request = TranslationRequest::new(run.text, source, target);
                assembled.push_str(&self.chain.translate(&request).await);
            } else {
                assembled.push_str(&run.text);
            }
        }

        normalize_question_marks(&assembled)
    }
}

/// 简繁转换与翻译的统一入口
///
/// 对应命令行的七个动作。
#[derive(Debug)]
pub struct ChineseConverter {
    script: ScriptConverter,
    service: TranslationService,
}

impl ChineseConverter {
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        Ok(Self::with_service(
            ScriptConverter::new()?,
            TranslationService::new(config),
        ))
    }

    pub fn with_service(script: ScriptConverter, service: TranslationService) -> Self {
        Self { script, service }
    }

    /// 繁体 → 简体
    pub fn simplify(&self, text: &str) -> String {
        self.script.to_simplified(text)
    }

    /// 简体 → 繁体
    pub fn traditionalize(&self, text: &str) -> String {
        self.script.to_traditional(text)
    }

    pub async fn translate_to_english(&self, text: &str) -> String {
        self.service.translate_mixed_script(text, Language::English).await
    }

    pub async fn translate_to_german(&self, text: &str) -> String {
        self.service.translate_mixed_script(text, Language::German).await
    }

    pub async fn translate_to_vietnamese(&self, text: &str) -> String {
        self.service.translate_mixed_script(text, Language::Vietnamese).await
    }

    pub async fn translate_to_chinese_simplified(&self, text: &str) -> String {
        self.service.translate_mixed_script_reverse(text).await
    }

    /// 先翻译成简体中文，再转换为繁体
    pub async fn translate_to_chinese_traditional(&self, text: &str) -> String {
        let simplified = self.translate_to_chinese_simplified(text).await;
        self.script.to_traditional(&simplified)
    }

    /// 按动作分发
    pub async fn run(&self, action: Action, text: &str) -> String {
        match action {
            Action::Simplify => self.simplify(text),
            Action::Traditionalize => self.traditionalize(text),
            Action::TranslateEn => self.translate_to_english(text).await,
            Action::TranslateDe => self.translate_to_german(text).await,
            Action::TranslateVi => self.translate_to_vietnamese(text).await,
            Action::TranslateZhSimp => self.translate_to_chinese_simplified(text).await,
            Action::TranslateZhTrad => self.translate_to_chinese_traditional(text).await,
        }
    }
}
