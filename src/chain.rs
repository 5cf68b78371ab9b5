//! 翻译后端链
//!
//! 按固定顺序依次尝试各个后端，返回第一个成功的结果。

use crate::error::{Result, TranslationError};
use crate::providers::{providers_from_config, TranslationProvider};
use crate::types::{TranslationConfig, TranslationRequest};

/// 有序的翻译后端列表
///
/// 顺序是构建时给定的固定配置，运行期间不会改变。
pub struct TranslationBackendChain {
    providers: Vec<Box<dyn TranslationProvider>>,
}

impl TranslationBackendChain {
    pub fn new(providers: Vec<Box<dyn TranslationProvider>>) -> Self {
        Self { providers }
    }

    /// 按配置中的 `providers` 顺序构建
    pub fn from_config(config: &TranslationConfig) -> Self {
        Self::new(providers_from_config(config))
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// 依次尝试每个后端，第一个 `Ok` 即返回
    ///
    /// 每个失败的后端记录一行 `warn` 日志。全部失败时返回
    /// [`TranslationError::AllProvidersFailed`]，其中列出每个后端的失败原因。
    pub async fn try_translate(&self, request: &TranslationRequest) -> Result<String> {
        let mut failures = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            match provider.translate(request).await {
                Ok(translated) => {
                    tracing::debug!(
                        "{} translated {} chars ({} -> {})",
                        provider.name(),
                        request.text.chars().count(),
                        request.source_lang,
                        request.target_lang
                    );
                    return Ok(translated);
                }
                Err(e) => {
                    tracing::warn!("{} translation error: {}", provider.name(), e);
                    failures.push(format!("{}: {}", provider.name(), e));
                }
            }
        }

        if failures.is_empty() {
            return Err(TranslationError::AllProvidersFailed(
                "no translation providers configured".to_string(),
            ));
        }
        Err(TranslationError::AllProvidersFailed(failures.join("; ")))
    }

    /// 翻译失败时原样返回输入
    pub async fn translate(&self, request: &TranslationRequest) -> String {
        match self.try_translate(request).await {
            Ok(translated) => translated,
            Err(e) => {
                tracing::debug!("keeping original text: {}", e);
                request.text.clone()
            }
        }
    }
}

impl std::fmt::Debug for TranslationBackendChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationBackendChain")
            .field("providers", &self.provider_names())
            .finish()
    }
}
