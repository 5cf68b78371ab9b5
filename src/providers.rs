//! 翻译后端模块
//!
//! 每个后端把一次 [`TranslationRequest`] 翻译成文本，失败时返回 `Err`，
//! 由 [`TranslationBackendChain`](crate::chain::TranslationBackendChain)
//! 决定是否换下一个后端。后端内部不做重试。

use crate::error::{Result, TranslationError};
use crate::types::{
    DeepLXRequest, DeepLXResponse, Language, MyMemoryResponse, ProviderKind, TranslationConfig,
    TranslationRequest,
};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// 翻译后端接口
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// 后端名称，用于诊断日志
    fn name(&self) -> &str;

    /// 翻译一个片段
    async fn translate(&self, request: &TranslationRequest) -> Result<String>;
}

/// 根据配置创建共享的HTTP客户端
///
/// 构建失败时退回默认客户端。
pub fn build_http_client(config: &TranslationConfig) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .pool_idle_timeout(Duration::from_secs(30))
        .tcp_keepalive(Duration::from_secs(60))
        .user_agent(config.user_agent.clone())
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to create configured client: {}, using default", e);
            Client::new()
        })
}

/// 按配置顺序创建后端列表
pub fn providers_from_config(config: &TranslationConfig) -> Vec<Box<dyn TranslationProvider>> {
    let client = build_http_client(config);

    config
        .providers
        .iter()
        .map(|kind| -> Box<dyn TranslationProvider> {
            match kind {
                ProviderKind::Google => {
                    Box::new(GoogleProvider::new(client.clone(), &config.google_api_url))
                }
                ProviderKind::DeepLX => {
                    Box::new(DeepLXProvider::new(client.clone(), &config.deeplx_api_url))
                }
                ProviderKind::MyMemory => Box::new(
                    MyMemoryProvider::new(client.clone(), &config.mymemory_api_url)
                        .with_email(config.mymemory_email.clone()),
                ),
            }
        })
        .collect()
}

/// Google / MyMemory 使用的语言代码
fn web_language_code(language: Language) -> &'static str {
    match language {
        Language::ChineseSimplified => "zh-CN",
        other => other.code(),
    }
}

/// 错误信息中附带的响应体最多保留的字符数
const MAX_BODY_EXCERPT: usize = 200;

/// 把响应体压成一行并截断，保证每次失败只产生一行诊断
fn body_excerpt(body: &str) -> String {
    let flattened = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flattened.chars().count() <= MAX_BODY_EXCERPT {
        return flattened;
    }
    let mut excerpt: String = flattened.chars().take(MAX_BODY_EXCERPT).collect();
    excerpt.push_str("...");
    excerpt
}

/// 非 2xx 响应统一转成 `ApiError`
async fn ensure_success(provider: &str, response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".to_string());
    Err(TranslationError::ApiError {
        code: i32::from(status.as_u16()),
        message: format!(
            "{} request failed: {} - {}",
            provider,
            status,
            body_excerpt(&body)
        ),
    })
}

/// Google 免费翻译接口（`client=gtx`）
#[derive(Debug, Clone)]
pub struct GoogleProvider {
    client: Client,
    api_url: String,
}

impl GoogleProvider {
    pub fn new(client: Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl TranslationProvider for GoogleProvider {
    fn name(&self) -> &str {
        ProviderKind::Google.name()
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("client", "gtx"),
                ("sl", web_language_code(request.source_lang)),
                ("tl", web_language_code(request.target_lang)),
                ("dt", "t"),
                ("q", request.text.as_str()),
            ])
            .send()
            .await?;
        let response = ensure_success(self.name(), response).await?;
        let body = response.text().await?;

        let json: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| TranslationError::ParseError(format!("google response: {}", e)))?;

        // 结果位于 [0][*][0]，长文本会被拆成多段
        let segments = json.get(0).and_then(|v| v.as_array()).ok_or_else(|| {
            TranslationError::ParseError("google response is missing the segment array".to_string())
        })?;
        let translated: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
            .collect();

        if translated.is_empty() {
            return Err(TranslationError::EmptyResult {
                provider: self.name().to_string(),
            });
        }
        Ok(translated)
    }
}

/// DeepLX 兼容接口
///
/// 标准 DeepLX 返回 `{"code": 200, "data": "..."}`；其他兼容实现可能把结果放在
/// `translated_text`、`result`、`translation` 字段里，或直接返回纯文本。
#[derive(Debug, Clone)]
pub struct DeepLXProvider {
    client: Client,
    api_url: String,
}

impl DeepLXProvider {
    pub fn new(client: Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    fn language_code(language: Language) -> &'static str {
        match language {
            Language::ChineseSimplified => "ZH",
            Language::English => "EN",
            Language::German => "DE",
            Language::Vietnamese => "VI",
        }
    }

    fn parse_body(&self, body: &str) -> Result<String> {
        if let Ok(result) = serde_json::from_str::<DeepLXResponse>(body) {
            if result.code != 200 {
                return Err(TranslationError::ApiError {
                    code: result.code,
                    message: format!("DeepLX翻译失败，返回代码: {}", result.code),
                });
            }
            if result.data.is_empty() {
                return Err(TranslationError::EmptyResult {
                    provider: self.name().to_string(),
                });
            }
            return Ok(result.data);
        }

        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Err(TranslationError::EmptyResult {
                provider: self.name().to_string(),
            });
        }

        if trimmed.starts_with('{') {
            let json_value: serde_json::Value = serde_json::from_str(trimmed).map_err(|_| {
                TranslationError::ParseError(format!(
                    "无法解析JSON响应: {}",
                    body_excerpt(trimmed)
                ))
            })?;
            return json_value
                .get("translated_text")
                .or_else(|| json_value.get("result"))
                .or_else(|| json_value.get("translation"))
                .or_else(|| json_value.get("data"))
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or_else(|| {
                    TranslationError::ParseError(format!(
                        "无法从JSON响应中提取翻译结果: {}",
                        body_excerpt(trimmed)
                    ))
                });
        }

        tracing::debug!("DeepLX响应不是JSON，按纯文本翻译结果处理");
        Ok(body.to_string())
    }
}

#[async_trait]
impl TranslationProvider for DeepLXProvider {
    fn name(&self) -> &str {
        ProviderKind::DeepLX.name()
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let payload = DeepLXRequest {
            text: request.text.clone(),
            source_lang: Self::language_code(request.source_lang).to_string(),
            target_lang: Self::language_code(request.target_lang).to_string(),
        };

        let builder = self.client.post(&self.api_url).json(&payload);
        let builder = if self.api_url.contains("dptrans") {
            builder
                .header("Accept", "application/json, text/plain, */*")
                .header(
                    "User-Agent",
                    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
                )
        } else {
            builder.header("Accept", "application/json")
        };

        let response = builder.send().await?;
        let response = ensure_success(self.name(), response).await?;
        let body = response.text().await?;
        self.parse_body(&body)
    }
}

/// MyMemory 免费翻译接口
#[derive(Debug, Clone)]
pub struct MyMemoryProvider {
    client: Client,
    api_url: String,
    email: Option<String>,
}

impl MyMemoryProvider {
    pub fn new(client: Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            email: None,
        }
    }

    /// 设置账号邮箱，MyMemory 会给带邮箱的请求更高的每日额度
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email.filter(|e| !e.trim().is_empty());
        self
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    fn name(&self) -> &str {
        ProviderKind::MyMemory.name()
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let langpair = format!(
            "{}|{}",
            web_language_code(request.source_lang),
            web_language_code(request.target_lang)
        );
        let mut query = vec![("q", request.text.as_str()), ("langpair", langpair.as_str())];
        if let Some(email) = &self.email {
            query.push(("de", email.as_str()));
        }

        let response = self.client.get(&self.api_url).query(&query).send().await?;
        let response = ensure_success(self.name(), response).await?;
        let body = response.text().await?;

        let parsed: MyMemoryResponse = serde_json::from_str(&body)
            .map_err(|e| TranslationError::ParseError(format!("mymemory response: {}", e)))?;

        let status = match &parsed.response_status {
            serde_json::Value::Number(n) => n.as_i64().unwrap_or_default(),
            serde_json::Value::String(s) => s.trim().parse().unwrap_or_default(),
            _ => 0,
        };
        if status != 200 {
            return Err(TranslationError::ApiError {
                code: i32::try_from(status).unwrap_or(-1),
                message: format!("mymemory: {}", parsed.response_details),
            });
        }

        let translated = parsed.response_data.translated_text;
        if translated.to_ascii_uppercase().starts_with("MYMEMORY WARNING") {
            return Err(TranslationError::ApiError {
                code: 429,
                message: translated,
            });
        }
        if translated.trim().is_empty() {
            return Err(TranslationError::EmptyResult {
                provider: self.name().to_string(),
            });
        }
        Ok(translated)
    }
}
