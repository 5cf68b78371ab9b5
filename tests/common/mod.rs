//! 集成测试共享的测试用后端

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use zh_converter::{Result, TranslationError, TranslationProvider, TranslationRequest};

/// 记录每次请求的共享日志
pub type RequestLog = Arc<Mutex<Vec<TranslationRequest>>>;

/// 按词典翻译的后端，词典里没有的文本视为失败
pub struct DictionaryProvider {
    name: &'static str,
    entries: HashMap<String, String>,
    log: RequestLog,
}

impl DictionaryProvider {
    pub fn new(name: &'static str, entries: &[(&str, &str)]) -> (Self, RequestLog) {
        let log = RequestLog::default();
        let provider = Self {
            name,
            entries: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            log: log.clone(),
        };
        (provider, log)
    }
}

#[async_trait]
impl TranslationProvider for DictionaryProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        self.log.lock().unwrap().push(request.clone());
        self.entries
            .get(&request.text)
            .cloned()
            .ok_or_else(|| TranslationError::Custom(format!("no entry for {}", request.text)))
    }
}

/// 永远失败的后端
pub struct FailingProvider {
    name: &'static str,
    log: RequestLog,
}

impl FailingProvider {
    pub fn new(name: &'static str) -> (Self, RequestLog) {
        let log = RequestLog::default();
        (
            Self {
                name,
                log: log.clone(),
            },
            log,
        )
    }
}

#[async_trait]
impl TranslationProvider for FailingProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        self.log.lock().unwrap().push(request.clone());
        Err(TranslationError::ApiError {
            code: 503,
            message: format!("{} unavailable", self.name),
        })
    }
}

pub fn texts(log: &RequestLog) -> Vec<String> {
    log.lock().unwrap().iter().map(|r| r.text.clone()).collect()
}
