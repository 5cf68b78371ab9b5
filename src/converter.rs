//! 简繁转换模块
//!
//! 包装 OpenCC 的简体→繁体、繁体→简体两个转换器。转换本身不会失败，
//! 无法转换的字符原样保留；只有构建转换器时可能出错。

use crate::error::{Result, TranslationError};
use ferrous_opencc::{config::BuiltinConfig, OpenCC};

/// 简繁转换器
///
/// # 示例
///
/// ```rust
/// use zh_converter::ScriptConverter;
///
/// let converter = ScriptConverter::new().unwrap();
/// assert_eq!(converter.to_traditional("汉语"), "漢語");
/// assert_eq!(converter.to_simplified("漢語"), "汉语");
/// ```
pub struct ScriptConverter {
    s2t: OpenCC,
    t2s: OpenCC,
}

impl ScriptConverter {
    pub fn new() -> Result<Self> {
        let s2t = OpenCC::from_config(BuiltinConfig::S2t)
            .map_err(|e| TranslationError::Converter(format!("s2t: {}", e)))?;
        let t2s = OpenCC::from_config(BuiltinConfig::T2s)
            .map_err(|e| TranslationError::Converter(format!("t2s: {}", e)))?;
        Ok(Self { s2t, t2s })
    }

    /// 繁体 → 简体
    pub fn to_simplified(&self, text: &str) -> String {
        self.t2s.convert(text)
    }

    /// 简体 → 繁体
    pub fn to_traditional(&self, text: &str) -> String {
        self.s2t.convert(text)
    }
}

impl std::fmt::Debug for ScriptConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptConverter").finish_non_exhaustive()
    }
}
