//! 文字分段模块
//!
//! 按码点把输入切分成交替出现的“目标文字”片段和其他片段。
//! 片段首尾相接、互不重叠，按顺序拼接即可还原输入。

use crate::types::{Run, RunKind};

/// 分段所依据的文字类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptClass {
    /// CJK 统一表意文字 U+4E00..=U+9FFF
    Han,
    /// ASCII 字母 a-z / A-Z
    Latin,
}

impl ScriptClass {
    pub fn contains(self, c: char) -> bool {
        match self {
            ScriptClass::Han => is_han(c),
            ScriptClass::Latin => c.is_ascii_alphabetic(),
        }
    }
}

/// 判断字符是否属于 CJK 统一表意文字基本区
pub fn is_han(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// 按文字类别分段
///
/// # 示例
///
/// ```rust
/// use zh_converter::segmenter::{segment_script, ScriptClass};
///
/// let runs = segment_script("Hello 你好 World", ScriptClass::Han);
/// let texts: Vec<&str> = runs.iter().map(|r| r.text.as_str()).collect();
/// assert_eq!(texts, ["Hello ", "你好", " World"]);
/// ```
pub fn segment_script(text: &str, class: ScriptClass) -> Vec<Run> {
    segment(text, |c| class.contains(c))
}

/// 按任意字符谓词分段
///
/// 连续满足谓词的字符合并为一个 `Script` 片段，其余的连续字符合并为
/// 一个 `Other` 片段。空输入返回空序列。
pub fn segment<P>(text: &str, predicate: P) -> Vec<Run>
where
    P: Fn(char) -> bool,
{
    let mut runs = Vec::new();
    let mut chars = text.char_indices();

    let Some((_, first)) = chars.next() else {
        return runs;
    };

    let mut current_kind = kind_of(&predicate, first);
    let mut current_start = 0;

    for (offset, c) in chars {
        let kind = kind_of(&predicate, c);
        if kind != current_kind {
            runs.push(make_run(text, current_kind, current_start, offset));
            current_kind = kind;
            current_start = offset;
        }
    }
    runs.push(make_run(text, current_kind, current_start, text.len()));

    runs
}

fn kind_of<P: Fn(char) -> bool>(predicate: &P, c: char) -> RunKind {
    if predicate(c) {
        RunKind::Script
    } else {
        RunKind::Other
    }
}

fn make_run(text: &str, kind: RunKind, start: usize, end: usize) -> Run {
    Run {
        kind,
        text: text[start..end].to_string(),
        start,
        end,
    }
}
