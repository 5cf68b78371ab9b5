//! 标点规范化
//!
//! 部分后端会在结果中引入重复或中英混用的问号，拼接完成后统一处理。

const RULES: [(&str, &str); 3] = [
    // `\? ?` -> `?`
    ("? ", "?"),
    ("?？", "？"),
    ("？?", "？"),
];

/// 按顺序应用三条替换规则，直到字符串不再变化
///
/// 每条规则都会缩短字符串，因此必然终止；结果对重复调用是幂等的。
///
/// ```rust
/// use zh_converter::normalize_question_marks;
///
/// assert_eq!(normalize_question_marks("你好吗?？"), "你好吗？");
/// assert_eq!(normalize_question_marks("Why? Because"), "Why?Because");
/// assert_eq!(normalize_question_marks("plain text"), "plain text");
/// ```
pub fn normalize_question_marks(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let mut next = current.clone();
        for (pattern, replacement) in RULES {
            if next.contains(pattern) {
                next = next.replace(pattern, replacement);
            }
        }
        if next == current {
            return current;
        }
        current = next;
    }
}
