//! 文本规范化 - 业务能力层

/// 将连续空白（含换行）折叠为单个空格，并去掉首尾空白
///
/// 空串或纯空白输入返回空串
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(normalize_text("  What   is\n2+2?\t"), "What is 2+2?");
        assert_eq!(normalize_text("line one\r\nline two"), "line one line two");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text(" \n\t "), "");
    }

    #[test]
    fn test_unicode_whitespace() {
        // 不间断空格同样视为空白
        assert_eq!(normalize_text("A\u{00a0}\u{00a0}B"), "A B");
        assert_eq!(normalize_text("光合作用  是什么"), "光合作用 是什么");
    }
}
