//! 章节标题规则
//!
//! 标题识别由一组声明式规则描述，编译成一个左优先的正则交替式。
//! 同一行只识别最左侧的一个标题。

use regex::Regex;
use std::sync::OnceLock;

use super::ImportError;

/// 标题规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingRule {
    /// 规则名称（用于错误信息）
    pub name: &'static str,
    /// 正则表达式
    pub pattern: &'static str,
}

/// 内置规则：中文数字/阿拉伯数字的"第N章"、"第N节"，以及英文 "Chapter N"
pub const DEFAULT_HEADING_RULES: &[HeadingRule] = &[
    HeadingRule {
        name: "zh-numeral",
        pattern: r"第[一二三四五六七八九十百千万0-9]+[章节]",
    },
    HeadingRule {
        name: "en-chapter",
        pattern: r"(?i:chapter)\s*[0-9]+",
    },
];

/// 单行匹配结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMatch {
    /// 匹配起始字节偏移
    pub start: usize,
    /// 匹配结束字节偏移
    pub end: usize,
    /// 匹配到的标题标记
    pub marker: String,
}

/// 标题匹配器
#[derive(Debug, Clone)]
pub struct HeadingMatcher {
    /// 空规则集时为 None，永不匹配
    regex: Option<Regex>,
}

impl HeadingMatcher {
    /// 编译规则集
    pub fn from_rules(rules: &[HeadingRule]) -> Result<Self, ImportError> {
        // 逐条校验，便于报告出错的规则
        for rule in rules {
            Regex::new(rule.pattern).map_err(|e| ImportError::InvalidPattern {
                name: rule.name.to_string(),
                reason: e.to_string(),
            })?;
        }

        if rules.is_empty() {
            return Ok(Self { regex: None });
        }

        let combined = rules
            .iter()
            .map(|rule| format!("(?:{})", rule.pattern))
            .collect::<Vec<_>>()
            .join("|");

        let regex = Regex::new(&combined).map_err(|e| ImportError::InvalidPattern {
            name: "combined".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { regex: Some(regex) })
    }

    /// 内置规则的共享实例
    pub fn builtin() -> &'static HeadingMatcher {
        static BUILTIN: OnceLock<HeadingMatcher> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            HeadingMatcher::from_rules(DEFAULT_HEADING_RULES)
                .expect("built-in heading rules must compile")
        })
    }

    /// 查找行内第一个标题标记
    pub fn find(&self, line: &str) -> Option<HeadingMatch> {
        self.regex.as_ref()?.find(line).map(|m| HeadingMatch {
            start: m.start(),
            end: m.end(),
            marker: m.as_str().to_string(),
        })
    }

    pub fn is_heading(&self, line: &str) -> bool {
        self.regex.as_ref().is_some_and(|regex| regex.is_match(line))
    }
}

/// 使用内置规则判断
pub fn find_heading(line: &str) -> Option<HeadingMatch> {
    HeadingMatcher::builtin().find(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_numeral_headings() {
        assert!(find_heading("第一章 开始").is_some());
        assert!(find_heading("第十二节").is_some());
        assert!(find_heading("第一百零").is_none());
        assert!(find_heading("第三千五百章 终局").is_some());
        assert!(find_heading("第12章 重逢").is_some());
    }

    #[test]
    fn test_latin_heading_case_insensitive() {
        assert!(find_heading("Chapter 1").is_some());
        assert!(find_heading("CHAPTER 7: The End").is_some());
        assert!(find_heading("chapter12").is_some());
        assert!(find_heading("Chapter One").is_none());
    }

    #[test]
    fn test_plain_body_is_not_heading() {
        assert!(find_heading("他推开门，走了出去。").is_none());
        assert!(find_heading("第章").is_none());
        assert!(find_heading("").is_none());
    }

    #[test]
    fn test_heading_inside_line_matches() {
        // 匹配不锚定行首
        let m = find_heading("  卷一 第三章 风起").unwrap();
        assert_eq!(m.marker, "第三章");
    }

    #[test]
    fn test_leftmost_match_wins() {
        let m = find_heading("Chapter 2 第五章").unwrap();
        assert_eq!(m.marker, "Chapter 2");
        assert_eq!(m.start, 0);

        let m = find_heading("第五章 Chapter 2").unwrap();
        assert_eq!(m.marker, "第五章");
    }

    #[test]
    fn test_custom_rules() {
        let rules = [HeadingRule {
            name: "zh-hui",
            pattern: r"第[一二三四五六七八九十百千万0-9]+回",
        }];
        let matcher = HeadingMatcher::from_rules(&rules).unwrap();
        assert!(matcher.is_heading("第一回 宴桃园豪杰三结义"));
        assert!(!matcher.is_heading("第一章"));
    }

    #[test]
    fn test_invalid_rule_reports_name() {
        let rules = [HeadingRule {
            name: "broken",
            pattern: r"第(",
        }];
        match HeadingMatcher::from_rules(&rules) {
            Err(ImportError::InvalidPattern { name, .. }) => assert_eq!(name, "broken"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_rule_set_never_matches() {
        let matcher = HeadingMatcher::from_rules(&[]).unwrap();
        assert!(!matcher.is_heading("第一章"));
    }
}
