use crate::utils::FixError;
use regex::Regex;
use serde::{Serialize, Deserialize};

/// 重写规则
///
/// 一条规则由匹配模式和替换模板组成：
/// - 应用时替换文本中所有非重叠匹配处
/// - 锚点不存在时规则为无操作（no-op），不视为错误
#[derive(Debug)]
pub struct RewriteRule {
    /// 规则标识（稳定的snake_case名称）
    pub name: &'static str,
    /// 规则说明
    pub description: &'static str,
    /// 编译后的匹配模式
    pattern: Regex,
    /// 替换模板（`${n}`引用捕获组，`$$`为字面`$`）
    replacement: &'static str,
}

impl RewriteRule {
    /// 创建新规则（编译模式）
    pub fn new(
        name: &'static str,
        description: &'static str,
        pattern: &str,
        replacement: &'static str,
    ) -> Result<Self, FixError> {
        Ok(RewriteRule {
            name,
            description,
            pattern: Regex::new(pattern)?,
            replacement,
        })
    }

    /// 获取模式字符串
    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// 对文本应用规则
    ///
    /// 返回新文本和替换次数；次数为0时文本原样返回。
    pub fn apply(&self, text: &str) -> (String, usize) {
        let count = self.pattern.find_iter(text).count();
        if count == 0 {
            return (text.to_string(), 0);
        }

        let replaced = self.pattern.replace_all(text, self.replacement);
        (replaced.into_owned(), count)
    }
}

/// 单条规则的应用结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleReport {
    /// 规则标识
    pub name: String,
    /// 规则说明
    pub description: String,
    /// 替换次数
    pub replacements: usize,
    /// 规则是否实际生效（锚点命中）
    pub applied: bool,
}

impl RuleReport {
    /// 根据规则和替换次数创建报告条目
    pub fn new(rule: &RewriteRule, replacements: usize) -> Self {
        RuleReport {
            name: rule.name.to_string(),
            description: rule.description.to_string(),
            replacements,
            applied: replacements > 0,
        }
    }
}
