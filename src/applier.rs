use crate::fixes::builtin_fixes;
use crate::rule::{RewriteRule, RuleReport};
use crate::utils::FixError;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// 补丁应用报告
///
/// 按应用顺序记录每条规则的结果。锚点未命中不是错误，
/// 由调用方决定如何呈现（CLI打印警告，库调用方自行检查）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchReport {
    /// 各规则结果（按应用顺序）
    pub rules: Vec<RuleReport>,
}

impl PatchReport {
    /// 实际生效的规则数量
    pub fn applied_count(&self) -> usize {
        self.rules.iter().filter(|r| r.applied).count()
    }

    /// 未命中锚点的规则名称
    pub fn unmatched(&self) -> Vec<&str> {
        self.rules.iter()
            .filter(|r| !r.applied)
            .map(|r| r.name.as_str())
            .collect()
    }

    /// 序列化为格式化JSON
    pub fn to_json(&self) -> Result<String, FixError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 补丁应用器
///
/// 持有固定顺序的规则列表，对文本执行 读取 → 变换 → 写入 流水线。
/// 变换是输入文本和规则列表的纯函数，不查询也不修改任何外部状态。
pub struct PatchApplier {
    rules: Vec<RewriteRule>,
}

impl PatchApplier {
    /// 使用内置五条修复规则创建应用器
    pub fn new() -> Result<Self, FixError> {
        Ok(PatchApplier { rules: builtin_fixes()? })
    }

    /// 使用自定义规则列表创建应用器
    pub fn with_rules(rules: Vec<RewriteRule>) -> Self {
        PatchApplier { rules }
    }

    /// 获取规则列表
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// 对内存中的文本按顺序应用全部规则
    ///
    /// 每条规则在前面规则的累计结果上运行；未命中的规则原样传递文本。
    pub fn apply(&self, text: &str) -> (String, PatchReport) {
        let mut current = text.to_string();
        let mut reports = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let (next, count) = rule.apply(&current);
            reports.push(RuleReport::new(rule, count));
            current = next;
        }

        (current, PatchReport { rules: reports })
    }

    /// 读取输入文件，应用规则，写入输出文件
    ///
    /// 输入文件保持不变；输出文件无条件覆盖。
    pub fn run(&self, input: &Path, output: &Path) -> Result<PatchReport, FixError> {
        let content = std::fs::read_to_string(input)?;
        let (fixed, report) = self.apply(&content);
        std::fs::write(output, fixed)?;
        Ok(report)
    }
}
