pub mod rule;
pub mod fixes;
pub mod applier;
pub mod utils;

// 重新导出主要结构
pub use rule::{RewriteRule, RuleReport};
pub use fixes::builtin_fixes;
pub use applier::{PatchApplier, PatchReport};
pub use utils::{is_supported_extension, create_backup, FixError};

// 常量定义
pub const SUPPORTED_EXTENSIONS: &[&str] = &["js"];

/// 默认输入脚本路径（与原修复脚本一致）
pub const DEFAULT_INPUT: &str = "public/app.js";
