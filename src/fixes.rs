use crate::rule::RewriteRule;
use crate::utils::FixError;

/// 构建内置的五条修复规则
///
/// 规则按固定顺序应用，后续规则作用于前面规则的累计结果。
/// 模式针对JavaScript源码文本本身书写：JS字符串字面量里的`\n`
/// 在源码文本中是`\`和`n`两个字符，而不是换行符。
pub fn builtin_fixes() -> Result<Vec<RewriteRule>, FixError> {
    Ok(vec![
        // 修复1: 个人信息表单增加姓名校验（仅允许韩文、英文和空格）
        // 在提交回调的空名检查前插入nameRegex常量
        RewriteRule::new(
            "name_validation",
            "在提交回调的空名检查前插入姓名校验正则",
            r"(submitBtn\.addEventListener\('click', \(\) => \{[\s\S]*?)(if \(!name\) \{)",
            "${1}// 한글과 영어만 허용 (공백 포함)\n        const nameRegex = /^[가-힣a-zA-Z\\s]+$$/;\n        ${2}",
        )?,

        // 修复2: 密码重置确认弹窗去掉指纹预验证的提示文案
        RewriteRule::new(
            "reset_confirm_prompt",
            "简化密码重置确认弹窗文案",
            r"const confirmed = confirm\('비밀번호를 재설정하시겠습니까\?\\n기존 지문과 비밀번호를 먼저 확인합니다\.'\);",
            "const confirmed = confirm('비밀번호를 재설정하시겠습니까?');",
        )?,

        // 修复3: 删除密码重置流程中的指纹验证代码块
        // 从"1. 기존 지문 인증"注释起，到最近的"2. 기존 비밀번호 확인"注释止（最短匹配）
        RewriteRule::new(
            "drop_fingerprint_step",
            "移除密码重置中的指纹验证步骤",
            r"// 1\. 기존 지문 인증[\s\S]*?// 2\. 기존 비밀번호 확인",
            "// 1. 기존 비밀번호 확인",
        )?,

        // 修复4: 账号注销去掉"创建满3个月"限制
        // 从检查注释起，到紧跟return;的第一个块结束符止，整段删除
        RewriteRule::new(
            "drop_account_age_gate",
            "删除注销前的账号创建满3个月检查",
            r"// 계정 생성 후 3개월 체크[\s\S]*?return;\s*\}",
            "",
        )?,

        // 修复5: 通信地址显示条件放宽为只检查地址是否存在
        RewriteRule::new(
            "relax_address_display",
            "通信地址显示不再要求hasSetCommunicationAddress标志",
            r"if \(this\.currentUser\.communicationAddress && this\.currentUser\.hasSetCommunicationAddress\) \{",
            "if (this.currentUser.communicationAddress) {",
        )?,
    ])
}
