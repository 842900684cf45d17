//! app.js 修复流程集成测试
//!
//! 用包含全部五个锚点的脚本片段走完整的 读取 → 变换 → 写入 流程：
//! - 五条规则全部生效，原文案消失、替换文案出现
//! - 输入文件逐字节保持不变
//! - 无锚点输入逐字节原样写出
//! - 二次运行时规则2/5处于不动点，规则3/4锚点已消耗

use app_fixer::PatchApplier;

/// 包含全部五个锚点的app.js片段
///
/// 注意：JS字符串里的`\n`在源码文本中是两个字符，
/// 原样保留在这里（raw string）。
const FIXTURE: &str = r#"class WalletApp {
    setupPersonalInfoForm() {
        const submitBtn = document.getElementById('personal-info-submit');
        submitBtn.addEventListener('click', () => {
            const name = document.getElementById('info-name').value.trim();
            if (!name) {
                this.showToast('이름을 입력해주세요.');
                return;
            }
            this.savePersonalInfo(name);
        });
    }

    async resetPassword() {
        const confirmed = confirm('비밀번호를 재설정하시겠습니까?\n기존 지문과 비밀번호를 먼저 확인합니다.');
        if (!confirmed) return;

        // 1. 기존 지문 인증
        const fingerprintOk = await this.verifyFingerprint();
        if (!fingerprintOk) {
            this.showToast('지문 인증에 실패했습니다.');
            return;
        }
        // 2. 기존 비밀번호 확인
        const current = prompt('기존 비밀번호를 입력하세요.');
        this.checkPassword(current);
    }

    async deleteAccount() {
        // 계정 생성 후 3개월 체크
        const createdAt = new Date(this.currentUser.createdAt);
        const threeMonths = 1000 * 60 * 60 * 24 * 90;
        if (Date.now() - createdAt.getTime() < threeMonths) {
            this.showToast('계정 생성 후 3개월이 지나야 탈퇴할 수 있습니다.');
            return;
        }
        this.performDeletion();
    }

    renderProfile() {
        if (this.currentUser.communicationAddress && this.currentUser.hasSetCommunicationAddress) {
            this.showAddress(this.currentUser.communicationAddress);
        }
    }
}
"#;

/// 不含任何锚点的脚本
const NO_ANCHOR_FIXTURE: &str = "const VERSION = '1.0.0';\n\nfunction hello() {\n    console.log('hello');\n}\n";

#[test]
fn test_all_five_rules_apply() {
    let applier = PatchApplier::new().unwrap();
    let (out, report) = applier.apply(FIXTURE);

    assert_eq!(report.applied_count(), 5, "五条规则应全部生效");
    assert!(report.unmatched().is_empty());

    // 修复1: 校验正则被插入到空名检查之前
    assert!(out.contains("// 한글과 영어만 허용 (공백 포함)"));
    assert!(out.contains("const nameRegex = /^[가-힣a-zA-Z\\s]+$/;"));
    assert!(out.contains("if (!name) {"));

    // 修复2: 确认弹窗文案被简化
    assert!(out.contains(r"confirm('비밀번호를 재설정하시겠습니까?');"));
    assert!(!out.contains(r"\n기존 지문과 비밀번호를 먼저 확인합니다."));

    // 修复3: 指纹验证块被删除，步骤编号改为1
    assert!(out.contains("// 1. 기존 비밀번호 확인"));
    assert!(!out.contains("기존 지문 인증"));
    assert!(!out.contains("verifyFingerprint"));

    // 修复4: 3个月限制整块删除，前后行保留
    assert!(!out.contains("3개월"));
    assert!(!out.contains("threeMonths"));
    assert!(out.contains("async deleteAccount() {"));
    assert!(out.contains("this.performDeletion();"));

    // 修复5: 显示条件只剩地址存在性检查
    assert!(out.contains("if (this.currentUser.communicationAddress) {"));
    assert!(!out.contains("hasSetCommunicationAddress"));
}

#[test]
fn test_file_run_preserves_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("app.js");
    let output = dir.path().join("app_fixed.js");
    std::fs::write(&input, FIXTURE).unwrap();

    let applier = PatchApplier::new().unwrap();
    let report = applier.run(&input, &output).unwrap();
    assert_eq!(report.applied_count(), 5);

    // 输入文件逐字节保持不变
    assert_eq!(std::fs::read_to_string(&input).unwrap(), FIXTURE);

    // 输出与内存变换结果一致
    let (expected, _) = applier.apply(FIXTURE);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn test_no_anchor_input_passes_through() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("other.js");
    let output = dir.path().join("other_fixed.js");
    std::fs::write(&input, NO_ANCHOR_FIXTURE).unwrap();

    let applier = PatchApplier::new().unwrap();
    let report = applier.run(&input, &output).unwrap();

    assert_eq!(report.applied_count(), 0);
    assert_eq!(report.unmatched().len(), 5);

    // 输出逐字节等于输入
    assert_eq!(
        std::fs::read(&output).unwrap(),
        std::fs::read(&input).unwrap()
    );
}

#[test]
fn test_second_pass_is_not_fully_idempotent() {
    let applier = PatchApplier::new().unwrap();
    let (first, _) = applier.apply(FIXTURE);
    let (_, second_report) = applier.apply(&first);

    let by_name = |name: &str| {
        second_report.rules.iter().find(|r| r.name == name).unwrap()
    };

    // 规则2/5已处于不动点：文本保持修复后的形态，不再匹配
    assert!(!by_name("reset_confirm_prompt").applied);
    assert!(!by_name("relax_address_display").applied);
    assert!(first.contains(r"confirm('비밀번호를 재설정하시겠습니까?');"));
    assert!(first.contains("if (this.currentUser.communicationAddress) {"));

    // 规则3/4的锚点在第一次运行中已被消耗
    assert!(!by_name("drop_fingerprint_step").applied);
    assert!(!by_name("drop_account_age_gate").applied);

    // 规则1的锚点仍然存在，二次运行会重复插入（已知的非幂等行为）
    assert!(by_name("name_validation").applied);
}

#[test]
fn test_missing_input_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let applier = PatchApplier::new().unwrap();

    let result = applier.run(
        &dir.path().join("missing.js"),
        &dir.path().join("out.js"),
    );
    assert!(result.is_err());
}

#[test]
fn test_output_overwritten_unconditionally() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("app.js");
    let output = dir.path().join("app_fixed.js");
    std::fs::write(&input, NO_ANCHOR_FIXTURE).unwrap();
    std::fs::write(&output, "stale content").unwrap();

    let applier = PatchApplier::new().unwrap();
    applier.run(&input, &output).unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), NO_ANCHOR_FIXTURE);
}
