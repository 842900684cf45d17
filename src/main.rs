use clap::Parser;
use std::path::PathBuf;
use app_fixer::{PatchApplier, PatchReport, FixError, DEFAULT_INPUT};

#[derive(Parser)]
#[command(name = "app_fixer")]
#[command(about = "对钱包前端脚本应用固定的正则修复规则")]
#[command(version = "0.1.0")]
struct Cli {
    /// 输入JS文件路径
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// 输出JS文件路径（默认在输入文件名后加_fixed）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 将补丁报告写入JSON文件
    #[arg(long)]
    report: Option<PathBuf>,

    /// 试运行：只应用并报告，不写输出文件
    #[arg(long)]
    dry_run: bool,

    /// 显示内置规则列表
    #[arg(long)]
    stats: bool,

    /// 覆盖前备份已存在的输出文件
    #[arg(long)]
    backup: bool,

    /// 静默模式(仅输出错误)
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 处理不同的操作模式
    if cli.stats {
        return handle_stats();
    }

    validate_input(&cli.input)?;

    if cli.dry_run {
        return handle_dry_run(&cli);
    }

    // 默认模式：应用修复并写出
    handle_fix(&cli)
}

/// 验证输入文件
fn validate_input(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("输入文件不存在: {:?}", input).into());
    }

    if !app_fixer::is_supported_extension(input) {
        let ext = input.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string();
        return Err(FixError::UnsupportedExtension(ext).into());
    }

    Ok(())
}

/// 显示内置规则列表
fn handle_stats() -> Result<(), Box<dyn std::error::Error>> {
    let applier = PatchApplier::new()
        .map_err(|e| format!("构建修复规则失败: {}", e))?;

    println!("内置修复规则（按应用顺序）:");
    for (i, rule) in applier.rules().iter().enumerate() {
        println!("{}. {} - {}", i + 1, rule.name, rule.description);
        println!("   模式: {}", rule.pattern_str());
    }

    Ok(())
}

/// 处理试运行模式
fn handle_dry_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let applier = PatchApplier::new()
        .map_err(|e| format!("构建修复规则失败: {}", e))?;

    let content = std::fs::read_to_string(&cli.input)
        .map_err(|e| format!("读取输入文件失败: {}", e))?;

    let (_, report) = applier.apply(&content);

    write_report_if_requested(cli, &report)?;

    if !cli.quiet {
        print_rule_outcomes(&report);
        println!("试运行完成，未写出任何文件");
    }

    Ok(())
}

/// 处理修复应用
fn handle_fix(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let applier = PatchApplier::new()
        .map_err(|e| format!("构建修复规则失败: {}", e))?;

    let output_path = get_output_path(cli);

    if cli.backup && output_path.exists() {
        let backup_path = app_fixer::create_backup(&output_path)
            .map_err(|e| format!("创建备份失败: {}", e))?;
        if !cli.quiet {
            println!("已创建备份文件: {:?}", backup_path);
        }
    }

    let report = applier.run(&cli.input, &output_path)
        .map_err(|e| format!("应用修复失败: {}", e))?;

    write_report_if_requested(cli, &report)?;

    if !cli.quiet {
        print_rule_outcomes(&report);
        println!("修复结果已写入: {:?}", output_path);
    }

    Ok(())
}

/// 打印每条规则的应用结果
fn print_rule_outcomes(report: &PatchReport) {
    for (i, rule) in report.rules.iter().enumerate() {
        if rule.applied {
            println!("✓ 规则 {} ({}): 替换 {} 处", i + 1, rule.name, rule.replacements);
        } else {
            println!("⚠ 规则 {} ({}): 锚点未命中，跳过", i + 1, rule.name);
        }
    }

    println!("成功应用了 {} 条规则", report.applied_count());

    if report.applied_count() == 0 {
        println!("⚠️ 警告：没有任何规则被应用，可能原因：");
        println!("  1. 输入文件不是预期的app.js版本");
        println!("  2. 锚点文本已被修改或此前已修复过");
    }
}

/// 按需写出JSON报告
fn write_report_if_requested(cli: &Cli, report: &PatchReport) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(report_path) = &cli.report {
        let json = report.to_json()
            .map_err(|e| format!("序列化报告失败: {}", e))?;

        std::fs::write(report_path, &json)
            .map_err(|e| format!("写入报告失败: {}", e))?;

        if !cli.quiet {
            println!("补丁报告已写入: {:?}", report_path);
        }
    }

    Ok(())
}

/// 获取输出路径
fn get_output_path(cli: &Cli) -> PathBuf {
    cli.output.clone().unwrap_or_else(|| {
        let mut output = cli.input.clone();
        let stem = output.file_stem().unwrap().to_str().unwrap();
        let extension = output.extension().unwrap().to_str().unwrap();
        output.set_file_name(format!("{}_fixed.{}", stem, extension));
        output
    })
}
