//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::models::document::OutputDocument;
use crate::models::settings::ConversionSettings;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug 或 info。重复调用不会出错
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("Finals Simulator CSV Converter");
    info!("{}", "=".repeat(50));
    if let Some(preset) = &config.preset_file {
        info!("Using conversion preset: {}", preset);
    }
}

/// 打印转换完成后的统计信息
///
/// # 参数
/// - `settings`: 本次转换参数
/// - `document`: 已写入的输出文档
/// - `output_path`: 输出文件路径
pub fn print_summary(settings: &ConversionSettings, document: &OutputDocument, output_path: &str) {
    info!("Successfully created: {}", output_path);
    info!("");
    info!("=== Conversion Summary ===");
    info!("Question Set: {}", settings.name);
    info!("Subject: {}", settings.subject);
    info!("Questions: {}", document.question_count());

    match document.bank() {
        Some(bank) => {
            info!("Created as Bank: {}", bank.name);
            info!("Questions to select: {}", bank.questions_to_select);
        }
        None => info!("Created as individual questions"),
    }

    info!(
        "Time limit: {}",
        settings
            .time_limit()
            .map(|minutes| format!("{} minutes", minutes))
            .unwrap_or_else(|| "None".to_string())
    );
    info!(
        "Allow answer changes: {}",
        yes_no(settings.allow_answer_change)
    );
    info!("Show results: {}", yes_no(settings.show_results));
    info!("");
    info!("Output file: {}", output_path);
    info!("You can now import this file into Finals Simulator!");
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghij", 10), "abcdefghij");
        assert_eq!(truncate_text("abcdefghijk", 10), "abcdefghij...");
        // 按字符而非字节截断
        assert_eq!(truncate_text("光合作用是什么", 4), "光合作用...");
    }

    #[test]
    fn test_init_is_idempotent() {
        init(false);
        init(true);
    }
}
