//! # 终端输出
//!
//! 渲染与记录查看时的状态行。所有行都以带颜色的短标签开头，
//! 错误写到 stderr，其余写到 stdout。
//!
//! ## 依赖关系
//! - 被 `commands/render.rs`, `commands/info.rs` 和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::fmt::Display;
use std::path::Path;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 一个记录文件已渲染为 SVG
pub fn print_rendered(record: &Path, svg: &Path) {
    println!(
        "{} {} {} {}",
        "[SVG]".green().bold(),
        record.display().to_string().dimmed(),
        "=>".cyan(),
        svg.display()
    );
}

/// 输出文件已存在，未覆盖
pub fn print_kept_existing(svg: &Path) {
    println!(
        "{} {} already exists (pass --overwrite to replace it)",
        "[KEEP]".dimmed(),
        svg.display()
    );
}

/// 单个记录渲染失败；批量模式下不中断其余文件
pub fn print_render_failure(record: &Path, err: &dyn Display) {
    eprintln!(
        "{} {}: {}",
        "[FAIL]".red().bold(),
        record.display(),
        err
    );
}

/// 批量渲染结束时的汇总行
pub fn print_render_summary(rendered: usize, kept: usize, failed: usize, out_dir: &Path) {
    println!("{}", render_summary(rendered, kept, failed, out_dir));
}

fn render_summary(rendered: usize, kept: usize, failed: usize, out_dir: &Path) -> String {
    let failed_part = if failed > 0 {
        format!("{} failed", failed).red().bold().to_string()
    } else {
        "0 failed".to_string()
    };

    format!(
        "{} {} rendered, {} kept, {} -> {}",
        "[DONE]".green().bold(),
        rendered,
        kept,
        failed_part,
        out_dir.display()
    )
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_summary_counts() {
        let line = render_summary(3, 1, 0, Path::new("svg"));
        assert!(line.contains("3 rendered, 1 kept, 0 failed"));
        assert!(line.ends_with("-> svg"));

        let line = render_summary(0, 0, 2, Path::new("svg"));
        assert!(line.contains("2 failed"));
    }
}
