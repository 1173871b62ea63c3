//! # render 子命令 CLI 定义
//!
//! 批量渲染记录文件为 SVG。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/render.rs`

use clap::Args;
use std::path::PathBuf;

/// render 子命令参数
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Input record file, or directory containing record files
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for SVG files
    #[arg(short, long)]
    pub output: PathBuf,

    /// Element style table (CSV: number,code,name,colour1,colour2,colour3,radius)
    #[arg(short, long, env = "MOLRENDER_STYLES")]
    pub styles: Option<PathBuf>,

    /// Glob pattern for input files when INPUT is a directory
    #[arg(short, long, default_value = "*.sdf")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Rotation around the x axis in degrees (applied first)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rotate_x: f64,

    /// Rotation around the y axis in degrees (applied second)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rotate_y: f64,

    /// Rotation around the z axis in degrees (applied last)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rotate_z: f64,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
