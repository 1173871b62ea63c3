//! # info 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/info.rs`

use clap::Args;
use std::path::PathBuf;

/// info 子命令参数
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Record file (.sdf/.mol)
    pub file: PathBuf,

    /// Also list every atom and bond
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
