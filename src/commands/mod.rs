//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `utils/` 和 molrender 库
//! - 子模块: render, info

pub mod info;
pub mod render;

use crate::cli::Commands;
use molrender::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Render(args) => render::execute(args),
        Commands::Info(args) => info::execute(args),
    }
}
