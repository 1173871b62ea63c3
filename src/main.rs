//! # molrender 命令行入口
//!
//! ## 子命令
//! - `render` - 批量把 .sdf / .mol 记录渲染为 SVG
//! - `info`   - 显示单个记录的原子与键
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑，调用 molrender 库)
//!   └── utils/      (工具函数)
//! ```

mod cli;
mod commands;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
