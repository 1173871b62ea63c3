//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `render`: 记录 → SVG
//! - `info`: 记录摘要
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: render, info

pub mod info;
pub mod render;

use clap::{Parser, Subcommand};

/// molrender - 分子结构 SVG 渲染工具
#[derive(Parser)]
#[command(name = "molrender")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Render 3D molecular structures as depth-sorted SVG images", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Render .sdf/.mol records to SVG images
    Render(render::RenderArgs),

    /// Show atoms and bonds of a single record
    Info(info::InfoArgs),
}
