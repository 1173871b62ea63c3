//! # 渲染模块
//!
//! 深度合成 + 二维投影，输出 SVG 文档。
//!
//! ## 子模块
//! - `compositor`: 原子与键合并并按深度稳定排序
//! - `style`: 元素样式表（半径、填充引用、径向渐变）
//! - `svg`: 投影与文档序列化
//!
//! ## 依赖关系
//! - 被 `commands/render.rs` 使用
//! - 使用 `models/` 数据模型

pub mod compositor;
pub mod style;
pub mod svg;

pub use compositor::{composite, Entity, RenderEntity};
pub use style::{ElementRow, Gradient, StyleTable};
pub use svg::{render_molecule, render_to_file, RenderConfig};
