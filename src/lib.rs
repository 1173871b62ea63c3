//! # molrender - 分子结构 SVG 渲染引擎
//!
//! 把化学表记录中的三维分子结构渲染为二维 SVG 矢量图。原子与键按深度排序后
//! 依次绘制（画家算法），靠近观察者的几何自然遮挡远处的几何。
//!
//! ## 数据流
//! ```text
//! 记录文本 → parsers (填充 Molecule) → render::compositor (深度排序)
//!          → render::svg (逐实体投影) → SVG 文档
//! ```
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── parsers/   (记录解析器)
//!   ├── models/    (分子数据模型与坐标变换)
//!   ├── render/    (深度合成、样式表、SVG 输出)
//!   └── error.rs   (错误处理)
//! ```

pub mod error;
pub mod models;
pub mod parsers;
pub mod render;

pub use error::{MolError, Result};
pub use models::{Atom, Bond, Molecule, MoleculeStore, XformMatrix};
pub use render::{render_molecule, RenderConfig, StyleTable};
