//! # 数据模型模块
//!
//! 定义分子（原子 + 键）的内存表示及其坐标变换。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `render/` 使用
//! - 子模块: molecule, transform

pub mod molecule;
pub mod transform;

pub use molecule::{Atom, Bond, Molecule, MoleculeStore};
pub use transform::XformMatrix;
