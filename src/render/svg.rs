//! # SVG 投影与输出
//!
//! 把深度排序后的渲染实体逐个投影到画布，输出完整的 SVG 文档。
//!
//! ## 投影规则
//! - 原子 → `<circle>`：`cx = offset_x + x * scale`，`cy = offset_y + y * scale`，
//!   半径与填充引用来自样式表
//! - 键 → `<polygon>`：在两个端点处沿法向 (-dy, dx) 各偏移 `bond_half_width`，
//!   得到与键轴对齐的细长四边形，四个角统一使用同一组画布偏移
//! - 键级不影响几何，所有键都画成同宽的单条色带
//!
//! ## 依赖关系
//! - 被 `commands/render.rs` 调用
//! - 使用 `render/compositor.rs` 的排序结果和 `render/style.rs` 的样式表

use crate::error::{MolError, Result};
use crate::models::{Atom, Bond, MoleculeStore};
use crate::render::compositor::{self, Entity, RenderEntity};
use crate::render::style::StyleTable;
use std::fs;
use std::path::Path;

/// 渲染参数
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// 画布尺寸（正方形）
    pub width: u32,
    pub height: u32,

    /// 分子原点在画布上的位置
    pub offset_x: f64,
    pub offset_y: f64,

    /// 每个坐标单位对应的画布长度
    pub scale: f64,

    /// 键色带半宽
    pub bond_half_width: f64,

    /// 键填充色（与元素无关）
    pub bond_fill: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 1000,
            height: 1000,
            offset_x: 500.0,
            offset_y: 500.0,
            scale: 100.0,
            bond_half_width: 10.0,
            bond_fill: "green".to_string(),
        }
    }
}

impl RenderConfig {
    /// 原子中心的画布坐标
    pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
        (self.offset_x + x * self.scale, self.offset_y + y * self.scale)
    }
}

/// 文档头：`<svg>` 开标签及样式表中的渐变定义
pub fn header(styles: &StyleTable, config: &RenderConfig) -> String {
    format!(
        "<svg version=\"1.1\" width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n{}",
        config.width,
        config.height,
        styles.radial_gradients_svg()
    )
}

/// 文档尾
pub const FOOTER: &str = "</svg>";

/// 原子 → 圆
pub fn atom_svg(atom: &Atom, styles: &StyleTable, config: &RenderConfig) -> Result<String> {
    let radius = styles.radius(&atom.element)?;
    let fill = styles.fill(&atom.element)?;
    let (cx, cy) = config.project(atom.x, atom.y);

    Ok(format!(
        "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"url(#{})\"/>\n",
        cx, cy, radius, fill
    ))
}

/// 键色带的四个角（画布坐标）
///
/// 顺序：端点 1 的 (-法向, +法向)，端点 2 的 (+法向, -法向)，首尾相接不自交。
pub fn bond_corners(bond: &Bond, config: &RenderConfig) -> [(f64, f64); 4] {
    let w = config.bond_half_width;
    let (px, py) = (-bond.dy * w, bond.dx * w);
    let (x1, y1) = config.project(bond.x1, bond.y1);
    let (x2, y2) = config.project(bond.x2, bond.y2);

    [
        (x1 + px, y1 + py),
        (x1 - px, y1 - py),
        (x2 - px, y2 - py),
        (x2 + px, y2 + py),
    ]
}

/// 键 → 多边形
pub fn bond_svg(bond: &Bond, config: &RenderConfig) -> String {
    let points = bond_corners(bond, config)
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "  <polygon points=\"{}\" fill=\"{}\"/>\n",
        points, config.bond_fill
    )
}

/// 按给定顺序输出完整文档
///
/// 任一原子缺少样式时返回错误，不产生残缺文档。
pub fn render_entities(
    entities: &[RenderEntity<'_>],
    styles: &StyleTable,
    config: &RenderConfig,
) -> Result<String> {
    let mut doc = header(styles, config);

    for item in entities {
        match item.entity {
            Entity::Atom(atom) => doc.push_str(&atom_svg(atom, styles, config)?),
            Entity::Bond(bond) => doc.push_str(&bond_svg(bond, config)),
        }
    }

    doc.push_str(FOOTER);
    Ok(doc)
}

/// 合成并渲染一个分子
pub fn render_molecule<S>(store: &S, styles: &StyleTable, config: &RenderConfig) -> Result<String>
where
    S: MoleculeStore + ?Sized,
{
    let entities = compositor::composite(store)?;
    render_entities(&entities, styles, config)
}

/// 渲染并写入文件；渲染失败时不创建输出文件
pub fn render_to_file<S>(
    store: &S,
    styles: &StyleTable,
    config: &RenderConfig,
    path: &Path,
) -> Result<()>
where
    S: MoleculeStore + ?Sized,
{
    let doc = render_molecule(store, styles, config)?;

    fs::write(path, doc).map_err(|e| MolError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}
