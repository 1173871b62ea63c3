//! # 元素样式表
//!
//! 元素符号到显示半径、填充引用（径向渐变名）的两张映射，以及可选的渐变定义。
//! 样式表由调用方在每次渲染时显式传入，渲染器不缓存也不修改它。
//!
//! ## CSV 格式
//! ```text
//! number,code,name,colour1,colour2,colour3,radius
//! 1,H,Hydrogen,FFFFFF,050505,020202,25
//! 8,O,Oxygen,FF0000,050000,020000,40
//! ```
//!
//! ## 依赖关系
//! - 被 `render/svg.rs` 和 `commands/render.rs` 使用
//! - 使用 `csv` + `serde` 读取样式配置

use crate::error::{MolError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 样式表中的一行元素定义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRow {
    /// 原子序数
    pub number: u32,
    pub code: String,
    /// 元素名，同时作为渐变 id 与填充引用
    pub name: String,
    pub colour1: String,
    pub colour2: String,
    pub colour3: String,
    pub radius: u32,
}

/// 径向渐变定义
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub id: String,
    pub colours: [String; 3],
}

impl Gradient {
    /// 生成 `<radialGradient>` 元素
    pub fn to_svg(&self) -> String {
        format!(
            concat!(
                "  <radialGradient id=\"{}\" cx=\"-50%\" cy=\"-50%\" r=\"220%\" fx=\"20%\" fy=\"20%\">\n",
                "    <stop offset=\"0%\" stop-color=\"#{}\"/>\n",
                "    <stop offset=\"50%\" stop-color=\"#{}\"/>\n",
                "    <stop offset=\"100%\" stop-color=\"#{}\"/>\n",
                "  </radialGradient>\n"
            ),
            self.id, self.colours[0], self.colours[1], self.colours[2]
        )
    }
}

/// 元素样式表
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    radii: HashMap<String, u32>,
    fills: HashMap<String, String>,
    gradients: Vec<Gradient>,
}

impl StyleTable {
    /// 空样式表
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置默认样式（H, C, N, O）
    pub fn default_elements() -> Self {
        let rows = [
            (1, "H", "Hydrogen", ["FFFFFF", "050505", "020202"], 25),
            (6, "C", "Carbon", ["808080", "010101", "000000"], 40),
            (7, "N", "Nitrogen", ["0000FF", "000005", "000002"], 40),
            (8, "O", "Oxygen", ["FF0000", "050000", "020000"], 40),
        ];

        let mut table = StyleTable::new();
        for (number, code, name, [c1, c2, c3], radius) in rows {
            table.push_row(ElementRow {
                number,
                code: code.to_string(),
                name: name.to_string(),
                colour1: c1.to_string(),
                colour2: c2.to_string(),
                colour3: c3.to_string(),
                radius,
            });
        }
        table
    }

    /// 从 CSV 文件读取样式表
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| MolError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_csv_reader(file)
    }

    /// 从任意 CSV 输入读取样式表
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut table = StyleTable::new();
        for record in rdr.deserialize::<ElementRow>() {
            table.insert_element(record?)?;
        }
        Ok(table)
    }

    pub fn insert_radius(&mut self, code: impl Into<String>, radius: u32) {
        self.radii.insert(code.into(), radius);
    }

    pub fn insert_fill(&mut self, code: impl Into<String>, fill: impl Into<String>) {
        self.fills.insert(code.into(), fill.into());
    }

    /// 添加渐变定义，同名渐变以后者为准
    pub fn add_gradient(&mut self, gradient: Gradient) {
        match self.gradients.iter_mut().find(|g| g.id == gradient.id) {
            Some(existing) => *existing = gradient,
            None => self.gradients.push(gradient),
        }
    }

    /// 校验后插入一行元素定义
    pub fn insert_element(&mut self, row: ElementRow) -> Result<()> {
        if row.code.is_empty() {
            return Err(MolError::StyleTable(format!(
                "element #{} has an empty code",
                row.number
            )));
        }
        if !is_valid_name(&row.name) {
            return Err(MolError::StyleTable(format!(
                "element '{}' has an invalid name '{}'",
                row.code, row.name
            )));
        }
        for colour in [&row.colour1, &row.colour2, &row.colour3] {
            if !is_hex_colour(colour) {
                return Err(MolError::StyleTable(format!(
                    "element '{}' has an invalid colour '{}' (expected 6 hex digits)",
                    row.code, colour
                )));
            }
        }

        self.push_row(row);
        Ok(())
    }

    fn push_row(&mut self, row: ElementRow) {
        self.insert_radius(row.code.clone(), row.radius);
        self.insert_fill(row.code, row.name.clone());
        self.add_gradient(Gradient {
            id: row.name,
            colours: [row.colour1, row.colour2, row.colour3],
        });
    }

    /// 查询显示半径
    pub fn radius(&self, code: &str) -> Result<u32> {
        self.radii
            .get(code)
            .copied()
            .ok_or_else(|| MolError::MissingStyle {
                element: code.to_string(),
                table: "radius",
            })
    }

    /// 查询填充引用
    pub fn fill(&self, code: &str) -> Result<&str> {
        self.fills
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| MolError::MissingStyle {
                element: code.to_string(),
                table: "fill",
            })
    }

    pub fn gradients(&self) -> &[Gradient] {
        &self.gradients
    }

    /// 所有渐变定义拼接成的 SVG 片段
    pub fn radial_gradients_svg(&self) -> String {
        self.gradients.iter().map(Gradient::to_svg).collect()
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }
}

/// 名称会原样写入 `id="…"` 和 `url(#…)`，只允许字母、数字、`_`、`-`
fn is_valid_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn is_hex_colour(s: &str) -> bool {
    s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit())
}
