//! # 分子数据模型
//!
//! 原子与键的有序集合。原子、键均以追加顺序的下标作为身份，
//! 追加后不再修改或重排。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `render/` 使用
//! - 使用 `models/transform.rs` 生成旋转后的副本

use crate::error::{MolError, Result};
use crate::models::transform::XformMatrix;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 投影键长低于此值时视为端点重合
const MIN_BOND_LENGTH: f64 = 1e-12;

/// 原子信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// 元素符号
    pub element: String,

    /// 分子局部坐标
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Atom {
    pub fn new(element: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Atom {
            element: element.into(),
            x,
            y,
            z,
        }
    }
}

/// 化学键
///
/// 端点坐标在追加时从原子序列中解析并缓存；之后追加的原子不会影响已存在的键。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    /// 0-based 原子下标
    pub atom1: usize,
    pub atom2: usize,

    /// 键级（电子对数）
    pub electron_pairs: u8,

    /// 端点坐标
    pub x1: f64,
    pub y1: f64,
    pub z1: f64,
    pub x2: f64,
    pub y2: f64,
    pub z2: f64,

    /// 投影平面内的键长
    pub len: f64,

    /// 沿键轴的单位方向 (x2-x1, y2-y1)/len；偏移方向取其法向 (-dy, dx)
    pub dx: f64,
    pub dy: f64,
}

impl Bond {
    /// 由两个端点原子解析键的几何
    fn resolve(atom1: usize, atom2: usize, electron_pairs: u8, a: &Atom, b: &Atom) -> Self {
        let ex = b.x - a.x;
        let ey = b.y - a.y;
        let len = (ex * ex + ey * ey).sqrt();

        // 端点在投影平面内重合时没有方向可言，带宽退化为零
        let (dx, dy) = if len > MIN_BOND_LENGTH {
            (ex / len, ey / len)
        } else {
            (0.0, 0.0)
        };

        Bond {
            atom1,
            atom2,
            electron_pairs,
            x1: a.x,
            y1: a.y,
            z1: a.z,
            x2: b.x,
            y2: b.y,
            z2: b.z,
            len,
            dx,
            dy,
        }
    }

    /// 深度排序键：第一个端点的 z
    pub fn depth(&self) -> f64 {
        self.z1
    }
}

/// 分子存储接口
///
/// 合成器与渲染器只依赖这组能力，内存实现与其他来源的适配器都可以满足它。
pub trait MoleculeStore {
    /// 追加原子，返回其下标
    fn append_atom(&mut self, element: &str, x: f64, y: f64, z: f64) -> usize;

    /// 追加键，两个下标都必须指向已追加的原子
    fn append_bond(&mut self, atom1: usize, atom2: usize, electron_pairs: u8) -> Result<usize>;

    fn atom_count(&self) -> usize;

    fn bond_count(&self) -> usize;

    fn get_atom(&self, index: usize) -> Result<&Atom>;

    fn get_bond(&self, index: usize) -> Result<&Bond>;
}

/// 分子（内存实现）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预分配容量的空分子
    pub fn with_capacity(atoms: usize, bonds: usize) -> Self {
        Molecule {
            atoms: Vec::with_capacity(atoms),
            bonds: Vec::with_capacity(bonds),
        }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// 计算化学式（按元素符号排序，计数为 1 时省略）
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

        for atom in &self.atoms {
            *counts.entry(atom.element.as_str()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(el, count)| {
                if count == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// 返回施加变换后的新分子，键几何按新坐标重新解析
    pub fn transformed(&self, matrix: &XformMatrix) -> Molecule {
        let mut out = Molecule::with_capacity(self.atoms.len(), self.bonds.len());

        for atom in &self.atoms {
            let [x, y, z] = matrix.apply([atom.x, atom.y, atom.z]);
            out.atoms.push(Atom::new(atom.element.clone(), x, y, z));
        }

        // 下标沿用原分子，必然有效
        for bond in &self.bonds {
            let resolved = Bond::resolve(
                bond.atom1,
                bond.atom2,
                bond.electron_pairs,
                &out.atoms[bond.atom1],
                &out.atoms[bond.atom2],
            );
            out.bonds.push(resolved);
        }

        out
    }
}

impl MoleculeStore for Molecule {
    fn append_atom(&mut self, element: &str, x: f64, y: f64, z: f64) -> usize {
        self.atoms.push(Atom::new(element, x, y, z));
        self.atoms.len() - 1
    }

    fn append_bond(&mut self, atom1: usize, atom2: usize, electron_pairs: u8) -> Result<usize> {
        let atom_count = self.atoms.len();
        let lookup = |index: usize| {
            self.atoms.get(index).ok_or(MolError::Reference {
                index: index as i64,
                atom_count,
            })
        };

        let bond = Bond::resolve(atom1, atom2, electron_pairs, lookup(atom1)?, lookup(atom2)?);
        self.bonds.push(bond);
        Ok(self.bonds.len() - 1)
    }

    fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    fn get_atom(&self, index: usize) -> Result<&Atom> {
        self.atoms.get(index).ok_or(MolError::Index {
            kind: "atom",
            index,
            count: self.atoms.len(),
        })
    }

    fn get_bond(&self, index: usize) -> Result<&Bond> {
        self.bonds.get(index).ok_or(MolError::Index {
            kind: "bond",
            index,
            count: self.bonds.len(),
        })
    }
}
