//! # 深度合成
//!
//! 将分子的原子与键合并为一个渲染列表，并按深度升序稳定排序（画家算法：
//! z 小的先画，z 大的覆盖在上面）。
//!
//! ## 依赖关系
//! - 被 `render/svg.rs` 使用
//! - 使用 `models/molecule.rs` 的 `MoleculeStore` 读取接口

use crate::error::Result;
use crate::models::{Atom, Bond, MoleculeStore};
use std::cmp::Ordering;

/// 渲染实体：原子或键的引用
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entity<'a> {
    Atom(&'a Atom),
    Bond(&'a Bond),
}

/// 带深度键的渲染实体
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderEntity<'a> {
    pub entity: Entity<'a>,
    pub depth: f64,
}

impl<'a> RenderEntity<'a> {
    pub fn atom(atom: &'a Atom) -> Self {
        RenderEntity {
            entity: Entity::Atom(atom),
            depth: atom.z,
        }
    }

    pub fn bond(bond: &'a Bond) -> Self {
        RenderEntity {
            entity: Entity::Bond(bond),
            depth: bond.depth(),
        }
    }
}

/// 生成按深度排序的渲染列表
///
/// 先原子后键按追加顺序拼接，再做稳定排序，深度相同的实体保持拼接顺序。
pub fn composite<S>(store: &S) -> Result<Vec<RenderEntity<'_>>>
where
    S: MoleculeStore + ?Sized,
{
    let mut entities = Vec::with_capacity(store.atom_count() + store.bond_count());

    for i in 0..store.atom_count() {
        entities.push(RenderEntity::atom(store.get_atom(i)?));
    }
    for i in 0..store.bond_count() {
        entities.push(RenderEntity::bond(store.get_bond(i)?));
    }

    sort_by_depth(&mut entities);
    Ok(entities)
}

/// 稳定排序（`slice::sort_by` 保证稳定）
pub fn sort_by_depth(entities: &mut [RenderEntity<'_>]) {
    entities.sort_by(|a, b| a.depth.partial_cmp(&b.depth).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Molecule;

    fn label(e: &RenderEntity<'_>) -> String {
        match e.entity {
            Entity::Atom(a) => a.element.clone(),
            Entity::Bond(b) => format!("{}-{}", b.atom1, b.atom2),
        }
    }

    #[test]
    fn test_sorted_ascending_by_depth() {
        let mut mol = Molecule::new();
        mol.append_atom("A", 0.0, 0.0, 2.0);
        mol.append_atom("B", 0.0, 0.0, -1.0);
        mol.append_atom("C", 0.0, 0.0, 0.5);
        mol.append_bond(2, 0, 1).unwrap(); // depth 0.5
        mol.append_bond(1, 2, 1).unwrap(); // depth -1.0

        let order: Vec<String> = composite(&mol).unwrap().iter().map(label).collect();
        assert_eq!(order, vec!["B", "1-2", "C", "2-0", "A"]);
    }

    #[test]
    fn test_equal_depth_keeps_atoms_then_bonds() {
        let mut mol = Molecule::new();
        mol.append_atom("O", 0.0, 0.0, 0.0);
        mol.append_atom("H", 0.8, 0.6, 0.0);
        mol.append_atom("H", -0.8, 0.6, 0.0);
        mol.append_bond(0, 1, 1).unwrap();
        mol.append_bond(0, 2, 1).unwrap();

        let order: Vec<String> = composite(&mol).unwrap().iter().map(label).collect();
        assert_eq!(order, vec!["O", "H", "H", "0-1", "0-2"]);
    }

    #[test]
    fn test_repeated_sort_is_stable() {
        let mut mol = Molecule::new();
        for i in 0..6 {
            mol.append_atom(&format!("E{}", i), 0.0, 0.0, (i % 2) as f64);
        }
        mol.append_bond(0, 1, 1).unwrap();
        mol.append_bond(2, 3, 1).unwrap();

        let mut entities = composite(&mol).unwrap();
        let first: Vec<String> = entities.iter().map(label).collect();

        sort_by_depth(&mut entities);
        sort_by_depth(&mut entities);
        let again: Vec<String> = entities.iter().map(label).collect();

        assert_eq!(first, again);
        assert_eq!(first, vec!["E0", "E2", "E4", "0-1", "2-3", "E1", "E3", "E5"]);
    }

    #[test]
    fn test_one_entity_per_atom_and_bond() {
        let mut mol = Molecule::new();
        mol.append_atom("C", 0.0, 0.0, 0.0);
        mol.append_atom("C", 1.0, 0.0, 0.0);
        mol.append_bond(0, 1, 1).unwrap();

        let entities = composite(&mol).unwrap();
        assert_eq!(entities.len(), 3);
        assert!(composite(&Molecule::new()).unwrap().is_empty());
    }
}
