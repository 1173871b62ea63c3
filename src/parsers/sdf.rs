//! # 化学表记录解析器
//!
//! 解析简化的 MDL 化学表（.sdf / .mol）记录，按追加顺序填充调用方提供的分子。
//!
//! ## 记录格式
//! ```text
//! name                        # 第 0-2 行：自由格式头部，忽略
//! program / comment
//! comment
//!   3  2  0  0  0  0 ...      # 第 3 行：原子数 键数 ...
//!     0.0000    0.0000    0.0000 O   0  0 ...   # x y z element ...
//!     0.8000    0.6000    0.0000 H   0  0 ...
//!    -0.8000    0.6000    0.0000 H   0  0 ...
//!   1  2  1  0 ...            # atom1 atom2 electron_pairs ...（1-based）
//!   1  3  1  0 ...
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/molecule.rs` 的 `MoleculeStore` 追加接口

use crate::error::{MolError, Result};
use crate::models::MoleculeStore;
use std::fs;
use std::path::Path;

/// 计数行所在的行号（0-based）
pub const COUNTS_LINE: usize = 3;

/// 解析记录文件并填充 `store`
pub fn parse_record_file<S>(path: &Path, store: &mut S) -> Result<()>
where
    S: MoleculeStore + ?Sized,
{
    let content = fs::read_to_string(path).map_err(|e| MolError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_record_content(&content, store)
}

/// 从字符串内容解析记录
pub fn parse_record_content<S>(content: &str, store: &mut S) -> Result<()>
where
    S: MoleculeStore + ?Sized,
{
    let lines: Vec<&str> = content.lines().collect();
    parse_record_lines(&lines, store)
}

/// 从已切分的行解析记录；`lines[0]` 必须是记录的第一行
pub fn parse_record_lines<S>(lines: &[&str], store: &mut S) -> Result<()>
where
    S: MoleculeStore + ?Sized,
{
    let (atom_count, bond_count) = parse_counts(lines)?;

    let atom_start = COUNTS_LINE + 1;
    for idx in atom_start..atom_start + atom_count {
        let (element, x, y, z) = parse_atom_line(line_at(lines, idx, "atom")?, idx)?;
        store.append_atom(element, x, y, z);
    }

    let bond_start = atom_start + atom_count;
    for idx in bond_start..bond_start + bond_count {
        let (a1, a2, epairs) = parse_bond_line(line_at(lines, idx, "bond")?, idx)?;
        let a1 = to_zero_based(a1, store.atom_count())?;
        let a2 = to_zero_based(a2, store.atom_count())?;
        store.append_bond(a1, a2, epairs)?;
    }

    Ok(())
}

/// 提取记录标题（第 0 行）
pub fn record_title(content: &str) -> Option<&str> {
    content
        .lines()
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn line_at<'a>(lines: &[&'a str], idx: usize, what: &str) -> Result<&'a str> {
    lines.get(idx).copied().ok_or_else(|| {
        MolError::format(idx + 1, format!("expected {} line, found end of record", what))
    })
}

fn parse_counts(lines: &[&str]) -> Result<(usize, usize)> {
    let line_no = COUNTS_LINE + 1;
    let line = lines
        .get(COUNTS_LINE)
        .ok_or_else(|| MolError::format(line_no, "missing counts line"))?;

    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(MolError::format(
            line_no,
            "counts line must contain atom and bond counts",
        ));
    }

    let atoms = parts[0]
        .parse::<usize>()
        .map_err(|_| MolError::format(line_no, format!("invalid atom count '{}'", parts[0])))?;
    let bonds = parts[1]
        .parse::<usize>()
        .map_err(|_| MolError::format(line_no, format!("invalid bond count '{}'", parts[1])))?;

    // 计数之和必须能表示为行号，否则后续行区间会溢出
    (COUNTS_LINE + 1)
        .checked_add(atoms)
        .and_then(|end| end.checked_add(bonds))
        .ok_or_else(|| {
            MolError::format(
                line_no,
                format!("atom/bond counts {} + {} are too large", atoms, bonds),
            )
        })?;

    Ok((atoms, bonds))
}

fn parse_atom_line(line: &str, idx: usize) -> Result<(&str, f64, f64, f64)> {
    let line_no = idx + 1;
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(MolError::format(
            line_no,
            format!("atom line needs 'x y z element', got {} token(s)", parts.len()),
        ));
    }

    // 深度排序要求坐标全序，拒绝 NaN / inf
    let coord = |i: usize, axis: char| {
        parts[i]
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                MolError::format(line_no, format!("invalid {} coordinate '{}'", axis, parts[i]))
            })
    };

    Ok((parts[3], coord(0, 'x')?, coord(1, 'y')?, coord(2, 'z')?))
}

fn parse_bond_line(line: &str, idx: usize) -> Result<(i64, i64, u8)> {
    let line_no = idx + 1;
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(MolError::format(
            line_no,
            format!(
                "bond line needs 'atom1 atom2 electron_pairs', got {} token(s)",
                parts.len()
            ),
        ));
    }

    let index = |i: usize| {
        parts[i].parse::<i64>().map_err(|_| {
            MolError::format(line_no, format!("invalid atom index '{}'", parts[i]))
        })
    };
    let epairs = parts[2].parse::<u8>().map_err(|_| {
        MolError::format(line_no, format!("invalid electron pair count '{}'", parts[2]))
    })?;

    Ok((index(0)?, index(1)?, epairs))
}

/// 1-based 文本下标转换为 0-based；0 或负数不可能指向任何原子
fn to_zero_based(one_based: i64, atom_count: usize) -> Result<usize> {
    if one_based < 1 {
        return Err(MolError::Reference {
            index: one_based - 1,
            atom_count,
        });
    }
    Ok((one_based - 1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Molecule;

    const WATER: &str = r#"Water
  molrender-test

  3  2  0  0  0  0  0  0  0  0999 V2000
    0.0000    0.0000    0.0000 O   0  0  0  0  0  0  0  0  0  0  0  0
    0.8000    0.6000    0.0000 H   0  0  0  0  0  0  0  0  0  0  0  0
   -0.8000    0.6000    0.0000 H   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  1  0  0  0  0
  1  3  1  0  0  0  0
M  END
$$$$
"#;

    #[test]
    fn test_parse_water() {
        let mut mol = Molecule::new();
        parse_record_content(WATER, &mut mol).unwrap();

        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.bond_count(), 2);

        let elements: Vec<&str> = mol.atoms().iter().map(|a| a.element.as_str()).collect();
        assert_eq!(elements, vec!["O", "H", "H"]);

        let h = mol.get_atom(2).unwrap();
        assert!((h.x - (-0.8)).abs() < 1e-12);
        assert!((h.y - 0.6).abs() < 1e-12);

        let b0 = mol.get_bond(0).unwrap();
        let b1 = mol.get_bond(1).unwrap();
        assert_eq!((b0.atom1, b0.atom2), (0, 1));
        assert_eq!((b1.atom1, b1.atom2), (0, 2));
        assert_eq!(b1.electron_pairs, 1);
    }

    #[test]
    fn test_minimal_tokens() {
        let content = "\n\n\n2 1\n0 0 0 C\n1.5 0 0 O\n1 2 2\n";
        let mut mol = Molecule::new();
        parse_record_content(content, &mut mol).unwrap();

        assert_eq!(mol.get_atom(1).unwrap().element, "O");
        assert_eq!(mol.get_bond(0).unwrap().electron_pairs, 2);
    }

    #[test]
    fn test_missing_counts_line() {
        let mut mol = Molecule::new();
        let err = parse_record_content("a\nb\nc\n", &mut mol).unwrap_err();
        assert!(matches!(err, MolError::Format { line: 4, .. }));
    }

    #[test]
    fn test_non_numeric_counts() {
        let mut mol = Molecule::new();
        let err = parse_record_content("a\nb\nc\nthree 2\n", &mut mol).unwrap_err();
        assert!(matches!(err, MolError::Format { line: 4, .. }));
    }

    #[test]
    fn test_short_atom_line() {
        let content = "\n\n\n1 0\n0.0 0.0 0.0\n";
        let mut mol = Molecule::new();
        let err = parse_record_content(content, &mut mol).unwrap_err();
        assert!(matches!(err, MolError::Format { line: 5, .. }));
    }

    #[test]
    fn test_bad_coordinate() {
        let content = "\n\n\n1 0\n0.0 abc 0.0 C\n";
        let mut mol = Molecule::new();
        let err = parse_record_content(content, &mut mol).unwrap_err();
        assert!(err.to_string().contains("invalid y coordinate"));
    }

    #[test]
    fn test_non_finite_coordinate() {
        let content = "\n\n\n1 0\n0.0 0.0 NaN C\n";
        let mut mol = Molecule::new();
        let err = parse_record_content(content, &mut mol).unwrap_err();
        assert!(err.to_string().contains("invalid z coordinate"));
    }

    #[test]
    fn test_oversized_atom_count() {
        let content = "\n\n\n18446744073709551615 0\n0 0 0 C\n";
        let mut mol = Molecule::new();
        let err = parse_record_content(content, &mut mol).unwrap_err();
        assert!(matches!(err, MolError::Format { line: 4, .. }));
        assert_eq!(mol.atom_count(), 0);
    }

    #[test]
    fn test_oversized_bond_count() {
        let content = "\n\n\n1 18446744073709551615\n0 0 0 C\n";
        let mut mol = Molecule::new();
        let err = parse_record_content(content, &mut mol).unwrap_err();
        assert!(matches!(err, MolError::Format { line: 4, .. }));
        assert_eq!(mol.atom_count(), 0);
    }

    #[test]
    fn test_truncated_record() {
        let content = "\n\n\n2 1\n0 0 0 C\n";
        let mut mol = Molecule::new();
        let err = parse_record_content(content, &mut mol).unwrap_err();
        assert!(matches!(err, MolError::Format { line: 6, .. }));
    }

    #[test]
    fn test_bond_index_out_of_range() {
        let content = "\n\n\n2 1\n0 0 0 C\n1 0 0 C\n1 3 1\n";
        let mut mol = Molecule::new();
        let err = parse_record_content(content, &mut mol).unwrap_err();
        assert!(matches!(
            err,
            MolError::Reference {
                index: 2,
                atom_count: 2
            }
        ));
    }

    #[test]
    fn test_zero_bond_index_is_reference_error() {
        let content = "\n\n\n1 1\n0 0 0 C\n0 1 1\n";
        let mut mol = Molecule::new();
        let err = parse_record_content(content, &mut mol).unwrap_err();
        assert!(matches!(err, MolError::Reference { index: -1, .. }));
    }

    #[test]
    fn test_malformed_bond_token() {
        let content = "\n\n\n2 1\n0 0 0 C\n1 0 0 C\n1 x 1\n";
        let mut mol = Molecule::new();
        let err = parse_record_content(content, &mut mol).unwrap_err();
        assert!(matches!(err, MolError::Format { line: 7, .. }));
    }

    #[test]
    fn test_record_title() {
        assert_eq!(record_title(WATER), Some("Water"));
        assert_eq!(record_title("   \nfoo"), None);
    }
}
