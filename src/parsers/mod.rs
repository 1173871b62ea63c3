//! # 解析器模块
//!
//! 提供化学表记录（.sdf / .mol）的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: sdf

pub mod sdf;

use crate::error::{MolError, Result};
use crate::models::Molecule;
use std::path::Path;

pub use sdf::{parse_record_content, parse_record_file, parse_record_lines, record_title};

/// 判断文件扩展名是否为支持的记录格式
pub fn is_record_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| matches!(s.to_lowercase().as_str(), "sdf" | "mol"))
        .unwrap_or(false)
}

/// 从文件路径推断格式并解析为新的分子
pub fn parse_molecule_file(path: &Path) -> Result<Molecule> {
    if !path.exists() {
        return Err(MolError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    if !is_record_file(path) {
        return Err(MolError::UnsupportedFormat(format!(
            "Cannot determine format for: {}",
            path.display()
        )));
    }

    let mut molecule = Molecule::new();
    sdf::parse_record_file(path, &mut molecule)?;
    Ok(molecule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_record_file() {
        assert!(is_record_file(Path::new("water.sdf")));
        assert!(is_record_file(Path::new("caffeine.MOL")));
        assert!(!is_record_file(Path::new("POSCAR")));
        assert!(!is_record_file(Path::new("water.svg")));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_molecule_file(Path::new("does/not/exist.sdf")).unwrap_err();
        assert!(matches!(err, MolError::FileNotFound { .. }));
    }

    #[test]
    fn test_parse_wrong_extension() {
        let path = std::env::temp_dir().join(format!("molrender-test-{}.xyz", std::process::id()));
        std::fs::write(&path, "Water\n\n\n1 0\n0 0 0 O\n").unwrap();

        let err = parse_molecule_file(&path).unwrap_err();
        assert!(matches!(err, MolError::UnsupportedFormat(_)));

        std::fs::remove_file(&path).ok();
    }
}
