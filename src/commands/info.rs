//! # info 命令实现
//!
//! 解析单个记录并在终端显示摘要。
//!
//! ## 功能
//! - 原子数、键数、化学式
//! - 可选列出所有原子与键（含深度键）
//!
//! ## 依赖关系
//! - 使用 `cli/info.rs` 定义的参数
//! - 使用 `molrender::parsers`
//! - 使用 `utils/output.rs` 和 `tabled`

use crate::cli::info::InfoArgs;
use crate::utils::output;
use molrender::error::{MolError, Result};
use molrender::models::{Molecule, MoleculeStore};
use molrender::parsers;
use molrender::render::StyleTable;

use std::fs;
use tabled::{Table, Tabled};

/// 原子行
#[derive(Debug, Clone, Tabled)]
struct AtomRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Element")]
    element: String,
    #[tabled(rename = "x")]
    x: String,
    #[tabled(rename = "y")]
    y: String,
    #[tabled(rename = "z")]
    z: String,
}

/// 键行
#[derive(Debug, Clone, Tabled)]
struct BondRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Atom 1")]
    atom1: usize,
    #[tabled(rename = "Atom 2")]
    atom2: usize,
    #[tabled(rename = "Pairs")]
    electron_pairs: u8,
    #[tabled(rename = "Depth")]
    depth: String,
}

/// 执行 info 命令
pub fn execute(args: InfoArgs) -> Result<()> {
    if !args.file.exists() {
        return Err(MolError::FileNotFound {
            path: args.file.display().to_string(),
        });
    }
    if !parsers::is_record_file(&args.file) {
        return Err(MolError::UnsupportedFormat(format!(
            "Cannot determine format for: {}",
            args.file.display()
        )));
    }

    let content = fs::read_to_string(&args.file).map_err(|e| MolError::FileReadError {
        path: args.file.display().to_string(),
        source: e,
    })?;

    let mut molecule = Molecule::new();
    parsers::parse_record_content(&content, &mut molecule)?;

    let title = parsers::record_title(&content)
        .map(str::to_string)
        .unwrap_or_else(|| args.file.display().to_string());

    output::print_header(&title);
    output::print_info(&format!("Atoms:   {}", molecule.atom_count()));
    output::print_info(&format!("Bonds:   {}", molecule.bond_count()));
    output::print_info(&format!("Formula: {}", molecule.formula()));

    // 提示内置样式表无法渲染的元素
    let styles = StyleTable::default_elements();
    let mut unstyled: Vec<&str> = molecule
        .atoms()
        .iter()
        .map(|a| a.element.as_str())
        .filter(|el| styles.radius(el).is_err())
        .collect();
    unstyled.sort_unstable();
    unstyled.dedup();
    if !unstyled.is_empty() {
        output::print_warning(&format!(
            "No built-in style for: {} (pass --styles when rendering)",
            unstyled.join(", ")
        ));
    }

    if args.verbose {
        print_tables(&molecule);
    }

    Ok(())
}

/// 打印原子表与键表
fn print_tables(molecule: &Molecule) {
    let atom_rows: Vec<AtomRow> = molecule
        .atoms()
        .iter()
        .enumerate()
        .map(|(i, a)| AtomRow {
            index: i,
            element: a.element.clone(),
            x: format!("{:.4}", a.x),
            y: format!("{:.4}", a.y),
            z: format!("{:.4}", a.z),
        })
        .collect();

    let bond_rows: Vec<BondRow> = molecule
        .bonds()
        .iter()
        .enumerate()
        .map(|(i, b)| BondRow {
            index: i,
            atom1: b.atom1,
            atom2: b.atom2,
            electron_pairs: b.electron_pairs,
            depth: format!("{:.4}", b.depth()),
        })
        .collect();

    if !atom_rows.is_empty() {
        output::print_header("Atoms");
        println!("{}", Table::new(&atom_rows));
    }
    if !bond_rows.is_empty() {
        output::print_header("Bonds");
        println!("{}", Table::new(&bond_rows));
    }
}
