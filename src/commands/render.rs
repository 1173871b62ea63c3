//! # render 命令实现
//!
//! 批量把记录文件渲染为 SVG。
//!
//! ## 功能
//! - 读取单个记录文件或目录下匹配的记录文件
//! - 可选按 x → y → z 顺序旋转分子
//! - 使用内置或 CSV 样式表渲染
//! - 支持并行处理，每个文件独立成败
//! - 递归模式下在输出目录中保留输入的子目录结构，同名文件互不覆盖
//!
//! ## 依赖关系
//! - 使用 `cli/render.rs` 定义的参数
//! - 使用 `molrender::parsers`, `molrender::render`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::render::RenderArgs;
use crate::utils::{output, progress};
use molrender::error::{MolError, Result};
use molrender::models::XformMatrix;
use molrender::parsers;
use molrender::render::{svg, RenderConfig, StyleTable};

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use walkdir::WalkDir;

/// 执行 render 命令
pub fn execute(args: RenderArgs) -> Result<()> {
    output::print_header("Rendering molecules to SVG");

    if !args.input.exists() {
        return Err(MolError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let styles = load_styles(args.styles.as_deref())?;
    let config = RenderConfig::default();
    let matrix = rotation(args.rotate_x, args.rotate_y, args.rotate_z);

    // 创建输出目录
    fs::create_dir_all(&args.output).map_err(|e| MolError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    // 单文件：错误直接返回
    if args.input.is_file() {
        let input_root = args.input.parent().unwrap_or_else(|| Path::new(""));
        let output_path = svg_path_for(&args.input, input_root, &args.output);
        let status = render_one(
            &args.input,
            &output_path,
            &styles,
            &config,
            &matrix,
            args.overwrite,
        )?;
        match status {
            RenderStatus::Success(out) => output::print_rendered(&args.input, &out),
            RenderStatus::Skipped(out) => output::print_kept_existing(&out),
        }
        return Ok(());
    }

    let files = collect_input_files(&args.input, &args.pattern, args.recursive)?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            args.input.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} files to render", files.len()));

    // 设置并行度
    let num_threads = if args.jobs == 0 {
        num_cpus::get()
    } else {
        args.jobs
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok();

    let pb = progress::create_progress_bar(files.len() as u64, "Rendering");
    let success_count = AtomicUsize::new(0);
    let skip_count = AtomicUsize::new(0);
    let fail_count = AtomicUsize::new(0);

    files.par_iter().for_each(|input_path| {
        let output_path = svg_path_for(input_path, &args.input, &args.output);
        match render_one(input_path, &output_path, &styles, &config, &matrix, args.overwrite) {
            Ok(RenderStatus::Success(_)) => {
                success_count.fetch_add(1, Ordering::SeqCst);
            }
            Ok(RenderStatus::Skipped(_)) => {
                skip_count.fetch_add(1, Ordering::SeqCst);
            }
            Err(e) => {
                fail_count.fetch_add(1, Ordering::SeqCst);
                pb.suspend(|| output::print_render_failure(input_path, &e));
            }
        }
        pb.inc(1);
    });

    pb.finish_with_message("Done");

    output::print_render_summary(
        success_count.load(Ordering::SeqCst),
        skip_count.load(Ordering::SeqCst),
        fail_count.load(Ordering::SeqCst),
        &args.output,
    );

    Ok(())
}

enum RenderStatus {
    Success(PathBuf),
    Skipped(PathBuf),
}

/// 读取样式表，未指定时使用内置表
fn load_styles(path: Option<&Path>) -> Result<StyleTable> {
    match path {
        Some(path) => {
            let table = StyleTable::from_csv_path(path)?;
            if table.is_empty() {
                return Err(MolError::StyleTable(format!(
                    "{} defines no elements",
                    path.display()
                )));
            }
            output::print_info(&format!(
                "Loaded {} element style(s) from {}",
                table.len(),
                path.display()
            ));
            Ok(table)
        }
        None => Ok(StyleTable::default_elements()),
    }
}

/// 依次绕 x、y、z 轴旋转
fn rotation(x_deg: f64, y_deg: f64, z_deg: f64) -> XformMatrix {
    XformMatrix::x_rotation(x_deg)
        .then(&XformMatrix::y_rotation(y_deg))
        .then(&XformMatrix::z_rotation(z_deg))
}

/// 收集输入文件
fn collect_input_files(input_dir: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = if recursive {
        WalkDir::new(input_dir)
    } else {
        WalkDir::new(input_dir).max_depth(1)
    };

    let glob_pattern = glob::Pattern::new(pattern).map_err(|e| {
        MolError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
    })?;

    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            if let Some(name) = entry.file_name().to_str() {
                if glob_pattern.matches(name) {
                    files.push(entry.path().to_path_buf());
                }
            }
        }
    }

    files.sort();
    Ok(files)
}

/// 输入文件对应的 SVG 路径
///
/// 输入相对 `input_root` 的子目录在 `output_root` 下原样保留，
/// 因此 `a/water.sdf` 与 `b/water.sdf` 得到不同的输出。
fn svg_path_for(input_path: &Path, input_root: &Path, output_root: &Path) -> PathBuf {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("molecule");
    let subdir = input_path
        .parent()
        .and_then(|p| p.strip_prefix(input_root).ok())
        .unwrap_or_else(|| Path::new(""));

    output_root.join(subdir).join(format!("{}.svg", stem))
}

/// 渲染单个记录文件
fn render_one(
    input_path: &Path,
    output_path: &Path,
    styles: &StyleTable,
    config: &RenderConfig,
    matrix: &XformMatrix,
    overwrite: bool,
) -> Result<RenderStatus> {
    let output_path = output_path.to_path_buf();

    // 检查是否需要跳过
    if output_path.exists() && !overwrite {
        return Ok(RenderStatus::Skipped(output_path));
    }

    let molecule = parsers::parse_molecule_file(input_path)?;
    let molecule = if matrix.is_identity() {
        molecule
    } else {
        molecule.transformed(matrix)
    };

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|e| MolError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    svg::render_to_file(&molecule, styles, config, &output_path)?;

    Ok(RenderStatus::Success(output_path))
}
