//! # 统一错误处理模块
//!
//! 定义 molrender 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - `Format`: 记录文本缺行、缺 token 或数值无法解析
//! - `Reference`: 键引用了尚未追加的原子
//! - `Index`: 原子/键访问越界
//! - `MissingStyle`: 样式表中缺少某元素
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// molrender 统一错误类型
#[derive(Error, Debug)]
pub enum MolError {
    // ─────────────────────────────────────────────────────────────
    // 核心错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed record at line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("Bond references atom {index}, but only {atom_count} atom(s) are present")]
    Reference { index: i64, atom_count: usize },

    #[error("{kind} index {index} out of range (count = {count})")]
    Index {
        kind: &'static str,
        index: usize,
        count: usize,
    },

    #[error("No {table} style for element '{element}'")]
    MissingStyle {
        element: String,
        table: &'static str,
    },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid style table: {0}")]
    StyleTable(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl MolError {
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        MolError::Format {
            line,
            reason: reason.into(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MolError>;
