//! # 统一错误处理模块
//!
//! 定义 cellkit 的所有错误类型，使用 `thiserror` 派生。
//!
//! 数值错误分三类：
//! - `SingularMatrix`: 度规张量不可逆（退化晶胞），直接向调用方传播
//! - `NegativeRadicand`: 度规张量对角元因舍入误差为负，默认路径钳位为 0
//! - `NegativeVolumeSquare`: 倒易体积平方为负，默认路径回退为 1.0
//!
//! 后两类只由严格版本函数（`try_*`）返回。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// cellkit 统一错误类型
#[derive(Error, Debug)]
pub enum CellkitError {
    // ─────────────────────────────────────────────────────────────
    // 数值错误
    // ─────────────────────────────────────────────────────────────
    #[error("Singular {what}: normalized determinant {determinant:e} (degenerate cell)")]
    SingularMatrix { what: String, determinant: f64 },

    #[error("Negative metric tensor diagonal on axis {axis}: {value:e}")]
    NegativeRadicand { axis: char, value: f64 },

    #[error("Negative reciprocal volume squared: {value:e}")]
    NegativeVolumeSquare { value: f64 },

    #[error("Invalid cell: {0}")]
    InvalidCell(String),

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Lattice configuration has already been initialized")]
    ConfigAlreadyInitialized,

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

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CellkitError>;
