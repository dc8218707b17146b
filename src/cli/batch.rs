//! # batch 子命令 CLI 定义
//!
//! 批量转换 CSV 晶胞表（表头 a,b,c,alpha,beta,gamma）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input: CSV file or directory containing CSV files
    pub input: PathBuf,

    /// Output directory for converted tables
    #[arg(short, long, default_value = "lattice_out")]
    pub output: PathBuf,

    /// Glob pattern for input files (comma separated, e.g., "*.csv,cells_*")
    #[arg(short, long, default_value = "*.csv")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
