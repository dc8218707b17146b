//! # esd 子命令 CLI 定义
//!
//! 由 A 张量及其 6×6 方差-协方差矩阵计算晶胞参数标准不确定度。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/esd.rs`

use super::parse_six;
use clap::Args;
use std::path::PathBuf;

/// esd 子命令参数
#[derive(Args, Debug)]
pub struct EsdArgs {
    /// Refined A-tensor "A0,A1,A2,A3,A4,A5"
    #[arg(long, value_parser = parse_six, allow_hyphen_values = true)]
    pub a_tensor: [f64; 6],

    /// Headerless CSV file holding the 6x6 variance-covariance matrix of A0..A5
    #[arg(long)]
    pub cov: PathBuf,
}
