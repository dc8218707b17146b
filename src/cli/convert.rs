//! # convert 子命令 CLI 定义
//!
//! 从正空间晶胞、倒空间晶胞或 A 张量之一出发，导出其余全部表示。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use super::parse_six;
use clap::{ArgGroup, Args};

/// convert 子命令参数
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["cell", "reciprocal", "a_tensor"])
))]
pub struct ConvertArgs {
    /// Direct-space cell "a,b,c,alpha,beta,gamma" (Å, degrees)
    #[arg(long, value_parser = parse_six)]
    pub cell: Option<[f64; 6]>,

    /// Reciprocal-space cell "a*,b*,c*,alpha*,beta*,gamma*" (1/Å, degrees)
    #[arg(long, value_parser = parse_six)]
    pub reciprocal: Option<[f64; 6]>,

    /// A-tensor "A0,A1,A2,A3,A4,A5"
    #[arg(long, value_parser = parse_six, allow_hyphen_values = true)]
    pub a_tensor: Option<[f64; 6]>,

    /// Number of decimal places in printed tensors
    #[arg(long, default_value_t = 6)]
    pub precision: usize,
}
