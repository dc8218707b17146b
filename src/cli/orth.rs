//! # orth 子命令 CLI 定义
//!
//! 分数坐标与笛卡尔坐标互相转换。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/orth.rs`

use super::{parse_six, parse_vec3};
use clap::Args;

/// orth 子命令参数
#[derive(Args, Debug)]
pub struct OrthArgs {
    /// Direct-space cell "a,b,c,alpha,beta,gamma" (Å, degrees)
    #[arg(long, value_parser = parse_six)]
    pub cell: [f64; 6],

    /// Fractional coordinate "x,y,z" (repeatable)
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub frac: Vec<[f64; 3]>,

    /// Cartesian coordinate "X,Y,Z" in Å (repeatable)
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub cart: Vec<[f64; 3]>,

    /// Print the orthogonalization matrices
    #[arg(long, default_value_t = false)]
    pub show_matrices: bool,
}
