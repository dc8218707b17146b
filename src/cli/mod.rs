//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 晶胞 / 倒空间晶胞 / A 张量之间的转换
//! - `orth`: 分数坐标 ⇄ 笛卡尔坐标
//! - `dspacing`: 计算 (hkl) 的 d 间距
//! - `esd`: 由 A 张量协方差计算晶胞参数不确定度
//! - `batch`: 批量转换 CSV 晶胞表
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, orth, dspacing, esd, batch

pub mod batch;
pub mod convert;
pub mod dspacing;
pub mod esd;
pub mod orth;

use cellkit::config::DEFAULT_SINGULAR_TOLERANCE;
use clap::{Parser, Subcommand};
use std::str::FromStr;

/// cellkit - 晶胞几何计算工具
#[derive(Parser)]
#[command(name = "cellkit")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Crystallographic unit-cell geometry toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose (debug) logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Normalized-determinant threshold below which a metric tensor is treated as singular
    #[arg(
        long,
        global = true,
        env = "CELLKIT_SINGULAR_TOL",
        default_value_t = DEFAULT_SINGULAR_TOLERANCE
    )]
    pub tolerance: f64,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert between direct cell, reciprocal cell and A-tensor
    Convert(convert::ConvertArgs),

    /// Convert fractional coordinates to Cartesian and back
    Orth(orth::OrthArgs),

    /// Calculate d-spacings for Miller indices
    Dspacing(dspacing::DspacingArgs),

    /// Propagate an A-tensor covariance matrix to cell parameter uncertainties
    Esd(esd::EsdArgs),

    /// Convert CSV tables of cells in parallel
    Batch(batch::BatchArgs),
}

/// 解析逗号或空白分隔的定长数值列表
pub fn parse_numbers<T: FromStr, const N: usize>(input: &str) -> Result<[T; N], String> {
    let values: Vec<T> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<T>()
                .map_err(|_| format!("'{}' is not a valid number", s))
        })
        .collect::<Result<_, _>>()?;

    let count = values.len();
    values
        .try_into()
        .map_err(|_| format!("expected {} values, got {} in '{}'", N, count, input))
}

/// 解析六个数值（晶胞参数或 A 张量）
pub fn parse_six(input: &str) -> Result<[f64; 6], String> {
    parse_numbers::<f64, 6>(input)
}

/// 解析三维坐标
pub fn parse_vec3(input: &str) -> Result<[f64; 3], String> {
    parse_numbers::<f64, 3>(input)
}

/// 解析 Miller 指数
pub fn parse_hkl(input: &str) -> Result<[i32; 3], String> {
    parse_numbers::<i32, 3>(input)
}
