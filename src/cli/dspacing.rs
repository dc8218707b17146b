//! # dspacing 子命令 CLI 定义
//!
//! 计算 (hkl) 的 d 间距，可选给出波长以同时计算 Bragg 角 2θ。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/dspacing.rs`

use super::{parse_hkl, parse_six};
use clap::Args;

/// 预定义辐射源波长 (Å)
pub fn get_predefined_wavelength(name: &str) -> Option<f64> {
    match name.to_lowercase().as_str() {
        "cu-ka" | "cuka" => Some(1.5418),
        "cu-ka1" | "cuka1" => Some(1.5406),
        "cu-ka2" | "cuka2" => Some(1.5444),
        "cu-kb1" | "cukb1" => Some(1.3922),
        "mo-ka" | "moka" => Some(0.7107),
        "mo-ka1" | "moka1" => Some(0.7093),
        "co-ka" | "coka" => Some(1.7903),
        "fe-ka" | "feka" => Some(1.9373),
        "cr-ka" | "crka" => Some(2.2910),
        "ag-ka" | "agka" => Some(0.5609),
        _ => None,
    }
}

/// 解析波长输入（辐射源名称或数值）
pub fn parse_wavelength(input: &str) -> Result<f64, String> {
    if let Some(wl) = get_predefined_wavelength(input) {
        return Ok(wl);
    }
    let wl = input.parse::<f64>().map_err(|_| {
        format!(
            "Invalid wavelength '{}'. Use a number (e.g., 0.424589) or a name: cu-ka, mo-ka, co-ka, fe-ka, cr-ka, ag-ka",
            input
        )
    })?;
    if wl <= 0.0 || !wl.is_finite() {
        return Err(format!("Wavelength must be positive, got {}", input));
    }
    Ok(wl)
}

/// dspacing 子命令参数
#[derive(Args, Debug)]
pub struct DspacingArgs {
    /// Direct-space cell "a,b,c,alpha,beta,gamma" (Å, degrees)
    #[arg(long, value_parser = parse_six)]
    pub cell: [f64; 6],

    /// Miller indices "h,k,l" (repeatable)
    #[arg(long = "hkl", value_parser = parse_hkl, allow_hyphen_values = true, required = true)]
    pub reflections: Vec<[i32; 3]>,

    /// X-ray wavelength: radiation source name (cu-ka, mo-ka, etc.) or value in Å
    #[arg(short, long, value_parser = parse_wavelength)]
    pub wavelength: Option<f64>,
}
