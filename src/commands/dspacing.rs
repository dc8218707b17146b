//! # dspacing 命令实现
//!
//! 由晶胞计算 (hkl) 的 1/d² 与 d，给出波长时按 Bragg 定律 λ = 2d·sin θ 计算 2θ。
//!
//! ## 依赖关系
//! - 使用 `cli/dspacing.rs` 定义的参数
//! - 使用 `cellkit::lattice::{cell_to_a, calc_rdsq, calc_d}`
//! - 使用 `utils/output.rs`

use crate::cli::dspacing::DspacingArgs;
use crate::utils::output;

use cellkit::lattice::{calc_d, calc_rdsq, cell_to_a};
use cellkit::{ATensor, Cell, Result};

use tabled::{Table, Tabled};

/// 反射表格行
#[derive(Tabled)]
struct ReflectionRow {
    #[tabled(rename = "(hkl)")]
    hkl: String,
    #[tabled(rename = "1/d² (Å⁻²)")]
    rdsq: String,
    #[tabled(rename = "d (Å)")]
    d: String,
    #[tabled(rename = "2θ (°)")]
    two_theta: String,
}

/// 执行 dspacing 命令
pub fn execute(args: DspacingArgs) -> Result<()> {
    output::print_header("d-Spacing Calculation");

    let cell = Cell::from_array(args.cell);
    cell.validate()?;
    output::print_info(&format!("Cell: {}", cell));
    if let Some(wl) = args.wavelength {
        output::print_info(&format!("Wavelength: {:.6} Å", wl));
    }

    let a = cell_to_a(&cell)?;
    let rows = reflection_rows(&a, &args.reflections, args.wavelength);
    println!("{}", Table::new(&rows));

    let undefined = rows.iter().filter(|r| r.d == "-").count();
    if undefined > 0 {
        output::print_warning(&format!(
            "{} reflection(s) have no defined d-spacing",
            undefined
        ));
    }

    Ok(())
}

fn reflection_rows(
    a: &ATensor,
    reflections: &[[i32; 3]],
    wavelength: Option<f64>,
) -> Vec<ReflectionRow> {
    reflections
        .iter()
        .map(|&hkl| {
            let d = calc_d(hkl, a);
            let two_theta = match (d, wavelength) {
                (Some(d), Some(wl)) => bragg_two_theta(d, wl)
                    .map(|t| format!("{:.4}", t))
                    .unwrap_or_else(|| "-".to_string()),
                _ => "-".to_string(),
            };
            ReflectionRow {
                hkl: format!("({} {} {})", hkl[0], hkl[1], hkl[2]),
                rdsq: format!("{:.8}", calc_rdsq(hkl, a)),
                d: d
                    .map(|d| format!("{:.6}", d))
                    .unwrap_or_else(|| "-".to_string()),
                two_theta,
            }
        })
        .collect()
}

/// Bragg 角 2θ (度)；λ/(2d) > 1 时该反射不可达
fn bragg_two_theta(d: f64, wavelength: f64) -> Option<f64> {
    let sin_theta = wavelength / (2.0 * d);
    if sin_theta > 1.0 {
        None
    } else {
        Some(2.0 * sin_theta.asin().to_degrees())
    }
}
