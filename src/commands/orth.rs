//! # orth 命令实现
//!
//! 分数坐标与笛卡尔坐标互相转换，并回代验证。
//!
//! ## 依赖关系
//! - 使用 `cli/orth.rs` 定义的参数
//! - 使用 `cellkit::lattice::cell_to_ab`
//! - 使用 `utils/output.rs`

use crate::cli::orth::OrthArgs;
use crate::commands::summary::format_matrix;
use crate::utils::output;

use cellkit::lattice::cell_to_ab;
use cellkit::{Cell, Orthogonalization, Result};

use nalgebra::Vector3;
use tabled::{Table, Tabled};

/// 坐标转换表格行
#[derive(Tabled)]
struct CoordRow {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Output")]
    output: String,
    #[tabled(rename = "Round trip")]
    round_trip: String,
}

/// 执行 orth 命令
pub fn execute(args: OrthArgs) -> Result<()> {
    output::print_header("Orthogonalization");

    let cell = Cell::from_array(args.cell);
    cell.validate()?;
    output::print_info(&format!("Cell: {}", cell));

    let orth = cell_to_ab(&cell)?;

    if args.show_matrices {
        output::print_info("A (fractional -> Cartesian)");
        for line in format_matrix(&orth.frac_to_cart, 6) {
            println!("    {}", line);
        }
        output::print_info("B (Cartesian -> fractional)");
        for line in format_matrix(&orth.cart_to_frac, 6) {
            println!("    {}", line);
        }
    }

    if args.frac.is_empty() && args.cart.is_empty() {
        if !args.show_matrices {
            output::print_warning("No coordinates given; use --frac or --cart");
        }
        return Ok(());
    }

    if !args.frac.is_empty() {
        output::print_header("Fractional -> Cartesian (Å)");
        println!("{}", Table::new(frac_rows(&orth, &args.frac)));
    }

    if !args.cart.is_empty() {
        output::print_header("Cartesian (Å) -> Fractional");
        println!("{}", Table::new(cart_rows(&orth, &args.cart)));
    }

    Ok(())
}

fn frac_rows(orth: &Orthogonalization, points: &[[f64; 3]]) -> Vec<CoordRow> {
    points
        .iter()
        .map(|p| {
            let x = Vector3::from(*p);
            let cart = orth.to_cartesian(&x);
            let back = orth.to_fractional(&cart);
            CoordRow {
                input: format_vec(&x, 6),
                output: format_vec(&cart, 6),
                round_trip: format_vec(&back, 6),
            }
        })
        .collect()
}

fn cart_rows(orth: &Orthogonalization, points: &[[f64; 3]]) -> Vec<CoordRow> {
    points
        .iter()
        .map(|p| {
            let x = Vector3::from(*p);
            let frac = orth.to_fractional(&x);
            let back = orth.to_cartesian(&frac);
            CoordRow {
                input: format_vec(&x, 6),
                output: format_vec(&frac, 6),
                round_trip: format_vec(&back, 6),
            }
        })
        .collect()
}

fn format_vec(v: &Vector3<f64>, precision: usize) -> String {
    format!(
        "({:.p$}, {:.p$}, {:.p$})",
        v[0],
        v[1],
        v[2],
        p = precision
    )
}
