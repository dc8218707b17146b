//! # convert 命令实现
//!
//! 从正空间晶胞、倒空间晶胞或 A 张量之一出发，打印全部等价表示：
//! 正/倒晶胞参数、A 张量、度规张量 g 与 G、体积 V 与 V*。
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `commands/summary.rs`
//! - 使用 `utils/output.rs`

use crate::cli::convert::ConvertArgs;
use crate::commands::summary::{format_matrix, LatticeSummary};
use crate::utils::output;

use cellkit::lattice::{a_to_gmat, cell_to_gmat, invcell_to_gmat};
use cellkit::{ATensor, Cell, CellkitError, MetricTensors, Result};

use tabled::{Table, Tabled};

/// 晶胞参数表格行
#[derive(Tabled)]
struct ParameterRow {
    #[tabled(rename = "Parameter")]
    name: &'static str,
    #[tabled(rename = "Direct")]
    direct: String,
    #[tabled(rename = "Reciprocal")]
    reciprocal: String,
}

/// A 张量表格行
#[derive(Tabled)]
struct ATensorRow {
    #[tabled(rename = "Term")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    output::print_header("Unit Cell Conversion");

    let tensors = resolve_tensors(&args)?;
    let summary = LatticeSummary::from_tensors(tensors);
    log::debug!("derived summary: {:?}", summary);

    print_parameter_table(&summary);
    print_a_tensor(&summary.a_tensor);

    output::print_header("Metric Tensors");
    output::print_info("Direct metric tensor g (Å²)");
    for line in format_matrix(&summary.tensors.direct, args.precision) {
        println!("    {}", line);
    }
    output::print_info("Reciprocal metric tensor G (Å⁻²)");
    for line in format_matrix(&summary.tensors.reciprocal, args.precision) {
        println!("    {}", line);
    }

    output::print_separator();
    output::print_success(&format!(
        "V = {:.6} Å³, V* = {:.8} Å⁻³",
        summary.volume, summary.reciprocal_volume
    ));

    Ok(())
}

/// 根据输入来源计算度规张量对
fn resolve_tensors(args: &ConvertArgs) -> Result<MetricTensors> {
    if let Some(values) = args.cell {
        let cell = Cell::from_array(values);
        cell.validate()?;
        output::print_info(&format!("Direct cell: {}", cell));
        cell_to_gmat(&cell)
    } else if let Some(values) = args.reciprocal {
        let invcell = Cell::from_array(values);
        invcell.validate()?;
        output::print_info(&format!("Reciprocal cell: {}", invcell));
        invcell_to_gmat(&invcell)
    } else if let Some(values) = args.a_tensor {
        let a = ATensor::new(values);
        output::print_info(&format!("A-tensor: {}", a));
        a_to_gmat(&a)
    } else {
        Err(CellkitError::InvalidArgument(
            "one of --cell, --reciprocal or --a-tensor is required".to_string(),
        ))
    }
}

fn print_parameter_table(summary: &LatticeSummary) {
    let direct = summary.cell;
    let recip = summary.reciprocal_cell;

    let rows = vec![
        length_row("a / a*", direct.a, recip.a),
        length_row("b / b*", direct.b, recip.b),
        length_row("c / c*", direct.c, recip.c),
        angle_row("α / α*", direct.alpha, recip.alpha),
        angle_row("β / β*", direct.beta, recip.beta),
        angle_row("γ / γ*", direct.gamma, recip.gamma),
        ParameterRow {
            name: "V / V*",
            direct: format!("{:.6}", summary.volume),
            reciprocal: format!("{:.8}", summary.reciprocal_volume),
        },
    ];

    output::print_header("Cell Parameters");
    println!("{}", Table::new(&rows));
}

fn length_row(name: &'static str, direct: f64, reciprocal: f64) -> ParameterRow {
    ParameterRow {
        name,
        direct: format!("{:.6}", direct),
        reciprocal: format!("{:.8}", reciprocal),
    }
}

fn angle_row(name: &'static str, direct: f64, reciprocal: f64) -> ParameterRow {
    ParameterRow {
        name,
        direct: format!("{:.4}", direct),
        reciprocal: format!("{:.4}", reciprocal),
    }
}

fn print_a_tensor(a: &ATensor) {
    let rows: Vec<ATensorRow> = a
        .as_array()
        .iter()
        .enumerate()
        .map(|(i, v)| ATensorRow {
            name: format!("A{}", i),
            value: format!("{:.10}", v),
        })
        .collect();

    output::print_header("A-Tensor");
    println!("{}", Table::new(&rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(
        cell: Option<[f64; 6]>,
        reciprocal: Option<[f64; 6]>,
        a: Option<[f64; 6]>,
    ) -> ConvertArgs {
        ConvertArgs {
            cell,
            reciprocal,
            a_tensor: a,
            precision: 6,
        }
    }

    #[test]
    fn test_resolve_from_each_source_agrees() {
        let cell = [4.1, 5.2, 6.3, 100.0, 80.0, 130.0];
        let from_cell = resolve_tensors(&args(Some(cell), None, None)).unwrap();
        let summary = LatticeSummary::from_tensors(from_cell);

        let from_recip =
            resolve_tensors(&args(None, Some(summary.reciprocal_cell.to_array()), None)).unwrap();
        let from_a = resolve_tensors(&args(None, None, Some(summary.a_tensor.0))).unwrap();

        for i in 0..3 {
            for j in 0..3 {
                let g = from_cell.direct[(i, j)];
                assert!((from_recip.direct[(i, j)] - g).abs() < 1e-8);
                assert!((from_a.direct[(i, j)] - g).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn test_resolve_rejects_invalid_cell() {
        let cell = [4.0, 4.0, 4.0, 90.0, 90.0, 200.0];
        let result = resolve_tensors(&args(Some(cell), None, None));
        assert!(matches!(result, Err(CellkitError::InvalidCell(_))));
    }

    #[test]
    fn test_resolve_degenerate_cell() {
        // γ = 179.9999999999 通过合法性检查，但度规张量数值奇异
        let result = resolve_tensors(&args(
            Some([4.0, 4.0, 4.0, 90.0, 90.0, 179.999_999_999_9]),
            None,
            None,
        ));
        assert!(matches!(result, Err(CellkitError::SingularMatrix { .. })));
    }
}
