//! # esd 命令实现
//!
//! 读取 A 张量的 6×6 方差-协方差矩阵（无表头 CSV），
//! 输出晶胞参数与体积及其标准不确定度。
//!
//! ## 依赖关系
//! - 使用 `cli/esd.rs` 定义的参数
//! - 使用 `cellkit::lattice::{cell_esd, a_to_cell, calc_v}`
//! - 使用 `csv` 读取矩阵

use crate::cli::esd::EsdArgs;
use crate::utils::output;

use cellkit::lattice::{a_to_cell, calc_v, cell_esd};
use cellkit::{ATensor, CellkitError, Result};

use nalgebra::Matrix6;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tabled::{Table, Tabled};

/// 非对称性告警阈值（相对最大元素）
const SYMMETRY_TOLERANCE: f64 = 1e-8;

#[derive(Tabled)]
struct EsdRow {
    #[tabled(rename = "Parameter")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "ESD")]
    esd: String,
}

/// 执行 esd 命令
pub fn execute(args: EsdArgs) -> Result<()> {
    output::print_header("Cell Parameter Uncertainties");

    let a = ATensor::new(args.a_tensor);
    let vcov = read_covariance(&args.cov)?;
    output::print_info(&format!("A-tensor: {}", a));
    output::print_info(&format!("Covariance: {}", args.cov.display()));

    let cell = a_to_cell(&a)?;
    let esd = cell_esd(&a, &vcov)?;
    let volume = calc_v(&a);

    const NAMES: [&str; 7] = ["a (Å)", "b (Å)", "c (Å)", "α (°)", "β (°)", "γ (°)", "V (Å³)"];
    let [a_len, b_len, c_len, alpha, beta, gamma] = cell.to_array();
    let values = [a_len, b_len, c_len, alpha, beta, gamma, volume];

    let rows: Vec<EsdRow> = NAMES
        .iter()
        .zip(values.iter().zip(esd.to_array()))
        .map(|(&name, (&value, sigma))| EsdRow {
            name,
            value: format!("{:.6}", value),
            esd: format!("{:.6}", sigma),
        })
        .collect();

    println!("{}", Table::new(&rows));
    Ok(())
}

fn read_covariance(path: &Path) -> Result<Matrix6<f64>> {
    if !path.exists() {
        return Err(CellkitError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let file = File::open(path).map_err(|e| CellkitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_covariance(file, &path.display().to_string())
}

/// 解析 6 行 × 6 列的协方差矩阵
fn parse_covariance<R: Read>(reader: R, source: &str) -> Result<Matrix6<f64>> {
    let parse_error = |reason: String| CellkitError::ParseError {
        format: "covariance CSV".to_string(),
        path: source.to_string(),
        reason,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut vcov = Matrix6::zeros();
    let mut rows = 0;
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        if i >= 6 {
            return Err(parse_error("expected 6 rows, found more".to_string()));
        }
        if record.len() != 6 {
            return Err(parse_error(format!(
                "row {} has {} columns, expected 6",
                i + 1,
                record.len()
            )));
        }
        for (j, field) in record.iter().enumerate() {
            vcov[(i, j)] = field.parse::<f64>().map_err(|_| {
                parse_error(format!(
                    "row {} column {}: '{}' is not a number",
                    i + 1,
                    j + 1,
                    field
                ))
            })?;
        }
        rows += 1;
    }
    if rows != 6 {
        return Err(parse_error(format!("expected 6 rows, found {}", rows)));
    }

    let scale = vcov.amax();
    if (vcov - vcov.transpose()).amax() > SYMMETRY_TOLERANCE * scale {
        log::warn!("covariance matrix from {} is not symmetric", source);
    }

    Ok(vcov)
}
