//! # 晶胞全表示汇总
//!
//! 由一对度规张量导出正/倒空间晶胞、A 张量与体积，供 convert 和 batch 共用。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/batch.rs` 使用
//! - 使用 `cellkit::lattice`

use cellkit::lattice::{calc_rv, calc_v, cell_to_gmat, gmat_to_a, gmat_to_cell};
use cellkit::{ATensor, Cell, MetricTensors, Result};

use nalgebra::Matrix3;
use serde::Serialize;

/// 一个晶胞的全部等价表示
#[derive(Debug, Clone, Copy)]
pub struct LatticeSummary {
    pub cell: Cell,
    pub reciprocal_cell: Cell,
    pub a_tensor: ATensor,
    pub tensors: MetricTensors,
    pub volume: f64,
    pub reciprocal_volume: f64,
}

impl LatticeSummary {
    pub fn from_tensors(tensors: MetricTensors) -> Self {
        let a_tensor = gmat_to_a(&tensors.reciprocal);
        LatticeSummary {
            cell: gmat_to_cell(&tensors.direct),
            reciprocal_cell: gmat_to_cell(&tensors.reciprocal),
            a_tensor,
            tensors,
            volume: calc_v(&a_tensor),
            reciprocal_volume: calc_rv(&a_tensor),
        }
    }

    pub fn from_cell(cell: &Cell) -> Result<Self> {
        Ok(Self::from_tensors(cell_to_gmat(cell)?))
    }

    /// 展平为 CSV 行
    pub fn to_row(&self) -> LatticeRow {
        let [a0, a1, a2, a3, a4, a5] = self.a_tensor.0;
        LatticeRow {
            a: self.cell.a,
            b: self.cell.b,
            c: self.cell.c,
            alpha: self.cell.alpha,
            beta: self.cell.beta,
            gamma: self.cell.gamma,
            a0,
            a1,
            a2,
            a3,
            a4,
            a5,
            a_star: self.reciprocal_cell.a,
            b_star: self.reciprocal_cell.b,
            c_star: self.reciprocal_cell.c,
            alpha_star: self.reciprocal_cell.alpha,
            beta_star: self.reciprocal_cell.beta,
            gamma_star: self.reciprocal_cell.gamma,
            volume: self.volume,
            reciprocal_volume: self.reciprocal_volume,
        }
    }
}

/// batch 输出 CSV 的一行
#[derive(Debug, Clone, Serialize)]
pub struct LatticeRow {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    #[serde(rename = "A0")]
    pub a0: f64,
    #[serde(rename = "A1")]
    pub a1: f64,
    #[serde(rename = "A2")]
    pub a2: f64,
    #[serde(rename = "A3")]
    pub a3: f64,
    #[serde(rename = "A4")]
    pub a4: f64,
    #[serde(rename = "A5")]
    pub a5: f64,
    pub a_star: f64,
    pub b_star: f64,
    pub c_star: f64,
    pub alpha_star: f64,
    pub beta_star: f64,
    pub gamma_star: f64,
    pub volume: f64,
    pub reciprocal_volume: f64,
}

/// 将 3×3 矩阵格式化为三行文本
pub fn format_matrix(m: &Matrix3<f64>, precision: usize) -> Vec<String> {
    (0..3)
        .map(|i| {
            let cols: Vec<String> = (0..3)
                .map(|j| {
                    format!(
                        "{:>width$.prec$}",
                        m[(i, j)],
                        width = precision + 8,
                        prec = precision
                    )
                })
                .collect();
            format!("[{} ]", cols.join(""))
        })
        .collect()
}
