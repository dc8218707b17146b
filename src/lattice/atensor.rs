//! # A 张量转换
//!
//! A 张量是倒易度规张量 G 六个独立元素的重新打包：
//! `[G00, G11, G22, 2·G01, 2·G02, 2·G12]`。
//!
//! ## 依赖关系
//! - 被 `lattice/volume.rs`, `lattice/esd.rs` 及命令行前端使用
//! - 使用 `lattice/metric.rs`

use crate::error::Result;
use crate::lattice::metric::{cell_to_gmat, gmat_to_cell, invert_metric};
use crate::models::{ATensor, Cell, MetricTensors};

use nalgebra::Matrix3;

/// 由倒易度规张量 G 得到 A 张量
pub fn gmat_to_a(big_g: &Matrix3<f64>) -> ATensor {
    ATensor([
        big_g[(0, 0)],
        big_g[(1, 1)],
        big_g[(2, 2)],
        2.0 * big_g[(0, 1)],
        2.0 * big_g[(0, 2)],
        2.0 * big_g[(1, 2)],
    ])
}

/// 由 A 张量重建 (G, g)
pub fn a_to_gmat(a: &ATensor) -> Result<MetricTensors> {
    let [g00, g11, g22, g01, g02, g12] = a.halved_off_diagonal();
    let reciprocal = Matrix3::new(
        g00, g01, g02, //
        g01, g11, g12, //
        g02, g12, g22,
    );
    let direct = invert_metric(&reciprocal, "reciprocal metric tensor")?;
    Ok(MetricTensors { reciprocal, direct })
}

/// 晶胞参数 → A 张量
pub fn cell_to_a(cell: &Cell) -> Result<ATensor> {
    let tensors = cell_to_gmat(cell)?;
    Ok(gmat_to_a(&tensors.reciprocal))
}

/// A 张量 → 晶胞参数
pub fn a_to_cell(a: &ATensor) -> Result<Cell> {
    let tensors = a_to_gmat(a)?;
    Ok(gmat_to_cell(&tensors.direct))
}

/// A 张量 → 倒空间晶胞参数
///
/// 对 G 本身调用 `gmat_to_cell`。直接对 A 元素取反余弦的闭式公式在部分
/// 角度范围内数值不稳定，不使用。
pub fn a_to_invcell(a: &ATensor) -> Result<Cell> {
    let tensors = a_to_gmat(a)?;
    Ok(gmat_to_cell(&tensors.reciprocal))
}
