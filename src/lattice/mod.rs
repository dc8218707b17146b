//! # 晶格几何引擎
//!
//! 晶胞参数、倒空间晶胞、正/倒度规张量、A 张量与正交化矩阵之间的双向转换。
//! 全部为无状态纯函数，可在多线程中直接并发调用。
//!
//! ## 子模块
//! - `trig`: 角度制三角函数
//! - `metric`: 度规张量构造、求逆与反推晶胞
//! - `atensor`: A 张量 ⇄ 度规张量/晶胞
//! - `volume`: 由 A 张量计算体积
//! - `orth`: 正交化矩阵
//! - `dspacing`: d 间距
//! - `esd`: 晶胞参数不确定度传递
//!
//! ## 依赖关系
//! - 被命令行前端 `commands/` 使用
//! - 使用 `models/`, `config.rs`, `error.rs`

pub mod atensor;
pub mod dspacing;
pub mod esd;
pub mod metric;
pub mod orth;
pub mod trig;
pub mod volume;

#[cfg(test)]
pub(crate) mod testdata;

pub use atensor::{a_to_cell, a_to_gmat, a_to_invcell, cell_to_a, gmat_to_a};
pub use dspacing::{calc_d, calc_rdsq};
pub use esd::{cell_esd, cell_jacobian, CellJacobian};
pub use metric::{
    cell_to_gmat, fill_gmat, gmat_to_cell, invcell_to_gmat, invert_basis, invert_metric,
    try_gmat_to_cell,
};
pub use orth::cell_to_ab;
pub use volume::{calc_rv, calc_rvsq, calc_v, try_calc_rvsq};
