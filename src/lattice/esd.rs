//! # 晶胞参数不确定度传递
//!
//! 精修得到的是 A 张量及其 6×6 方差-协方差矩阵 Σ，这里将其传递为
//! (a, b, c, α, β, γ, V) 的标准不确定度：σ = √diag(J·Σ·Jᵀ)。
//!
//! 雅可比矩阵 J 的推导：
//! - 晶胞行：∂g/∂A_k = -g·(∂G/∂A_k)·g，再由 a = √g00、cos α = g12/(bc) 等链式求导
//! - 体积行：V = (V*²)^(-1/2)，V*² 为 A 的多项式
//!
//! ## 依赖关系
//! - 被 `commands/esd.rs` 使用
//! - 使用 `lattice/atensor.rs`, `lattice/metric.rs`, `lattice/volume.rs`

use crate::error::Result;
use crate::lattice::atensor::a_to_gmat;
use crate::lattice::metric::gmat_to_cell;
use crate::lattice::trig::{cosd, sind};
use crate::lattice::volume::try_calc_rvsq;
use crate::models::{ATensor, CellEsd};

use nalgebra::{Matrix3, Matrix6, SMatrix};

/// (a, b, c, α, β, γ, V) 对 A0..A5 的雅可比矩阵
pub type CellJacobian = SMatrix<f64, 7, 6>;

/// 轴间角对应的度规张量元素下标：α ↔ (1,2)，β ↔ (0,2)，γ ↔ (0,1)
const ANGLE_PAIRS: [(usize, usize); 3] = [(1, 2), (0, 2), (0, 1)];

/// ∂G/∂A_k
fn reciprocal_basis(k: usize) -> Matrix3<f64> {
    let mut e = Matrix3::zeros();
    match k {
        0..=2 => e[(k, k)] = 1.0,
        _ => {
            let (i, j) = ANGLE_PAIRS[5 - k];
            e[(i, j)] = 0.5;
            e[(j, i)] = 0.5;
        }
    }
    e
}

/// 计算晶胞参数与体积对 A 张量的偏导数
///
/// 角度行单位为 度/A。A 张量奇异时返回 `SingularMatrix`，
/// 体积无定义时返回 `NegativeVolumeSquare`。
pub fn cell_jacobian(a: &ATensor) -> Result<CellJacobian> {
    let g = a_to_gmat(a)?.direct;
    let cell = gmat_to_cell(&g);
    let lengths = cell.lengths();
    let cosines = cell.angles().map(cosd);
    let sines = cell.angles().map(sind);

    let rvsq = try_calc_rvsq(a)?;
    let volume = 1.0 / rvsq.sqrt();
    let [ax0, ax1, ax2, ax3, ax4, ax5] = a.halved_off_diagonal();
    let d_rvsq = [
        ax1 * ax2 - ax5 * ax5,
        ax0 * ax2 - ax4 * ax4,
        ax0 * ax1 - ax3 * ax3,
        ax4 * ax5 - ax2 * ax3,
        ax3 * ax5 - ax1 * ax4,
        ax3 * ax4 - ax0 * ax5,
    ];

    let mut jac = CellJacobian::zeros();
    for k in 0..6 {
        let dg = -g * reciprocal_basis(k) * g;

        for i in 0..3 {
            jac[(i, k)] = dg[(i, i)] / (2.0 * lengths[i]);
        }

        for (n, &(i, j)) in ANGLE_PAIRS.iter().enumerate() {
            let (li, lj) = (lengths[i], lengths[j]);
            let dcos = dg[(i, j)] / (li * lj)
                - cosines[n] * (dg[(i, i)] / (2.0 * li * li) + dg[(j, j)] / (2.0 * lj * lj));
            jac[(3 + n, k)] = -(dcos / sines[n]).to_degrees();
        }

        jac[(6, k)] = -0.5 * volume.powi(3) * d_rvsq[k];
    }

    Ok(jac)
}

/// 由 A 张量的方差-协方差矩阵计算晶胞参数标准不确定度
///
/// 舍入导致的负方差按 0 处理。
pub fn cell_esd(a: &ATensor, vcov: &Matrix6<f64>) -> Result<CellEsd> {
    let jac = cell_jacobian(a)?;
    let sigma = jac * vcov * jac.transpose();
    let esd = |i: usize| {
        let var = sigma[(i, i)];
        if var > 0.0 {
            var.sqrt()
        } else {
            0.0
        }
    };

    Ok(CellEsd {
        a: esd(0),
        b: esd(1),
        c: esd(2),
        alpha: esd(3),
        beta: esd(4),
        gamma: esd(5),
        volume: esd(6),
    })
}
