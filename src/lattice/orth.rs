//! # 正交化矩阵
//!
//! 构造分数坐标 → 笛卡尔坐标的矩阵 A 及其逆 B。
//!
//! 约定：a 沿 x 轴；b 在 xy 平面内与 a 成 γ 角；c 的 z 分量由倒易角 α*
//! 与 c* 确定（Giacovazzo, *Fundamentals of Crystallography*）。
//!
//! ```text
//! A = | a   b·cos γ   c·cos β            |
//!     | 0   b·sin γ   -c·cos α*·sin β    |
//!     | 0   0         1/c*               |
//! ```
//!
//! ## 依赖关系
//! - 被命令行前端使用
//! - 使用 `lattice/metric.rs`

use crate::error::Result;
use crate::lattice::metric::{cell_to_gmat, gmat_to_cell, invert_basis};
use crate::lattice::trig::{cosd, sind};
use crate::models::{Cell, Orthogonalization};

use nalgebra::Matrix3;

/// 由晶胞参数计算正交化矩阵对 (A, B)
pub fn cell_to_ab(cell: &Cell) -> Result<Orthogonalization> {
    let tensors = cell_to_gmat(cell)?;
    let cellstar = gmat_to_cell(&tensors.reciprocal);

    let frac_to_cart = Matrix3::new(
        cell.a,
        cell.b * cosd(cell.gamma),
        cell.c * cosd(cell.beta),
        0.0,
        cell.b * sind(cell.gamma),
        -cell.c * cosd(cellstar.alpha) * sind(cell.beta),
        0.0,
        0.0,
        1.0 / cellstar.c,
    );
    let cart_to_frac = invert_basis(&frac_to_cart, "orthogonalization matrix")?;

    Ok(Orthogonalization {
        frac_to_cart,
        cart_to_frac,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::testdata::{allclose, COORD_TEST_DATA};
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_cell_to_ab_reference() {
        for (cell, pairs) in COORD_TEST_DATA.iter() {
            let orth = cell_to_ab(&Cell::from_array(*cell)).unwrap();
            for (frac, ortho) in pairs.iter() {
                let to = orth.to_cartesian(&Vector3::from(*frac));
                let tf = orth.to_fractional(&to);
                assert!(allclose(to.as_slice(), ortho), "{:?} -> {:?}", frac, to);
                assert!(allclose(tf.as_slice(), frac), "{:?} -> {:?}", to, tf);
            }
        }
    }

    #[test]
    fn test_orthogonalization_round_trip_grid() {
        let cells = [
            Cell::new(4.0, 4.0, 4.0, 90.0, 90.0, 90.0),
            Cell::new(4.1, 5.2, 6.3, 100.0, 80.0, 130.0),
            Cell::new(3.5, 3.5, 6.0, 90.0, 90.0, 120.0),
            Cell::new(12.0, 13.5, 20.1, 118.0, 97.0, 102.0),
        ];
        let steps = [0.0, 0.13, 0.5, 0.77, 0.999];
        for cell in cells.iter() {
            let orth = cell_to_ab(cell).unwrap();
            for &x in steps.iter() {
                for &y in steps.iter() {
                    for &z in steps.iter() {
                        let f = Vector3::new(x, y, z);
                        let back = orth.to_fractional(&orth.to_cartesian(&f));
                        assert_abs_diff_eq!(back, f, epsilon = 1e-12);
                    }
                }
            }
        }
    }

    #[test]
    fn test_orthogonalization_preserves_metric() {
        // Aᵀ·A 应重现正空间度规张量 g
        let cell = Cell::new(4.1, 5.2, 6.3, 100.0, 80.0, 130.0);
        let orth = cell_to_ab(&cell).unwrap();
        let g = cell_to_gmat(&cell).unwrap().direct;
        assert_abs_diff_eq!(
            orth.frac_to_cart.transpose() * orth.frac_to_cart,
            g,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_elongated_cell_orthogonalization() {
        for cell in [
            Cell::new(2.0, 2.0, 700.0, 90.0, 90.0, 90.0),
            Cell::new(0.5, 30.0, 900.0, 95.0, 80.0, 105.0),
        ] {
            let orth = cell_to_ab(&cell).unwrap();
            let f = Vector3::new(0.25, 0.5, 0.75);
            let back = orth.to_fractional(&orth.to_cartesian(&f));
            assert_abs_diff_eq!(back, f, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_cell_to_ab_is_upper_triangular() {
        let orth = cell_to_ab(&Cell::new(3.5, 3.5, 6.0, 90.0, 90.0, 120.0)).unwrap();
        let a = orth.frac_to_cart;
        assert_eq!(a[(1, 0)], 0.0);
        assert_eq!(a[(2, 0)], 0.0);
        assert_eq!(a[(2, 1)], 0.0);
        assert_abs_diff_eq!(a * orth.cart_to_frac, Matrix3::identity(), epsilon = 1e-12);
    }
}
