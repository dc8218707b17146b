//! # 度规张量
//!
//! 由晶胞参数构造正空间度规张量 g（三维余弦定理），求逆得到倒易度规张量 G，
//! 以及由度规张量反推晶胞参数。
//!
//! ## 依赖关系
//! - 被 `lattice/atensor.rs`, `lattice/orth.rs`, `lattice/esd.rs` 使用
//! - 使用 `config.rs` 的奇异性容差

use crate::config;
use crate::error::{CellkitError, Result};
use crate::lattice::trig::{acosd, cosd};
use crate::models::{Cell, MetricTensors};

use nalgebra::Matrix3;

/// 由晶胞参数填充度规张量
///
/// 对角元为 (a², b², c²)，非对角元为 ab·cos γ, ac·cos β, bc·cos α。
/// 对任意有限输入都不会失败。
pub fn fill_gmat(cell: &Cell) -> Matrix3<f64> {
    let Cell {
        a,
        b,
        c,
        alpha,
        beta,
        gamma,
    } = *cell;

    let ab = a * b * cosd(gamma);
    let ac = a * c * cosd(beta);
    let bc = b * c * cosd(alpha);

    Matrix3::new(
        a * a, ab, ac, //
        ab, b * b, bc, //
        ac, bc, c * c,
    )
}

/// 由正空间晶胞计算 (G, g)
pub fn cell_to_gmat(cell: &Cell) -> Result<MetricTensors> {
    let direct = fill_gmat(cell);
    let reciprocal = invert_metric(&direct, "direct metric tensor")?;
    Ok(MetricTensors { reciprocal, direct })
}

/// 由倒空间晶胞计算 (G, g)
pub fn invcell_to_gmat(invcell: &Cell) -> Result<MetricTensors> {
    let reciprocal = fill_gmat(invcell);
    let direct = invert_metric(&reciprocal, "reciprocal metric tensor")?;
    Ok(MetricTensors { reciprocal, direct })
}

/// 度规张量求逆
///
/// 奇异性判据为 det(M) / (M00·M11·M22)。对度规张量它等于
/// `1 - cos²α - cos²β - cos²γ + 2·cosα·cosβ·cosγ`，与各轴长度无关，
/// 细长或扁平的晶胞不会被误判。不大于配置容差、非有限或无法求逆时返回
/// `SingularMatrix`；对角元乘积为零（非正定）同样视为奇异。
pub fn invert_metric(m: &Matrix3<f64>, what: &str) -> Result<Matrix3<f64>> {
    let diagonal = m[(0, 0)] * m[(1, 1)] * m[(2, 2)];
    let det = m.determinant();
    let normalized = if diagonal != 0.0 { det / diagonal } else { 0.0 };
    checked_inverse(m, what, normalized)
}

/// 基矢矩阵（列为三个晶轴的笛卡尔分量）求逆
///
/// 判据为 |det(M)| / ∏‖列‖，即三个基矢张成体积与轴长乘积之比，同样与轴长无关。
pub fn invert_basis(m: &Matrix3<f64>, what: &str) -> Result<Matrix3<f64>> {
    let lengths: f64 = m.column_iter().map(|col| col.norm()).product();
    let det = m.determinant();
    let normalized = if lengths != 0.0 { det / lengths } else { 0.0 };
    checked_inverse(m, what, normalized)
}

fn checked_inverse(m: &Matrix3<f64>, what: &str, normalized: f64) -> Result<Matrix3<f64>> {
    let tolerance = config::get().singular_tolerance;

    if !normalized.is_finite() || normalized.abs() <= tolerance {
        log::debug!(
            "{} rejected as singular: normalized det = {:e}, tolerance = {:e}",
            what,
            normalized,
            tolerance
        );
        return Err(CellkitError::SingularMatrix {
            what: what.to_string(),
            determinant: normalized,
        });
    }

    m.try_inverse().ok_or_else(|| CellkitError::SingularMatrix {
        what: what.to_string(),
        determinant: normalized,
    })
}

/// 由度规张量计算晶胞参数
///
/// 传入 g 得到正空间晶胞，传入 G 得到倒空间晶胞。
/// 对角元因舍入为负时钳位为 0。
pub fn gmat_to_cell(g: &Matrix3<f64>) -> Cell {
    let [a, b, c] = [0, 1, 2].map(|i| {
        let value = g[(i, i)];
        if value < 0.0 {
            log::debug!(
                "clamping negative metric diagonal g{}{} = {:e} to zero",
                i,
                i,
                value
            );
        }
        value.max(0.0).sqrt()
    });
    angles_from_lengths(g, a, b, c)
}

/// `gmat_to_cell` 的严格版本：对角元为负时返回 `NegativeRadicand`
pub fn try_gmat_to_cell(g: &Matrix3<f64>) -> Result<Cell> {
    let mut lengths = [0.0; 3];
    for (i, axis) in ['a', 'b', 'c'].into_iter().enumerate() {
        let value = g[(i, i)];
        if value < 0.0 {
            return Err(CellkitError::NegativeRadicand { axis, value });
        }
        lengths[i] = value.sqrt();
    }
    let [a, b, c] = lengths;
    Ok(angles_from_lengths(g, a, b, c))
}

fn angles_from_lengths(g: &Matrix3<f64>, a: f64, b: f64, c: f64) -> Cell {
    let alpha = acosd(g[(2, 1)] / (b * c));
    let beta = acosd(g[(2, 0)] / (a * c));
    let gamma = acosd(g[(0, 1)] / (a * b));
    Cell::new(a, b, c, alpha, beta, gamma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::testdata::{allclose, allclose_mat, CELL_TEST_DATA};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fill_gmat_cubic() {
        let g = fill_gmat(&Cell::new(4.0, 4.0, 4.0, 90.0, 90.0, 90.0));
        for i in 0..3 {
            assert_eq!(g[(i, i)], 16.0);
        }
        assert!(g[(0, 1)].abs() < 1e-14);
        assert!(g[(0, 2)].abs() < 1e-14);
        assert!(g[(1, 2)].abs() < 1e-14);
        assert_eq!(g, g.transpose());
    }

    #[test]
    fn test_cell_to_gmat_reference() {
        for case in CELL_TEST_DATA.iter() {
            let cell = Cell::from_array(case.cell);
            let MetricTensors { reciprocal, direct } = cell_to_gmat(&cell).unwrap();
            assert!(allclose_mat(&direct, &case.g), "g mismatch for {}", cell);
            assert!(allclose_mat(&reciprocal, &case.big_g), "G mismatch for {}", cell);

            let back = gmat_to_cell(&direct);
            assert!(allclose(&back.to_array(), &case.cell), "cell mismatch for {}", cell);

            let recip = gmat_to_cell(&reciprocal);
            assert!(allclose(&recip.to_array(), &case.reciprocal_cell));
        }
    }

    #[test]
    fn test_cubic_tensors() {
        let tensors = cell_to_gmat(&Cell::new(4.0, 4.0, 4.0, 90.0, 90.0, 90.0)).unwrap();
        assert_abs_diff_eq!(
            tensors.direct,
            Matrix3::from_diagonal_element(16.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            tensors.reciprocal,
            Matrix3::from_diagonal_element(0.0625),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_inverse_tensor_identity() {
        for case in CELL_TEST_DATA.iter() {
            let tensors = cell_to_gmat(&Cell::from_array(case.cell)).unwrap();
            assert_abs_diff_eq!(
                tensors.reciprocal * tensors.direct,
                Matrix3::identity(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_invcell_to_gmat_reference() {
        for case in CELL_TEST_DATA.iter() {
            let tensors = invcell_to_gmat(&Cell::from_array(case.reciprocal_cell)).unwrap();
            assert!(allclose_mat(&tensors.reciprocal, &case.big_g));
            assert!(allclose_mat(&tensors.direct, &case.g));
        }
    }

    #[test]
    fn test_degenerate_gamma_is_singular() {
        let degenerate = [
            Cell::new(4.0, 4.0, 4.0, 90.0, 90.0, 0.0),
            Cell::new(4.0, 4.0, 4.0, 90.0, 90.0, 180.0),
            Cell::new(5.0, 6.0, 7.0, 70.0, 70.0, 0.0),
            Cell::new(5.0, 6.0, 7.0, 110.0, 70.0, 180.0),
        ];
        for cell in degenerate.iter() {
            match cell_to_gmat(cell) {
                Err(CellkitError::SingularMatrix { determinant, .. }) => {
                    assert!(determinant.abs() < 1e-10, "{} -> {}", cell, determinant);
                }
                other => panic!("expected SingularMatrix for {}, got {:?}", cell, other),
            }
        }
    }

    #[test]
    fn test_invert_metric_zero_matrix() {
        let result = invert_metric(&Matrix3::zeros(), "test matrix");
        assert!(matches!(result, Err(CellkitError::SingularMatrix { .. })));
    }

    #[test]
    fn test_invert_metric_is_scale_free() {
        // 很小的晶胞也不应被误判为奇异
        let tiny = fill_gmat(&Cell::new(1e-4, 1e-4, 1e-4, 90.0, 90.0, 90.0));
        assert!(invert_metric(&tiny, "tiny").is_ok());
        let huge = fill_gmat(&Cell::new(1e4, 2e4, 3e4, 95.0, 85.0, 110.0));
        assert!(invert_metric(&huge, "huge").is_ok());
    }

    #[test]
    fn test_elongated_cells_are_not_singular() {
        let cells = [
            Cell::new(2.0, 2.0, 700.0, 90.0, 90.0, 90.0),
            Cell::new(2.0, 2.0, 1000.0, 90.0, 90.0, 90.0),
            Cell::new(0.5, 30.0, 900.0, 95.0, 80.0, 105.0),
            Cell::new(1500.0, 1.2, 3.0, 60.0, 100.0, 110.0),
        ];
        for cell in cells.iter() {
            let tensors = cell_to_gmat(cell)
                .unwrap_or_else(|e| panic!("{} should be invertible: {}", cell, e));

            // 经倒空间晶胞走一圈回到正空间
            let invcell = gmat_to_cell(&tensors.reciprocal);
            let back = gmat_to_cell(&invcell_to_gmat(&invcell).unwrap().direct);
            for (x, y) in back.lengths().iter().zip(cell.lengths()) {
                assert!((x - y).abs() <= 1e-6 * y, "{} vs {}", back, cell);
            }
            for (x, y) in back.angles().iter().zip(cell.angles()) {
                assert!((x - y).abs() < 1e-6, "{} vs {}", back, cell);
            }
        }
    }

    #[test]
    fn test_normalized_det_ignores_axis_lengths() {
        // 相同角度、不同轴长：判据值一致
        let short = fill_gmat(&Cell::new(1.0, 1.0, 1.0, 95.0, 80.0, 105.0));
        let long = fill_gmat(&Cell::new(0.5, 30.0, 900.0, 95.0, 80.0, 105.0));
        let ratio = |m: &Matrix3<f64>| m.determinant() / (m[(0, 0)] * m[(1, 1)] * m[(2, 2)]);
        assert!((ratio(&short) - ratio(&long)).abs() < 1e-9);
    }

    #[test]
    fn test_invert_basis() {
        let basis = Matrix3::new(2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 700.0);
        let inverse = invert_basis(&basis, "basis").unwrap();
        assert_abs_diff_eq!(basis * inverse, Matrix3::identity(), epsilon = 1e-12);

        let flat = Matrix3::new(1.0, 2.0, 3.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0);
        assert!(matches!(
            invert_basis(&flat, "flat"),
            Err(CellkitError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn test_negative_radicand_clamped_and_reported() {
        let mut g = fill_gmat(&Cell::new(4.0, 4.0, 4.0, 90.0, 90.0, 90.0));
        g[(1, 1)] = -1e-14;

        let clamped = gmat_to_cell(&g);
        assert_eq!(clamped.b, 0.0);
        assert_eq!(clamped.a, 4.0);

        match try_gmat_to_cell(&g) {
            Err(CellkitError::NegativeRadicand { axis, value }) => {
                assert_eq!(axis, 'b');
                assert_eq!(value, -1e-14);
            }
            other => panic!("expected NegativeRadicand, got {:?}", other),
        }
    }

    #[test]
    fn test_try_gmat_to_cell_matches_default() {
        let g = fill_gmat(&Cell::new(4.1, 5.2, 6.3, 100.0, 80.0, 130.0));
        assert_eq!(try_gmat_to_cell(&g).unwrap(), gmat_to_cell(&g));
    }
}
