//! # 晶胞体积
//!
//! 由 A 张量直接计算倒易体积 V* 与正空间体积 V = 1/V*。
//! V*² 即 det(G) 展开成 A 的多项式。
//!
//! ## 依赖关系
//! - 被命令行前端和 `lattice/esd.rs` 使用
//! - 使用 `models/cell.rs` 的 ATensor

use crate::error::{CellkitError, Result};
use crate::models::ATensor;

fn rvsq_polynomial(a: &ATensor) -> f64 {
    let [a0, a1, a2, a3, a4, a5] = a.0;
    a0 * a1 * a2 + 0.25 * (a3 * a4 * a5 - a0 * a5 * a5 - a1 * a4 * a4 - a2 * a3 * a3)
}

/// 倒易体积平方的严格版本：为负时返回 `NegativeVolumeSquare`
pub fn try_calc_rvsq(a: &ATensor) -> Result<f64> {
    let rvsq = rvsq_polynomial(a);
    if rvsq < 0.0 {
        return Err(CellkitError::NegativeVolumeSquare { value: rvsq });
    }
    Ok(rvsq)
}

/// 倒易体积平方 V*²
///
/// 结果为负（无效或退化的 A 张量）时返回 1.0，表示"体积无定义，按单位体积处理"。
/// 这是约定的回退值，不是精度问题。
pub fn calc_rvsq(a: &ATensor) -> f64 {
    match try_calc_rvsq(a) {
        Ok(rvsq) => rvsq,
        Err(e) => {
            log::warn!("{}; falling back to unit volume", e);
            1.0
        }
    }
}

/// 倒易体积 V*
pub fn calc_rv(a: &ATensor) -> f64 {
    calc_rvsq(a).sqrt()
}

/// 正空间体积 V (Å³)
pub fn calc_v(a: &ATensor) -> f64 {
    1.0 / calc_rv(a)
}
