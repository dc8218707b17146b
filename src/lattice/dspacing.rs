//! # d 间距
//!
//! 1/d² 对 A 张量是线性的：`h²A0 + k²A1 + l²A2 + hkA3 + hlA4 + klA5`。
//!
//! ## 依赖关系
//! - 被命令行前端使用
//! - 使用 `models/cell.rs` 的 ATensor

use crate::models::ATensor;

/// 计算 (hkl) 的 1/d²
pub fn calc_rdsq(hkl: [i32; 3], a: &ATensor) -> f64 {
    let [h, k, l] = hkl.map(f64::from);
    let [a0, a1, a2, a3, a4, a5] = a.0;
    h * h * a0 + k * k * a1 + l * l * a2 + h * k * a3 + h * l * a4 + k * l * a5
}

/// 计算 (hkl) 的 d 间距 (Å)
///
/// (000) 或 1/d² 非正时返回 `None`。
pub fn calc_d(hkl: [i32; 3], a: &ATensor) -> Option<f64> {
    if hkl == [0, 0, 0] {
        return None;
    }
    let rdsq = calc_rdsq(hkl, a);
    if rdsq > 0.0 {
        Some(1.0 / rdsq.sqrt())
    } else {
        None
    }
}
