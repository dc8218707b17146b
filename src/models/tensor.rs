//! # 张量值类型
//!
//! - `MetricTensors`: 倒易度规张量 G 与正空间度规张量 g 的成对结果
//! - `Orthogonalization`: 分数坐标 ⇄ 笛卡尔坐标的互逆矩阵对
//! - `CellEsd`: 晶胞参数的标准不确定度
//!
//! ## 依赖关系
//! - 被 `lattice/` 使用
//! - 使用 `nalgebra` 的定长矩阵

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// 度规张量对，满足 `reciprocal = direct⁻¹`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricTensors {
    /// 倒易度规张量 G
    pub reciprocal: Matrix3<f64>,
    /// 正空间度规张量 g
    pub direct: Matrix3<f64>,
}

/// 正交化矩阵对
///
/// 笛卡尔坐标系约定：x 轴沿 a，b 位于 xy 平面，c 补成右手系。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orthogonalization {
    /// A: `A · x_frac = x_cart`
    pub frac_to_cart: Matrix3<f64>,
    /// B = A⁻¹: `B · x_cart = x_frac`
    pub cart_to_frac: Matrix3<f64>,
}

impl Orthogonalization {
    /// 分数坐标转笛卡尔坐标
    pub fn to_cartesian(&self, frac: &Vector3<f64>) -> Vector3<f64> {
        self.frac_to_cart * frac
    }

    /// 笛卡尔坐标转分数坐标
    pub fn to_fractional(&self, cart: &Vector3<f64>) -> Vector3<f64> {
        self.cart_to_frac * cart
    }
}

/// 晶胞参数标准不确定度（角度单位：度，体积单位 Å³）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CellEsd {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub volume: f64,
}

impl CellEsd {
    pub fn to_array(&self) -> [f64; 7] {
        [
            self.a,
            self.b,
            self.c,
            self.alpha,
            self.beta,
            self.gamma,
            self.volume,
        ]
    }
}
