//! # 晶胞参数与 A 张量
//!
//! `Cell` 同时用于正空间晶胞 (a, b, c, α, β, γ) 和倒空间晶胞
//! (a*, b*, c*, α*, β*, γ*)，由调用方区分含义。
//!
//! ## 依赖关系
//! - 被 `lattice/` 所有子模块使用
//! - 无外部模块依赖

use crate::error::{CellkitError, Result};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// 晶胞参数，长度单位 Å，角度单位：度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl Cell {
    /// 从晶格参数 (a, b, c, alpha, beta, gamma) 创建晶胞
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Cell {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        }
    }

    pub fn from_array(p: [f64; 6]) -> Self {
        Cell::new(p[0], p[1], p[2], p[3], p[4], p[5])
    }

    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.alpha, self.beta, self.gamma]
    }

    /// 三个轴长 (a, b, c)
    pub fn lengths(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// 三个轴间角 (α, β, γ)
    pub fn angles(&self) -> [f64; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    /// 检查晶胞在物理上是否有意义
    ///
    /// 晶格引擎本身不调用此函数：超出 (0°, 180°) 的角度在引擎层产生数学上合法
    /// 但无物理意义的结果。命令行前端在读入用户输入时调用。
    pub fn validate(&self) -> Result<()> {
        for (name, value) in ["a", "b", "c"].iter().zip(self.lengths()) {
            if !value.is_finite() || value <= 0.0 {
                return Err(CellkitError::InvalidCell(format!(
                    "length {} = {} must be a positive number",
                    name, value
                )));
            }
        }
        for (name, value) in ["alpha", "beta", "gamma"].iter().zip(self.angles()) {
            if !value.is_finite() || value <= 0.0 || value >= 180.0 {
                return Err(CellkitError::InvalidCell(format!(
                    "angle {} = {} must lie strictly between 0 and 180 degrees",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6} {:.6} {:.6} {:.4} {:.4} {:.4}",
            self.a, self.b, self.c, self.alpha, self.beta, self.gamma
        )
    }
}

/// A 张量：倒易度规张量 G 的紧凑六参数表示
///
/// `A0..A2` 为 G 的对角元，`A3 = 2·G01`，`A4 = 2·G02`，`A5 = 2·G12`。
/// 对 G 线性，是精修晶胞参数时使用的工作参数。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ATensor(pub [f64; 6]);

impl ATensor {
    pub fn new(values: [f64; 6]) -> Self {
        ATensor(values)
    }

    pub fn as_array(&self) -> &[f64; 6] {
        &self.0
    }

    /// 非对角项减半的副本，即 G 的六个独立元素 [G00, G11, G22, G01, G02, G12]
    pub fn halved_off_diagonal(&self) -> [f64; 6] {
        let a = self.0;
        [a[0], a[1], a[2], a[3] / 2.0, a[4] / 2.0, a[5] / 2.0]
    }
}

impl Index<usize> for ATensor {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<[f64; 6]> for ATensor {
    fn from(values: [f64; 6]) -> Self {
        ATensor(values)
    }
}

impl fmt::Display for ATensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|v| format!("{:.8}", v)).collect();
        write!(f, "{}", parts.join(" "))
    }
}
