//! # 数据模型模块
//!
//! 定义晶胞参数、A 张量、度规张量对与正交化矩阵对等值类型。
//! 所有类型都是不可变的 `Copy` 值，每次调用时重新生成。
//!
//! ## 依赖关系
//! - 被 `lattice/` 和命令行前端使用
//! - 子模块: cell, tensor

pub mod cell;
pub mod tensor;

pub use cell::{ATensor, Cell};
pub use tensor::{CellEsd, MetricTensors, Orthogonalization};
