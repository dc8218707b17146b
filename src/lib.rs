//! # cellkit - 晶胞几何计算库
//!
//! 晶体学晶胞在各等价表示之间的数值精确转换：
//! 正空间晶胞参数、倒空间晶胞参数、正/倒度规张量、A 张量与正交化矩阵。
//! 衍射峰生成、d 间距、约束几何以及晶胞参数精修都建立在这些转换之上。
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── lattice/   (晶格几何引擎)
//!   ├── models/    (值类型)
//!   ├── config.rs  (数值容差)
//!   └── error.rs   (错误处理)
//! ```

pub mod config;
pub mod error;
pub mod lattice;
pub mod models;

pub use error::{CellkitError, Result};
pub use models::{ATensor, Cell, CellEsd, MetricTensors, Orthogonalization};
