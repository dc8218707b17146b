//! # 数值容差配置
//!
//! 晶格引擎唯一的共享资源：奇异性判据使用的容差。
//! 在程序启动时通过 [`init`] 设置一次，此后只读；未初始化时使用默认值。
//!
//! ## 依赖关系
//! - 被 `lattice/metric.rs` 使用
//! - 被 `main.rs` 在启动时初始化

use crate::error::{CellkitError, Result};

use std::sync::OnceLock;

/// 默认奇异性容差（归一化行列式）
pub const DEFAULT_SINGULAR_TOLERANCE: f64 = 1e-10;

static CONFIG: OnceLock<LatticeConfig> = OnceLock::new();

/// 晶格引擎配置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeConfig {
    /// 归一化行列式（det 除以对角元乘积或基矢长度乘积）不大于该值时视为奇异
    pub singular_tolerance: f64,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        LatticeConfig {
            singular_tolerance: DEFAULT_SINGULAR_TOLERANCE,
        }
    }
}

impl LatticeConfig {
    /// 指定奇异性容差
    pub fn with_singular_tolerance(mut self, tolerance: f64) -> Self {
        self.singular_tolerance = tolerance;
        self
    }

    /// 检查配置是否合法
    pub fn validate(&self) -> Result<()> {
        if !self.singular_tolerance.is_finite() || self.singular_tolerance < 0.0 {
            return Err(CellkitError::InvalidArgument(format!(
                "singular tolerance must be a finite non-negative number, got {}",
                self.singular_tolerance
            )));
        }
        Ok(())
    }
}

/// 初始化全局配置（只能调用一次）
pub fn init(config: LatticeConfig) -> Result<()> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| CellkitError::ConfigAlreadyInitialized)?;
    log::debug!(
        "lattice config initialized: singular_tolerance = {:e}",
        config.singular_tolerance
    );
    Ok(())
}

/// 获取当前配置
pub fn get() -> &'static LatticeConfig {
    CONFIG.get_or_init(LatticeConfig::default)
}
