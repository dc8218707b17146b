//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `cellkit::lattice`, `utils/`, `batch/`
//! - 子模块: convert, orth, dspacing, esd, batch, summary

pub mod batch;
pub mod convert;
pub mod dspacing;
pub mod esd;
pub mod orth;
pub mod summary;

use crate::cli::Commands;
use cellkit::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Convert(args) => convert::execute(args),
        Commands::Orth(args) => orth::execute(args),
        Commands::Dspacing(args) => dspacing::execute(args),
        Commands::Esd(args) => esd::execute(args),
        Commands::Batch(args) => batch::execute(args),
    }
}
