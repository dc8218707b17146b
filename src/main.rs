//! # cellkit - 晶胞几何计算工具
//!
//! 晶格几何引擎 (`cellkit` 库) 的命令行前端。
//!
//! ## 子命令
//! - `convert`  - 晶胞 / 倒空间晶胞 / A 张量之间的转换
//! - `orth`     - 分数坐标 ⇄ 笛卡尔坐标
//! - `dspacing` - 计算 (hkl) 的 d 间距与 2θ
//! - `esd`      - 晶胞参数不确定度
//! - `batch`    - 并行批量转换 CSV 晶胞表
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── cellkit::lattice (晶格几何引擎)
//!   ├── batch/      (文件收集与并行执行)
//!   └── utils/      (输出与进度条)
//! ```

mod batch;
mod cli;
mod commands;
mod utils;

use cellkit::config::{self, LatticeConfig};
use clap::Parser;
use cli::Cli;
use env_logger::Env;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let lattice_config = LatticeConfig::default().with_singular_tolerance(cli.tolerance);
    let result = config::init(lattice_config).and_then(|_| commands::run(cli.command));

    if let Err(e) = result {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
