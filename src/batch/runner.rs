//! # 批量执行器
//!
//! 在独立的 rayon 线程池中并行处理文件列表。
//! 晶格计算全部为纯函数，各文件之间不共享可变状态。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::utils::progress;

use cellkit::{CellkitError, Result};
use rayon::prelude::*;

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功
    Success(String),
    /// 跳过（输出已存在）
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    pub success: usize,
    pub skipped: usize,
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(msg) => {
                log::debug!("{}", msg);
                self.success += 1;
            }
            ProcessResult::Skipped(msg) => {
                log::info!("{}", msg);
                self.skipped += 1;
            }
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建批量执行器（0 表示使用全部 CPU 核心）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行处理任务列表（通常是文件路径或 输入/输出 路径对）
    pub fn run<T, F>(&self, jobs: Vec<T>, processor: F) -> Result<BatchResult>
    where
        T: Sync,
        F: Fn(&T) -> ProcessResult + Sync + Send,
    {
        let pb = progress::create_progress_bar(jobs.len() as u64, "Converting");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| CellkitError::Other(format!("failed to build thread pool: {}", e)))?;
        log::debug!("running {} jobs on {} threads", jobs.len(), self.jobs);

        let results: Vec<ProcessResult> = pool.install(|| {
            jobs.par_iter()
                .map(|job| {
                    let result = processor(job);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}
