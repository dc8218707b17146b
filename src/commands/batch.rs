//! # batch 命令实现
//!
//! 批量转换 CSV 晶胞表：每个输入文件（表头 a,b,c,alpha,beta,gamma）
//! 输出一个 `<stem>_lattice.csv`（递归时保留子目录结构），每行附加 A 张量、倒空间晶胞与体积。
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `batch/` 进行文件收集和并行处理
//! - 使用 `commands/summary.rs`

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::batch::BatchArgs;
use crate::commands::summary::LatticeSummary;
use crate::utils::output;

use cellkit::{Cell, CellkitError, Result};

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// 输出文件后缀，收集输入时排除
const OUTPUT_SUFFIX: &str = "_lattice.csv";

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch Cell Conversion");

    if !args.input.exists() {
        return Err(CellkitError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let files: Vec<PathBuf> = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive)
        .collect()
        .into_iter()
        .filter(|p| !is_output_file(p))
        .collect();

    if files.is_empty() {
        return Err(CellkitError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }

    output::print_info(&format!("Found {} cell tables", files.len()));

    let input_root = if args.input.is_file() {
        args.input.parent().unwrap_or(Path::new(""))
    } else {
        args.input.as_path()
    };
    let jobs = plan_outputs(files, input_root, &args.output)?;

    fs::create_dir_all(&args.output).map_err(|e| CellkitError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(jobs, |(input, output_file)| {
        process_file(input, output_file, args.overwrite)
    })?;

    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

fn is_output_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(OUTPUT_SUFFIX))
        .unwrap_or(false)
}

/// 输出路径：保留输入相对 `input_root` 的子目录，文件名为 `<stem>_lattice.csv`
fn output_path(input: &Path, input_root: &Path, output_dir: &Path) -> PathBuf {
    let subdir = input
        .strip_prefix(input_root)
        .ok()
        .and_then(Path::parent)
        .unwrap_or(Path::new(""));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("cells");
    output_dir
        .join(subdir)
        .join(format!("{}{}", stem, OUTPUT_SUFFIX))
}

/// 为每个输入分配输出路径，两个输入映射到同一输出时报错
fn plan_outputs(
    files: Vec<PathBuf>,
    input_root: &Path,
    output_dir: &Path,
) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();
    let mut jobs = Vec::with_capacity(files.len());

    for input in files {
        let output_file = output_path(&input, input_root, output_dir);
        if let Some(other) = claimed.insert(output_file.clone(), input.clone()) {
            return Err(CellkitError::InvalidArgument(format!(
                "'{}' and '{}' would both be written to '{}'",
                other.display(),
                input.display(),
                output_file.display()
            )));
        }
        jobs.push((input, output_file));
    }

    Ok(jobs)
}

/// 处理单个输入文件
fn process_file(input: &Path, output_file: &Path, overwrite: bool) -> ProcessResult {
    if output_file.exists() && !overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_file.display()
        ));
    }

    match convert_file(input, output_file) {
        Ok(count) => {
            log::debug!("{}: {} cells converted", input.display(), count);
            ProcessResult::Success(format!("{} -> {}", input.display(), output_file.display()))
        }
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}

fn convert_file(input: &Path, output_file: &Path) -> Result<usize> {
    let reader = File::open(input).map_err(|e| CellkitError::FileReadError {
        path: input.display().to_string(),
        source: e,
    })?;

    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent).map_err(|e| CellkitError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }
    let writer = File::create(output_file).map_err(|e| CellkitError::FileWriteError {
        path: output_file.display().to_string(),
        source: e,
    })?;

    convert_cells(reader, writer, &input.display().to_string()).map_err(|e| {
        // 只删除本次创建的半成品输出
        let _ = fs::remove_file(output_file);
        e
    })
}

/// 逐行读取晶胞并写出全部表示，返回转换的行数
///
/// 任一行非法或奇异时整体失败，错误信息带数据行号（从 1 开始，不含表头）。
pub fn convert_cells<R: Read, W: Write>(reader: R, writer: W, source: &str) -> Result<usize> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut wtr = csv::Writer::from_writer(writer);

    let mut count = 0;
    for (i, record) in rdr.deserialize::<Cell>().enumerate() {
        let row_error = |reason: String| CellkitError::ParseError {
            format: "cell CSV".to_string(),
            path: source.to_string(),
            reason: format!("row {}: {}", i + 1, reason),
        };

        let cell = record.map_err(|e| row_error(e.to_string()))?;
        let summary = cell
            .validate()
            .and_then(|_| LatticeSummary::from_cell(&cell))
            .map_err(|e| row_error(e.to_string()))?;
        wtr.serialize(summary.to_row())?;
        count += 1;
    }

    wtr.flush().map_err(|e| CellkitError::FileWriteError {
        path: source.to_string(),
        source: e,
    })?;
    Ok(count)
}
