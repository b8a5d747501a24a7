//! # JSON Reporting Module / JSON 报告模块
//!
//! Machine-readable run reports: the final counters, the decomposed run
//! timer and every per-case record, serialized as pretty-printed JSON.
//!
//! 机器可读的运行报告：最终计数器、分解后的运行计时器以及每条逐用例
//! 记录，序列化为格式化的 JSON。

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::models::{CaseRecord, RunStats, RunTimer};
use crate::infra::timer::TimerDetail;

/// The serialized shape of a run report.
/// 运行报告的序列化结构。
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    generated_at: String,
    elapsed_ms: u128,
    timer: TimerDetail,
    stats: &'a RunStats,
    failure_signal: u32,
    cases: &'a [CaseRecord],
}

/// Writes the run report as pretty-printed JSON to the given path.
///
/// # Errors
/// Returns an error when serialization fails or the file cannot be written.
pub fn write_json_report(
    records: &[CaseRecord],
    stats: &RunStats,
    timer: &RunTimer,
    path: &Path,
) -> Result<()> {
    let report = RunReport {
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        elapsed_ms: timer.elapsed.as_millis(),
        timer: timer.detail,
        stats,
        failure_signal: stats.failure_signal(),
        cases: records,
    };

    let payload = serde_json::to_string_pretty(&report)?;
    fs::write(path, payload)?;
    Ok(())
}
