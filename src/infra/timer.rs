//! # Timer Module / 计时器模块
//!
//! Pure conversion of an elapsed [`Duration`] into the decomposed
//! minutes/seconds/milliseconds/microseconds/nanoseconds detail used by
//! the summary and the reports. No side effects on core state.
//!
//! 将经过的 [`Duration`] 纯函数式地转换为摘要和报告使用的
//! 分/秒/毫秒/微秒/纳秒分解结构。对核心状态没有副作用。

use serde::Serialize;
use std::time::Duration;

/// An elapsed duration decomposed into display components. Each field is
/// the remainder after the coarser ones, so `61.5s` becomes
/// `1m 1s 500ms 0us 0ns`.
///
/// 分解为显示分量的经过时长。每个字段都是更粗粒度字段之后的余数，
/// 因此 `61.5s` 变为 `1m 1s 500ms 0us 0ns`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimerDetail {
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u32,
    pub microseconds: u32,
    pub nanoseconds: u32,
}

/// Decomposes an elapsed duration into its display components.
/// 将经过的时长分解为其显示分量。
pub fn decompose(elapsed: Duration) -> TimerDetail {
    let total_secs = elapsed.as_secs();
    let subsec = elapsed.subsec_nanos();

    TimerDetail {
        minutes: total_secs / 60,
        seconds: total_secs % 60,
        milliseconds: subsec / 1_000_000,
        microseconds: (subsec / 1_000) % 1_000,
        nanoseconds: subsec % 1_000,
    }
}

/// Formats a decomposed duration as a compact single-line string.
pub fn format_detail(detail: &TimerDetail) -> String {
    format!(
        "{}m {}s {}ms {}us {}ns",
        detail.minutes, detail.seconds, detail.milliseconds, detail.microseconds, detail.nanoseconds
    )
}
