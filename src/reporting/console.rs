//! # Console Reporting Module / 控制台报告模块
//!
//! The output collaborator of the execution engine. Every hook receives
//! structured data (case identity, assertion context, final counters) and
//! prints a colorful, localized line; nothing here feeds back into core
//! state.
//!
//! 执行引擎的输出协作者。每个钩子接收结构化数据（用例标识、断言
//! 上下文、最终计数器）并打印彩色的本地化行；这里没有任何内容会
//! 反馈到核心状态中。

use crate::core::assertion::{AbortReason, AssertionContext};
use crate::core::execution::RunAborted;
use crate::core::models::{Outcome, RunStats, RunTimer};
use crate::infra::t;
use crate::infra::timer::format_detail;
use colored::*;

/// Prints the session banner. Invoked once when the environment is created.
/// 打印会话横幅。在环境创建时调用一次。
pub fn session_started(locale: &str) {
    println!("{}", t!("run.session_started", locale = locale).cyan().bold());
}

/// Announces the case about to execute.
pub fn case_started(name: &str, locale: &str) {
    println!("{}", t!("run.case_started", locale = locale, name = name).blue());
}

/// Announces a case whose body will not execute this run.
pub fn case_skipped(name: &str, locale: &str) {
    println!("{}", t!("run.case_skipped", locale = locale, name = name).yellow());
}

/// Prints the details of a recorded assertion miss: message, source
/// location and the enclosing case.
///
/// 打印被记录的断言未命中的详情：消息、源位置和所属用例。
pub fn asserted(info: &AssertionContext, locale: &str) {
    println!(
        "{}",
        t!(
            "assert.failed",
            locale = locale,
            message = info.message,
            file = info.file,
            line = info.line,
            function = info.function
        )
        .red()
    );
}

/// Prints the classified outcome of a completed case as a summary row.
/// 将已完成用例的分类结果打印为摘要行。
pub fn case_ended(name: &str, outcome: Outcome, locale: &str) {
    let status_str = outcome.status_str(locale);
    let status_colored = match outcome {
        Outcome::Passed => status_str.green(),
        Outcome::Failed => status_str.red(),
        Outcome::TimedOut => status_str.yellow(),
        Outcome::Skipped | Outcome::Empty => status_str.dimmed(),
    };

    println!("  - {:<18} | {:<40}", status_colored, name);
}

/// Reports a hard abort that stopped the run.
pub fn run_aborted(aborted: &RunAborted, locale: &str) {
    let key = match aborted.reason {
        AbortReason::AssertionFailure => "run.aborted_assert",
        AbortReason::AssumeBudget => "run.aborted_assume",
    };
    println!("{}", t!(key, locale = locale, name = aborted.case).red().bold());
}

/// Reports an unrecognized marker name. The operation is a no-op otherwise.
pub fn invalid_marker(name: &str, locale: &str) {
    println!("{}", t!("marker.invalid", locale = locale, name = name).red());
}

/// Reports an unrecognized tag name. The operation is a no-op otherwise.
pub fn invalid_tag(name: &str, locale: &str) {
    println!("{}", t!("tag.invalid", locale = locale, name = name).red());
}

/// Prints the final counter table, the elapsed wall-clock time and the
/// overall verdict of the run.
///
/// 打印最终计数表、经过的挂钟时间以及本次运行的总体结论。
///
/// # Output Format / 输出格式
/// ```text
/// --- Run Summary ---
///   - Passed               |      2
///   - Failed               |      1
///   ...
/// Elapsed: 0m 0s 12ms 345us 678ns
/// ```
pub fn session_ended(stats: &RunStats, timer: &RunTimer, locale: &str) {
    println!("\n{}", t!("summary.banner", locale = locale).bold());

    let rows = [
        ("summary.expected_passed", stats.expected_passed),
        ("summary.expected_failed", stats.expected_failed),
        ("summary.unexpected_passed", stats.unexpected_passed),
        ("summary.unexpected_failed", stats.unexpected_failed),
        ("summary.expected_skipped", stats.expected_skipped),
        ("summary.expected_empty", stats.expected_empty),
        ("summary.expected_timeout", stats.expected_timeout),
        ("summary.total", stats.total),
        ("summary.untested", stats.untested),
    ];

    for (key, count) in rows {
        println!("  - {:<22} | {:>6}", t!(key, locale = locale), count);
    }

    println!(
        "{}",
        t!(
            "summary.elapsed",
            locale = locale,
            time = format_detail(&timer.detail)
        )
    );

    let signal = stats.failure_signal();
    if signal == 0 {
        println!("{}", t!("summary.all_clear", locale = locale).green().bold());
    } else {
        println!(
            "{}",
            t!("summary.failures", locale = locale, count = signal).red().bold()
        );
    }
}
