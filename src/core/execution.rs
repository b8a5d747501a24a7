//! # Execution Engine Module / 执行引擎模块
//!
//! The run environment and the case lifecycle. A [`TestEnv`] is an
//! explicitly constructed session: it owns the queue, the rule flags, the
//! counters and the timer, and drives every registered case through
//! setup, body, teardown and the scoreboard, strictly in queue order.
//!
//! 运行环境与用例生命周期。[`TestEnv`] 是一个显式构造的会话：
//! 它拥有队列、规则标志、计数器和计时器，并严格按队列顺序驱动每个
//! 已注册用例经过 setup、主体、teardown 和记分板。

use crate::cli::{self, RunOptions};
use crate::core::assertion::{AbortReason, AssertionContext, CaseContext};
use crate::core::config::HarnessConfig;
use crate::core::marker;
use crate::core::models::{CaseRecord, Fixture, Mark, Outcome, RuleFlags, RunStats, RunTimer, TestCase};
use crate::core::queue::TestQueue;
use crate::infra::t;
use crate::reporting::{console, html, json};
use anyhow::Result;
use colored::*;
use std::fmt;
use std::path::PathBuf;

/// The fixed non-zero status a caller should exit with after a hard abort,
/// in the sysexits "internal software error" range.
/// 硬中止后调用方应使用的固定非零退出状态，
/// 位于 sysexits 的“内部软件错误”范围内。
pub const ABORT_STATUS: i32 = 70;

/// A hard failure that stopped the run: no further cases execute and the
/// in-flight case receives no scoreboard entry.
///
/// 使运行停止的硬失败：不再执行后续用例，
/// 进行中的用例不会获得记分板条目。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunAborted {
    /// The name of the case that was executing when the run stopped.
    pub case: String,
    pub reason: AbortReason,
}

impl RunAborted {
    /// The fixed exit status for callers that terminate on a hard abort.
    pub fn status(&self) -> i32 {
        ABORT_STATUS
    }
}

impl fmt::Display for RunAborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            AbortReason::AssertionFailure => {
                write!(f, "hard assertion failure in case '{}'", self.case)
            }
            AbortReason::AssumeBudget => {
                write!(f, "assumption budget exhausted in case '{}'", self.case)
            }
        }
    }
}

impl std::error::Error for RunAborted {}

/// The effective settings of a session, merged from the TOML config file
/// and the command-line options (CLI wins where both are given).
///
/// 会话的有效设置，由 TOML 配置文件与命令行选项合并而来
/// （两者同时给出时命令行优先）。
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub language: String,
    pub color: bool,
    pub assume_max: u32,
    pub html_report: Option<PathBuf>,
    pub json_report: Option<PathBuf>,
}

impl Default for RunSettings {
    fn default() -> Self {
        RunSettings::merge(HarnessConfig::default(), RunOptions::default())
    }
}

impl RunSettings {
    pub fn merge(config: HarnessConfig, options: RunOptions) -> Self {
        RunSettings {
            language: options.lang.unwrap_or(config.language),
            color: config.color && !options.no_color,
            assume_max: config.assume_max,
            html_report: options.html.or(config.html_report),
            json_report: options.json.or(config.json_report),
        }
    }
}

/// One test session: the queue of registered cases, the run-wide rule
/// flags, the aggregate counters, the run timer and the per-case records
/// consumed by the report writers. Two environments can coexist; nothing
/// here is process-global.
///
/// 一个测试会话：已注册用例队列、运行级规则标志、聚合计数器、运行
/// 计时器，以及供报告生成器使用的逐用例记录。多个环境可以共存；
/// 这里没有任何进程级全局状态。
pub struct TestEnv {
    pub stats: RunStats,
    pub rule: RuleFlags,
    pub timer: RunTimer,
    queue: TestQueue,
    records: Vec<CaseRecord>,
    assume_count: u32,
    settings: RunSettings,
}

impl TestEnv {
    /// Creates a session from raw process arguments: the CLI parser runs
    /// once, the TOML config file is loaded (an explicit `--config` path,
    /// or `UnitRunner.toml` when present), and CLI options override file
    /// values.
    ///
    /// 从原始进程参数创建会话：命令行解析器运行一次，加载 TOML 配置
    /// 文件（显式的 `--config` 路径，或存在时的 `UnitRunner.toml`），
    /// 命令行选项覆盖文件值。
    pub fn new<I>(args: I) -> Result<TestEnv>
    where
        I: IntoIterator<Item = String>,
    {
        let options = cli::parse_args(args)?;
        let config = match &options.config {
            Some(path) => HarnessConfig::from_file(path)?,
            None => HarnessConfig::load_default()?,
        };
        Ok(Self::with_settings(RunSettings::merge(config, options)))
    }

    /// Creates a session with default settings, skipping the CLI and the
    /// config file entirely.
    pub fn with_defaults() -> TestEnv {
        Self::with_settings(RunSettings::default())
    }

    /// Creates a session from already-merged settings.
    pub fn with_settings(settings: RunSettings) -> TestEnv {
        if !settings.color {
            colored::control::set_override(false);
        }
        rust_i18n::set_locale(&settings.language);
        console::session_started(&settings.language);

        TestEnv {
            stats: RunStats::default(),
            rule: RuleFlags::default(),
            timer: RunTimer::default(),
            queue: TestQueue::new(),
            records: Vec::new(),
            assume_count: 0,
            settings,
        }
    }

    /// Registers a case: attaches the fixture if one is given, appends the
    /// case to the rear of the queue and counts it as untested until it
    /// completes the full lifecycle.
    ///
    /// 注册一个用例：如果给定 fixture 则附加它，将用例追加到队列尾部，
    /// 并在其完成完整生命周期之前计为 untested。
    pub fn add(&mut self, mut case: TestCase, fixture: Option<Fixture>) {
        if let Some(fixture) = fixture {
            case.fixture = fixture;
        }
        self.queue.push_back(case);
        self.stats.untested += 1;
    }

    /// Applies a named marker to a case, including its run-wide flag
    /// effect. See [`marker::apply_mark`].
    pub fn apply_mark(&mut self, case: &mut TestCase, mark: Option<&str>) {
        marker::apply_mark(case, &mut self.rule, mark, &self.settings.language);
    }

    /// Applies a tag from the fixed vocabulary to a case.
    pub fn apply_tag(&self, case: &mut TestCase, tag: Option<&str>) {
        marker::apply_tag(case, tag, &self.settings.language);
    }

    /// Applies a named or literal priority to a case.
    pub fn apply_priority(&self, case: &mut TestCase, priority: Option<&str>) {
        marker::apply_priority(case, priority);
    }

    /// Read access to the registered cases, front to rear.
    pub fn queue(&self) -> &TestQueue {
        &self.queue
    }

    /// The per-case outcome records accumulated so far.
    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Runs every registered case front to rear, recording wall-clock time
    /// around the whole run. A hard abort stops the loop immediately: the
    /// remaining cases stay queued and therefore untested.
    ///
    /// 从前到后运行每个已注册用例，并记录整次运行的挂钟时间。
    /// 硬中止会立即停止循环：剩余用例留在队列中，因此保持 untested。
    pub fn run(&mut self) -> Result<(), RunAborted> {
        self.timer.begin();

        let mut outcome = Ok(());
        while let Some(case) = self.queue.pop_front() {
            if let Err(aborted) = self.run_case(case) {
                console::run_aborted(&aborted, &self.settings.language);
                outcome = Err(aborted);
                break;
            }
        }

        self.timer.finish();
        outcome
    }

    /// Drives one case through its lifecycle: reset the per-case state,
    /// honor the skip marker, run setup, body and teardown, then score.
    /// The expectation (`should_fail`) is derived from the case's own mark
    /// at case start, so it cannot leak between cases.
    ///
    /// 驱动一个用例完成其生命周期：重置每用例状态、处理 skip 标记、
    /// 运行 setup、主体和 teardown，然后计分。预期（`should_fail`）
    /// 在用例开始时由用例自身的标记推导，因此不会在用例之间泄漏。
    fn run_case(&mut self, case: TestCase) -> Result<(), RunAborted> {
        self.rule.should_pass = true;

        if case.mark == Mark::Skip && self.rule.skipped {
            // The case is simply not counted into the scored totals; the
            // pre-incremented untested counter keeps record of it.
            console::case_skipped(&case.name, &self.settings.language);
            return Ok(());
        }

        console::case_started(&case.name, &self.settings.language);

        let (info, abort) = {
            let mut ctx = CaseContext::new(
                case.name.clone(),
                case.mark == Mark::Fail,
                &mut self.rule,
                &mut self.assume_count,
                self.settings.assume_max,
                self.settings.language.clone(),
            );

            if let Some(setup) = case.fixture.setup {
                setup();
            }
            case.run_body(&mut ctx);
            let abort = ctx.take_abort();
            if abort.is_none() {
                if let Some(teardown) = case.fixture.teardown {
                    teardown();
                }
            }
            (ctx.info().clone(), abort)
        };

        if let Some(reason) = abort {
            return Err(RunAborted {
                case: case.name,
                reason,
            });
        }

        let outcome = self.scoreboard(&case, &info);
        console::case_ended(&case.name, outcome, &self.settings.language);
        Ok(())
    }

    /// Converts the accumulated flags of a completed case into exactly one
    /// outcome bucket, first match wins, then updates the aggregate
    /// counters. The unexpected buckets are never reached from here: a
    /// plain case classifies into the expected buckets only.
    ///
    /// 将已完成用例累积的标志转换为恰好一个结果分类（首个匹配生效），
    /// 然后更新聚合计数器。unexpected 分类不会从这里到达：
    /// 普通用例只会落入 expected 分类。
    fn scoreboard(&mut self, case: &TestCase, info: &AssertionContext) -> Outcome {
        let outcome = if !info.has_assert {
            Outcome::Empty
        } else if self.rule.timeout {
            self.rule.timeout = false;
            Outcome::TimedOut
        } else if self.rule.skipped {
            self.rule.skipped = false;
            Outcome::Skipped
        } else if case.mark != Mark::Plain {
            // Marked cases: only an unhonored fail expectation counts as a
            // failure, every other marker classifies as passed.
            if case.mark == Mark::Fail && !self.rule.should_pass {
                Outcome::Failed
            } else {
                Outcome::Passed
            }
        } else if self.rule.should_pass {
            Outcome::Passed
        } else {
            Outcome::Failed
        };

        match outcome {
            Outcome::Passed => self.stats.expected_passed += 1,
            Outcome::Failed => self.stats.expected_failed += 1,
            Outcome::Skipped => self.stats.expected_skipped += 1,
            Outcome::TimedOut => self.stats.expected_timeout += 1,
            Outcome::Empty => self.stats.expected_empty += 1,
        }

        self.stats.untested -= 1;
        self.stats.total += 1;
        self.records.push(CaseRecord {
            name: case.name.clone(),
            mark: case.mark,
            outcome,
        });

        outcome
    }

    /// Writes the configured reports, prints the localized summary, tears
    /// the session down and returns the failure signal: zero for a fully
    /// clean run, otherwise the count described in
    /// [`RunStats::failure_signal`].
    ///
    /// 写出已配置的报告，打印本地化摘要，销毁会话并返回失败信号：
    /// 完全干净的运行返回零，否则返回
    /// [`RunStats::failure_signal`] 所描述的计数。
    pub fn summarize(mut self) -> i32 {
        let locale = self.settings.language.clone();

        if let Some(path) = &self.settings.html_report {
            if let Err(e) = html::generate_html_report(&self.records, &self.stats, path, &locale) {
                eprintln!("{} {}", t!("report.html_failed", locale = &locale).red(), e);
            }
        }
        if let Some(path) = &self.settings.json_report {
            if let Err(e) = json::write_json_report(&self.records, &self.stats, &self.timer, path) {
                eprintln!("{} {}", t!("report.json_failed", locale = &locale).red(), e);
            }
        }

        console::session_ended(&self.stats, &self.timer, &locale);
        self.queue.clear();
        self.stats.failure_signal() as i32
    }
}
